// Helper functions for dealing with the DOM: element lookup, event listeners
// and intersection observers.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, DomRect, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, NodeList, Window,
};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))
}

pub fn document(window: &Window) -> Result<Document, JsValue> {
    window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))
}

pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{}", id)))?;
    element
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("#{} has an unexpected element type", id)))
}

pub fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    Ok(elements(&document.query_selector_all(selector)?))
}

pub fn body(document: &Document) -> Result<HtmlElement, JsValue> {
    document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))
}

pub fn set_style(element: &Element, property: &str, value: &str) -> Result<(), JsValue> {
    match element.dyn_ref::<HtmlElement>() {
        Some(html) => html.style().set_property(property, value),
        None => Ok(()),
    }
}

// Registers `handler` for the lifetime of the page
pub fn add_listener<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub struct ObserverOptions<'a> {
    pub root_margin: &'a str,
    pub threshold: f64,
}

// Builds an observer whose callback lives for the lifetime of the page
#[allow(deprecated)]
pub fn intersection_observer<F>(
    options: &ObserverOptions,
    mut handler: F,
) -> Result<IntersectionObserver, JsValue>
where
    F: FnMut(Vec<IntersectionObserverEntry>, &IntersectionObserver) + 'static,
{
    let callback = move |entries: js_sys::Array, observer: IntersectionObserver| {
        let entries = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .collect();
        handler(entries, &observer);
    };
    let closure = Closure::wrap(
        Box::new(callback) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>
    );

    let mut init = IntersectionObserverInit::new();
    init.root_margin(options.root_margin);
    init.threshold(&JsValue::from_f64(options.threshold));
    let observer =
        IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)?;
    closure.forget();
    Ok(observer)
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn from_dom(rect: &DomRect) -> Rect {
        Rect {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }

    pub fn of(element: &Element) -> Rect {
        Rect::from_dom(&element.get_bounding_client_rect())
    }

    pub fn center(&self) -> [f64; 2] {
        [self.left + self.width / 2.0, self.top + self.height / 2.0]
    }

    // Converts viewport coordinates into coordinates relative to the top-left corner
    pub fn local(&self, client_x: f64, client_y: f64) -> [f64; 2] {
        [client_x - self.left, client_y - self.top]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_converts_client_coordinates() {
        let rect = Rect {
            left: 100.0,
            top: 40.0,
            width: 200.0,
            height: 80.0,
        };
        assert_eq!(rect.center(), [200.0, 80.0]);
        assert_eq!(rect.local(150.0, 50.0), [50.0, 10.0]);
    }
}
