// Fades `.reveal` elements in the first time they scroll into view, staggered
// by their position among the reveal elements of the same parent.

use crate::dom_helpers::{self, ObserverOptions};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

pub const SELECTOR: &str = ".reveal";
pub const VISIBLE_CLASS: &str = "visible";
pub const STAGGER: f64 = 0.1;
pub const THRESHOLD: f64 = 0.06;
pub const ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub fn stagger_index<T: PartialEq>(siblings: &[T], target: &T) -> usize {
    siblings
        .iter()
        .position(|sibling| sibling == target)
        .unwrap_or(0)
}

pub fn transition_delay(index: usize) -> String {
    format!("{:.1}s", index as f64 * STAGGER)
}

fn reveal(target: &Element) -> Result<(), JsValue> {
    let index = match target.parent_element() {
        Some(parent) => {
            let siblings = dom_helpers::elements(&parent.query_selector_all(SELECTOR)?);
            stagger_index(&siblings, target)
        }
        None => 0,
    };
    dom_helpers::set_style(target, "transition-delay", &transition_delay(index))?;
    target.class_list().add_1(VISIBLE_CLASS)
}

pub fn install(document: &Document) -> Result<(), JsValue> {
    let options = ObserverOptions {
        root_margin: ROOT_MARGIN,
        threshold: THRESHOLD,
    };
    let observer = dom_helpers::intersection_observer(&options, |entries, observer| {
        for entry in entries.iter().filter(|entry| entry.is_intersecting()) {
            let target = entry.target();
            if let Err(err) = reveal(&target) {
                log::warn!("failed to reveal element: {:?}", err);
            }
            observer.unobserve(&target);
        }
    })?;
    for element in dom_helpers::query_all(document, SELECTOR)? {
        observer.observe(&element);
    }
    Ok(())
}
