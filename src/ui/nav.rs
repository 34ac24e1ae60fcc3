// Header state, active section highlighting and smooth anchor scrolling.

use crate::dom_helpers::{self, ObserverOptions};
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

pub const HEADER_ID: &str = "siteHeader";
pub const SCROLLED_CLASS: &str = "scrolled";
pub const SCROLL_THRESHOLD: f64 = 50.0;

pub const SECTION_SELECTOR: &str = ".section";
pub const NAV_LINK_SELECTOR: &str = "#headerNav a";
pub const ACTIVE_CLASS: &str = "active";
pub const SECTION_ATTRIBUTE: &str = "data-section";
pub const SECTION_ROOT_MARGIN: &str = "-30% 0px -50% 0px";

pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}

pub fn is_active(link_section: Option<&str>, section_id: &str) -> bool {
    link_section == Some(section_id)
}

// In-page target of an anchor href, None for a bare "#" or an external link
pub fn anchor_target(href: &str) -> Option<&str> {
    if href.starts_with('#') && href.len() > 1 {
        Some(href)
    } else {
        None
    }
}

fn highlight(links: &[Element], section_id: &str) {
    for link in links {
        let active = is_active(link.get_attribute(SECTION_ATTRIBUTE).as_deref(), section_id);
        if let Err(err) = link.class_list().toggle_with_force(ACTIVE_CLASS, active) {
            log::warn!("failed to update nav link: {:?}", err);
        }
    }
}

#[allow(deprecated)]
fn scroll_to(document: &Document, window: &Window, href: &str) -> Result<(), JsValue> {
    let target = match document.query_selector(href)? {
        Some(target) => target,
        None => return Ok(()),
    };
    let mut options = ScrollIntoViewOptions::new();
    options.behavior(ScrollBehavior::Smooth);
    options.block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    window
        .history()?
        .push_state_with_url(&JsValue::NULL, "", Some(href))
}

pub fn install_header(window: &Window, document: &Document) -> Result<(), JsValue> {
    let header: Element = dom_helpers::element_by_id(document, HEADER_ID)?;
    let scroll_window = window.clone();
    dom_helpers::add_listener(window, "scroll", move |_| {
        let scroll_y = scroll_window.scroll_y().unwrap_or(0.0);
        if let Err(err) = header
            .class_list()
            .toggle_with_force(SCROLLED_CLASS, is_scrolled(scroll_y))
        {
            log::warn!("failed to update header scroll state: {:?}", err);
        }
    })
}

pub fn install_active_nav(document: &Document) -> Result<(), JsValue> {
    let links = dom_helpers::query_all(document, NAV_LINK_SELECTOR)?;
    let options = ObserverOptions {
        root_margin: SECTION_ROOT_MARGIN,
        threshold: 0.0,
    };
    let observer = dom_helpers::intersection_observer(&options, move |entries, _| {
        for entry in entries.iter().filter(|entry| entry.is_intersecting()) {
            highlight(&links, &entry.target().id());
        }
    })?;
    for section in dom_helpers::query_all(document, SECTION_SELECTOR)? {
        observer.observe(&section);
    }
    Ok(())
}

pub fn install_smooth_scroll(window: &Window, document: &Document) -> Result<(), JsValue> {
    for anchor in dom_helpers::query_all(document, ANCHOR_SELECTOR)? {
        let link = anchor.clone();
        let window = window.clone();
        let document = document.clone();
        dom_helpers::add_listener(&anchor, "click", move |event| {
            event.prevent_default();
            let href = match link.get_attribute("href") {
                Some(href) => href,
                None => return,
            };
            if let Some(target) = anchor_target(&href) {
                if let Err(err) = scroll_to(&document, &window, target) {
                    log::warn!("smooth scroll to {} failed: {:?}", target, err);
                }
            }
        })?;
    }
    Ok(())
}
