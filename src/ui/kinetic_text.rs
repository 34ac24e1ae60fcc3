// Splits the hero name into per-character spans with staggered animation delays.

use crate::dom_helpers;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

pub const FIRST_NAME_ID: &str = "heroFirstName";
pub const LAST_NAME_ID: &str = "heroLastName";

pub const BASE_DELAY: f64 = 0.3;
pub const CHAR_STAGGER: f64 = 0.05;
pub const WORD_GAP: f64 = 0.1;

// Animation delay in seconds for every character of `text`
pub fn char_delays(text: &str, base_delay: f64) -> Vec<(char, f64)> {
    text.chars()
        .enumerate()
        .map(|(i, c)| (c, base_delay + i as f64 * CHAR_STAGGER))
        .collect()
}

// The second word starts once the first has finished, plus a short gap
pub fn second_word_delay(first: &str) -> f64 {
    BASE_DELAY + first.chars().count() as f64 * CHAR_STAGGER + WORD_GAP
}

fn build_chars(
    document: &Document,
    container: &Element,
    text: &str,
    base_delay: f64,
) -> Result<(), JsValue> {
    for (c, delay) in char_delays(text, base_delay) {
        let span = document.create_element("span")?;
        span.set_class_name("char");
        span.set_text_content(Some(&c.to_string()));
        dom_helpers::set_style(&span, "animation-delay", &format!("{:.2}s", delay))?;
        container.append_child(&span)?;
    }
    Ok(())
}

pub fn install(document: &Document, first_name: &str, last_name: &str) -> Result<(), JsValue> {
    let first: Element = dom_helpers::element_by_id(document, FIRST_NAME_ID)?;
    let last: Element = dom_helpers::element_by_id(document, LAST_NAME_ID)?;
    build_chars(document, &first, first_name, BASE_DELAY)?;
    build_chars(document, &last, last_name, second_word_delay(first_name))
}
