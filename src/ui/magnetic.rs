// Elements marked `.magnetic` lean toward the pointer while it hovers over them.

use crate::dom_helpers::{self, Rect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, MouseEvent};

pub const SELECTOR: &str = ".magnetic";
pub const STRENGTH: f64 = 0.15;

// Translation for a pointer at client (`x`, `y`) over `rect`
pub fn magnetic_offset(rect: &Rect, x: f64, y: f64) -> [f64; 2] {
    let [cx, cy] = rect.center();
    [(x - cx) * STRENGTH, (y - cy) * STRENGTH]
}

pub fn transform(offset: [f64; 2]) -> String {
    format!("translate({}px, {}px)", offset[0], offset[1])
}

pub fn install(document: &Document) -> Result<(), JsValue> {
    for element in dom_helpers::query_all(document, SELECTOR)? {
        let target = element.clone();
        dom_helpers::add_listener(&element, "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                let offset = magnetic_offset(
                    &Rect::of(&target),
                    event.client_x() as f64,
                    event.client_y() as f64,
                );
                if let Err(err) = dom_helpers::set_style(&target, "transform", &transform(offset)) {
                    log::warn!("failed to apply magnetic offset: {:?}", err);
                }
            }
        })?;
        let target = element.clone();
        dom_helpers::add_listener(&element, "mouseleave", move |_| {
            if let Err(err) = dom_helpers::set_style(&target, "transform", "") {
                log::warn!("failed to reset magnetic offset: {:?}", err);
            }
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button() -> Rect {
        Rect {
            left: 100.0,
            top: 100.0,
            width: 80.0,
            height: 40.0,
        }
    }

    #[test]
    fn centered_pointer_does_not_move_element() {
        assert_eq!(magnetic_offset(&button(), 140.0, 120.0), [0.0, 0.0]);
    }

    #[test]
    fn offset_follows_pointer_at_fixed_strength() {
        let offset = magnetic_offset(&button(), 180.0, 100.0);
        assert!((offset[0] - 6.0).abs() < 1e-12);
        assert!((offset[1] + 3.0).abs() < 1e-12);
    }

    #[test]
    fn formats_css_translate() {
        assert_eq!(transform([6.0, -3.0]), "translate(6px, -3px)");
    }
}
