// Custom cursor: a dot pinned to the pointer and a ring that eases after it.

use crate::animation::AnimationLoop;
use crate::dom_helpers;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent, Window};

pub const DOT_ID: &str = "cursorDot";
pub const RING_ID: &str = "cursorRing";
pub const HOVER_TARGETS: &str = "a, button, .magnetic";
pub const HOVER_CLASS: &str = "hovering";

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CursorFollower {
    pub target: [f64; 2],
    pub ring: [f64; 2],
}

impl CursorFollower {
    // Fraction of the remaining distance the ring covers each frame.
    pub const EASING: f64 = 0.15;
    // Viewports this narrow keep the native cursor.
    pub const MIN_VIEWPORT_WIDTH: f64 = 768.0;

    pub fn is_enabled(viewport_width: f64) -> bool {
        viewport_width > CursorFollower::MIN_VIEWPORT_WIDTH
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.target = [x, y];
    }

    pub fn step(&mut self) -> [f64; 2] {
        self.ring[0] += (self.target[0] - self.ring[0]) * CursorFollower::EASING;
        self.ring[1] += (self.target[1] - self.ring[1]) * CursorFollower::EASING;
        self.ring
    }
}

fn place(element: &Element, [x, y]: [f64; 2]) -> Result<(), JsValue> {
    dom_helpers::set_style(element, "left", &format!("{}px", x))?;
    dom_helpers::set_style(element, "top", &format!("{}px", y))
}

// Returns None on narrow viewports, where the custom cursor stays off
pub fn install(window: &Window, document: &Document) -> Result<Option<AnimationLoop>, JsValue> {
    let viewport_width = window.inner_width()?.as_f64().unwrap_or(0.0);
    if !CursorFollower::is_enabled(viewport_width) {
        log::debug!("custom cursor disabled at viewport width {}", viewport_width);
        return Ok(None);
    }

    let dot: Element = dom_helpers::element_by_id(document, DOT_ID)?;
    let ring: Element = dom_helpers::element_by_id(document, RING_ID)?;
    let follower = Rc::new(RefCell::new(CursorFollower::default()));

    {
        let follower = follower.clone();
        dom_helpers::add_listener(document, "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                let (x, y) = (event.client_x() as f64, event.client_y() as f64);
                follower.borrow_mut().pointer_moved(x, y);
                if let Err(err) = place(&dot, [x, y]) {
                    log::warn!("failed to move cursor dot: {:?}", err);
                }
            }
        })?;
    }

    for target in dom_helpers::query_all(document, HOVER_TARGETS)? {
        let enter_ring = ring.clone();
        dom_helpers::add_listener(&target, "mouseenter", move |_| {
            if let Err(err) = enter_ring.class_list().add_1(HOVER_CLASS) {
                log::warn!("failed to mark cursor ring hovering: {:?}", err);
            }
        })?;
        let leave_ring = ring.clone();
        dom_helpers::add_listener(&target, "mouseleave", move |_| {
            if let Err(err) = leave_ring.class_list().remove_1(HOVER_CLASS) {
                log::warn!("failed to clear cursor ring hovering: {:?}", err);
            }
        })?;
    }

    let animation = AnimationLoop::start(window, move || {
        let position = follower.borrow_mut().step();
        if let Err(err) = place(&ring, position) {
            log::warn!("failed to move cursor ring: {:?}", err);
        }
    })?;
    Ok(Some(animation))
}
