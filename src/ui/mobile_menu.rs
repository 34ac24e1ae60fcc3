// Hamburger-driven mobile menu. While open the page behind it does not scroll.

use crate::dom_helpers;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

pub const HAMBURGER_ID: &str = "hamburger";
pub const MENU_ID: &str = "mobileMenu";
pub const MENU_LINKS: &str = "#mobileMenu a";
pub const OPEN_CLASS: &str = "open";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn toggled(self) -> MenuState {
        MenuState { open: !self.open }
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    pub fn body_overflow(&self) -> &'static str {
        if self.open {
            "hidden"
        } else {
            ""
        }
    }
}

pub struct MobileMenu {
    hamburger: Element,
    menu: Element,
    body: HtmlElement,
}

impl MobileMenu {
    pub fn new(document: &Document) -> Result<MobileMenu, JsValue> {
        Ok(MobileMenu {
            hamburger: dom_helpers::element_by_id(document, HAMBURGER_ID)?,
            menu: dom_helpers::element_by_id(document, MENU_ID)?,
            body: dom_helpers::body(document)?,
        })
    }

    // The menu's class list is the source of truth
    pub fn state(&self) -> MenuState {
        MenuState {
            open: self.menu.class_list().contains(OPEN_CLASS),
        }
    }

    pub fn toggle(&self) -> Result<MenuState, JsValue> {
        let state = self.state().toggled();
        self.apply(state)?;
        Ok(state)
    }

    pub fn close(&self) -> Result<(), JsValue> {
        self.apply(MenuState::default())
    }

    fn apply(&self, state: MenuState) -> Result<(), JsValue> {
        self.hamburger
            .class_list()
            .toggle_with_force(OPEN_CLASS, state.open)?;
        self.menu.class_list().toggle_with_force(OPEN_CLASS, state.open)?;
        self.hamburger
            .set_attribute("aria-expanded", state.aria_expanded())?;
        self.body.style().set_property("overflow", state.body_overflow())
    }
}

pub fn install(document: &Document) -> Result<Rc<MobileMenu>, JsValue> {
    let menu = Rc::new(MobileMenu::new(document)?);
    let hamburger = menu.hamburger.clone();
    {
        let menu = menu.clone();
        dom_helpers::add_listener(&hamburger, "click", move |_| {
            match menu.toggle() {
                Ok(state) => log::debug!("mobile menu open: {}", state.open),
                Err(err) => log::warn!("failed to toggle mobile menu: {:?}", err),
            }
        })?;
    }
    for link in dom_helpers::query_all(document, MENU_LINKS)? {
        let menu = menu.clone();
        dom_helpers::add_listener(&link, "click", move |_| {
            if let Err(err) = menu.close() {
                log::warn!("failed to close mobile menu: {:?}", err);
            }
        })?;
    }
    Ok(menu)
}
