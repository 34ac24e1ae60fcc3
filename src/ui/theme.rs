// Light/dark theme toggle. Light mode is marked with `data-theme="light"` on the
// root element; dark is the attribute's absence. The choice survives reloads
// when the browser grants storage.

use crate::dom_helpers;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Storage, Window};

pub const TOGGLE_ID: &str = "themeToggle";
pub const STORAGE_KEY: &str = "theme";
pub const ATTRIBUTE: &str = "data-theme";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    // Anything other than "light" (including nothing) reads as dark
    pub fn parse(value: Option<&str>) -> Theme {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }
}

// Key/value store the preference lives in
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str) -> Result<(), JsValue>;
}

impl PreferenceStore for Storage {
    fn load(&self, key: &str) -> Option<String> {
        self.get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), JsValue> {
        self.set_item(key, value)
    }
}

// No store: nothing is remembered and saving always succeeds
impl<S: PreferenceStore> PreferenceStore for Option<S> {
    fn load(&self, key: &str) -> Option<String> {
        self.as_ref().and_then(|store| store.load(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), JsValue> {
        match self {
            Some(store) => store.save(key, value),
            None => Ok(()),
        }
    }
}

pub fn stored_theme<S: PreferenceStore>(store: &S) -> Option<Theme> {
    store
        .load(STORAGE_KEY)
        .map(|value| Theme::parse(Some(&value)))
}

// Flips `current` and persists the result
pub fn toggle_preference<S: PreferenceStore>(
    current: Theme,
    store: &S,
) -> Result<Theme, JsValue> {
    let next = current.toggled();
    store.save(STORAGE_KEY, next.as_str())?;
    Ok(next)
}

pub fn current_theme(root: &Element) -> Theme {
    Theme::parse(root.get_attribute(ATTRIBUTE).as_deref())
}

pub fn apply(root: &Element, theme: Theme) -> Result<(), JsValue> {
    match theme {
        Theme::Light => root.set_attribute(ATTRIBUTE, Theme::Light.as_str()),
        Theme::Dark => root.remove_attribute(ATTRIBUTE),
    }
}

pub fn install(window: &Window, document: &Document) -> Result<(), JsValue> {
    let root = document
        .document_element()
        .ok_or("document has no root element")?;
    // Blocked storage throws rather than returning None
    let store = match window.local_storage() {
        Ok(store) => store,
        Err(err) => {
            log::warn!("localStorage blocked: {:?}", err);
            None
        }
    };
    if store.is_none() {
        log::warn!("theme preference will not be persisted");
    }

    if let Some(theme) = stored_theme(&store) {
        apply(&root, theme)?;
    }

    let toggle: Element = dom_helpers::element_by_id(document, TOGGLE_ID)?;
    dom_helpers::add_listener(&toggle, "click", move |_| {
        let result = toggle_preference(current_theme(&root), &store)
            .and_then(|theme| apply(&root, theme).map(|_| theme));
        match result {
            Ok(theme) => log::info!("theme switched to {}", theme.as_str()),
            Err(err) => log::warn!("failed to switch theme: {:?}", err),
        }
    })
}
