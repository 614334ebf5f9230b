//! Theme toggle wiring.
//!
//! Reads the persisted choice from `localStorage`, falls back to the
//! `prefers-color-scheme` media query, and applies the result as a class on
//! the `<html>` element, or on `<body>` when [`ThemeRoot::Body`] is
//! configured. Each click on the toggle flips the class and writes the new
//! value back.

use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement, Storage, Window};

use crate::config::{SiteConfig, ThemeRoot};
use crate::state::theme::Preference;
use crate::util::dom;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Owns the root element and storage handle for the page's lifetime.
pub struct ThemeToggle {
    root: Element,
    storage: Option<Storage>,
    dark_class: String,
    storage_key: String,
}

impl ThemeToggle {
    /// Apply the initial preference and subscribe to toggle clicks.
    pub fn mount(window: &Window, config: &SiteConfig) -> Result<(), JsValue> {
        let document = dom::document(window)?;
        let root: Element = match config.theme_root {
            ThemeRoot::Html => document.document_element().ok_or_else(|| dom::js_error("document has no root element"))?,
            ThemeRoot::Body => document.body().ok_or_else(|| dom::js_error("document has no body"))?.into(),
        };
        let toggle: HtmlElement = dom::element_by_id(&document, &config.theme_toggle_id)?;

        let this = Self {
            root,
            storage: window.local_storage()?,
            dark_class: config.dark_class.clone(),
            storage_key: config.storage_key.clone(),
        };

        let initial = Preference::resolve(this.persisted().as_deref(), os_prefers_dark(window));
        this.apply(initial)?;
        log::debug!("theme initialized as {}", initial.as_str());

        dom::listen(&toggle, "click", false, move |_| this.on_click())
    }

    fn on_click(&self) {
        let current = Preference::from_dark(self.root.class_list().contains(&self.dark_class));
        let next = current.toggled();
        if let Err(err) = self.apply(next) {
            log::warn!("failed to apply theme: {err:?}");
            return;
        }
        self.persist(next);
    }

    fn apply(&self, preference: Preference) -> Result<(), JsValue> {
        let classes = self.root.class_list();
        if preference.is_dark() {
            classes.add_1(&self.dark_class)
        } else {
            classes.remove_1(&self.dark_class)
        }
    }

    fn persisted(&self) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(&self.storage_key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("failed to read {}: {err:?}", self.storage_key);
                None
            }
        }
    }

    fn persist(&self, preference: Preference) {
        let Some(storage) = self.storage.as_ref() else {
            return;
        };
        if let Err(err) = storage.set_item(&self.storage_key, preference.as_str()) {
            log::warn!("failed to persist {}: {err:?}", self.storage_key);
        }
    }
}

/// Whether the OS reports a dark color scheme. Unsupported means light.
fn os_prefers_dark(window: &Window) -> bool {
    window
        .match_media(DARK_SCHEME_QUERY)
        .ok()
        .flatten()
        .is_some_and(|mq| mq.matches())
}
