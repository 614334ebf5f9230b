//! # site
//!
//! WebAssembly behavior for the static documentation site: the dark/light
//! theme toggle and the search-as-you-type suggestion panel.
//!
//! The page markup is rendered ahead of time; this crate only attaches to it.
//! Decision logic lives in [`state`] and compiles and tests on any target.
//! The `hydrate` feature adds the web-sys bindings in `controllers` and
//! `util` plus the exported entry points:
//!
//! ```js
//! import init, { mount } from "/js/site.js";
//! await init();
//! mount(); // or mount('{"panel_id":"results"}')
//! ```

pub mod config;
pub mod state;

#[cfg(feature = "hydrate")]
pub mod controllers;
#[cfg(feature = "hydrate")]
pub mod util;

#[cfg(feature = "hydrate")]
mod entry {
    use wasm_bindgen::prelude::*;

    use crate::config::SiteConfig;
    use crate::controllers::{search_box::SearchBox, theme_toggle::ThemeToggle};
    use crate::util::dom;

    /// Route panics and `log` output to the browser console.
    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"logger already installed".into());
        }
    }

    fn config(raw: Option<String>) -> Result<SiteConfig, JsValue> {
        SiteConfig::from_json(raw.as_deref()).map_err(|err| dom::js_error(&format!("invalid site config: {err}")))
    }

    /// Apply the stored theme and wire the toggle control.
    #[wasm_bindgen]
    pub fn mount_theme(config_json: Option<String>) -> Result<(), JsValue> {
        let config = config(config_json)?;
        ThemeToggle::mount(&dom::window()?, &config)
    }

    /// Index the embedded documents and wire the search box.
    #[wasm_bindgen]
    pub fn mount_search(config_json: Option<String>) -> Result<(), JsValue> {
        let config = config(config_json)?;
        SearchBox::mount(&dom::window()?, &config)
    }

    /// Mount both controllers.
    #[wasm_bindgen]
    pub fn mount(config_json: Option<String>) -> Result<(), JsValue> {
        let config = config(config_json)?;
        let window = dom::window()?;
        ThemeToggle::mount(&window, &config)?;
        SearchBox::mount(&window, &config)
    }
}
