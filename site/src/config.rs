//! Host page contract: element ids, class names, and the storage key.
//!
//! The defaults match the documentation theme's markup. A page with different
//! markup passes a JSON object to the wasm entry points; missing keys keep
//! their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

pub const DEFAULT_THEME_TOGGLE_ID: &str = "mode";
pub const DEFAULT_QUERY_INPUT_ID: &str = "userinput";
pub const DEFAULT_PANEL_ID: &str = "suggestions";
pub const DEFAULT_PAYLOAD_ID: &str = "search-docs";
pub const DEFAULT_HIDDEN_CLASS: &str = "d-none";
pub const DEFAULT_DARK_CLASS: &str = "dark";
pub const DEFAULT_STORAGE_KEY: &str = "theme";

/// Element that carries the dark class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeRoot {
    /// `document.documentElement`.
    #[default]
    Html,
    /// `document.body`, for stylesheets written against `body.dark`.
    Body,
}

/// Element ids and class names the controllers bind to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Clickable control that flips the theme.
    pub theme_toggle_id: String,
    /// Text input for search queries.
    pub query_input_id: String,
    /// Container the suggestion entries are rendered into.
    pub panel_id: String,
    /// `<script type="application/json">` holding the document payload.
    pub payload_id: String,
    /// Class that hides the suggestion panel.
    pub hidden_class: String,
    /// Class that enables dark mode.
    pub dark_class: String,
    /// Where `dark_class` is applied.
    pub theme_root: ThemeRoot,
    /// `localStorage` key for the persisted theme.
    pub storage_key: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme_toggle_id: DEFAULT_THEME_TOGGLE_ID.to_owned(),
            query_input_id: DEFAULT_QUERY_INPUT_ID.to_owned(),
            panel_id: DEFAULT_PANEL_ID.to_owned(),
            payload_id: DEFAULT_PAYLOAD_ID.to_owned(),
            hidden_class: DEFAULT_HIDDEN_CLASS.to_owned(),
            dark_class: DEFAULT_DARK_CLASS.to_owned(),
            theme_root: ThemeRoot::default(),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse an optional JSON override. `None` and blank input yield defaults.
    ///
    /// # Errors
    ///
    /// Returns the parse error when `raw` is not a JSON object with the
    /// expected value types for the known keys.
    pub fn from_json(raw: Option<&str>) -> Result<Self, serde_json::Error> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(raw) => serde_json::from_str(raw),
        }
    }
}
