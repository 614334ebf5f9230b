//! Suggestion panel state machine.
//!
//! `SuggestController` owns the search index and the panel's logical state.
//! Each DOM event is handed in with whatever context the browser knows (the
//! current query, which element has focus, whether a click landed inside the
//! panel) and comes back as an ordered list of [`Effect`]s for the DOM layer
//! to apply. The panel is hidden while `Idle` or `Dismissed` and visible while
//! `Open`.

#[cfg(test)]
#[path = "suggest_test.rs"]
mod suggest_test;

use search::{DocumentIndex, DocumentSet, Suggestion, suggest};

/// Virtual key code for `/`, the focus-search shortcut.
pub const KEY_CODE_SLASH: u32 = 191;
pub const KEY_CODE_ESCAPE: u32 = 27;
pub const KEY_CODE_ARROW_UP: u32 = 38;
pub const KEY_CODE_ARROW_DOWN: u32 = 40;

/// Keys the panel reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Slash,
    Escape,
    ArrowUp,
    ArrowDown,
    Other,
}

impl Key {
    /// Map a `KeyboardEvent.keyCode`.
    #[must_use]
    pub fn from_key_code(code: u32) -> Self {
        match code {
            KEY_CODE_SLASH => Self::Slash,
            KEY_CODE_ESCAPE => Self::Escape,
            KEY_CODE_ARROW_UP => Self::ArrowUp,
            KEY_CODE_ARROW_DOWN => Self::ArrowDown,
            _ => Self::Other,
        }
    }
}

/// Where keyboard focus was when a key was pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    /// The query input field.
    QueryInput,
    /// The suggestion entry at this index.
    Entry(usize),
    /// Anything else on the page.
    Elsewhere,
}

/// Panel visibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    /// Never opened since page load.
    #[default]
    Idle,
    /// Showing the latest results.
    Open,
    /// Hidden by escape or an outside click.
    Dismissed,
}

impl Visibility {
    #[must_use]
    pub fn is_visible(self) -> bool {
        self == Self::Open
    }
}

/// A DOM change requested by the controller, applied in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Remove the hidden class from the panel.
    Show,
    /// Add the hidden class to the panel.
    Hide,
    /// Replace the panel's children with these entries.
    Render(Vec<Suggestion>),
    /// Remove every child of the panel.
    Clear,
    FocusInput,
    BlurInput,
    /// Focus the link of the entry at this index.
    FocusEntry(usize),
    /// Cancel the browser's default action for the event.
    PreventDefault,
}

/// Search state for one page load.
#[derive(Debug)]
pub struct SuggestController {
    index: DocumentIndex,
    visibility: Visibility,
    entries: Vec<Suggestion>,
}

impl SuggestController {
    #[must_use]
    pub fn new(index: DocumentIndex) -> Self {
        Self { index, visibility: Visibility::Idle, entries: Vec::new() }
    }

    /// Build the index from the page's document payload.
    #[must_use]
    pub fn from_documents(docs: &DocumentSet) -> Self {
        Self::new(DocumentIndex::new(docs))
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Entries currently rendered in the panel.
    #[must_use]
    pub fn entries(&self) -> &[Suggestion] {
        &self.entries
    }

    #[must_use]
    pub fn index(&self) -> &DocumentIndex {
        &self.index
    }

    /// The query text changed. The panel opens even when nothing matches.
    pub fn on_input(&mut self, query: &str) -> Vec<Effect> {
        self.entries = suggest(&self.index, query);
        self.visibility = Visibility::Open;
        vec![Effect::Show, Effect::Render(self.entries.clone())]
    }

    /// A key went down anywhere on the page.
    pub fn on_key_down(&mut self, key: Key, focus: Focus) -> Vec<Effect> {
        match key {
            Key::Slash => vec![Effect::PreventDefault, Effect::FocusInput],
            Key::Escape if focus == Focus::QueryInput => {
                self.visibility = Visibility::Dismissed;
                vec![Effect::BlurInput, Effect::Hide]
            }
            Key::ArrowUp | Key::ArrowDown => self.move_focus(key, focus),
            Key::Escape | Key::Other => Vec::new(),
        }
    }

    /// A click landed on the page; `inside_panel` is whether its target is
    /// still attached under the panel.
    pub fn on_document_click(&mut self, inside_panel: bool) -> Vec<Effect> {
        if inside_panel {
            return Vec::new();
        }
        if self.visibility == Visibility::Open {
            self.visibility = Visibility::Dismissed;
        }
        vec![Effect::Hide]
    }

    /// A click landed inside the panel. The link navigates on its own; the
    /// rendered entries are dropped.
    pub fn on_panel_click(&mut self) -> Vec<Effect> {
        self.entries.clear();
        vec![Effect::Clear]
    }

    fn move_focus(&self, key: Key, focus: Focus) -> Vec<Effect> {
        if !self.visibility.is_visible() || self.entries.is_empty() {
            return Vec::new();
        }
        let last = self.entries.len() - 1;
        let next = match (focus, key) {
            (Focus::Entry(i), Key::ArrowUp) => i.saturating_sub(1).min(last),
            (Focus::Entry(i), _) => (i + 1).min(last),
            // Arrows from the query field enter the list at the top.
            (Focus::QueryInput, _) => 0,
            (Focus::Elsewhere, _) => return Vec::new(),
        };
        vec![Effect::PreventDefault, Effect::FocusEntry(next)]
    }
}
