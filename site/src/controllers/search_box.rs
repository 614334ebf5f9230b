//! Search box wiring.
//!
//! Binds the query input, the suggestion panel, and page-wide keyboard and
//! click listeners to a [`SuggestController`]. Handlers translate the DOM
//! event into controller input and apply the returned effects.

use std::cell::RefCell;
use std::rc::Rc;

use search::{DocumentIndex, Suggestion};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, EventTarget, HtmlElement, HtmlInputElement, KeyboardEvent, Node, Window};

use crate::config::SiteConfig;
use crate::state::suggest::{Effect, Focus, Key, SuggestController};
use crate::util::dom;

/// DOM handles plus controller state for one page load.
pub struct SearchBox {
    document: Document,
    input: HtmlInputElement,
    panel: HtmlElement,
    hidden_class: String,
    controller: SuggestController,
}

impl SearchBox {
    /// Build the index from the embedded payload and subscribe all handlers.
    pub fn mount(window: &Window, config: &SiteConfig) -> Result<(), JsValue> {
        let document = dom::document(window)?;
        let input: HtmlInputElement = dom::element_by_id(&document, &config.query_input_id)?;
        let panel: HtmlElement = dom::element_by_id(&document, &config.panel_id)?;
        let docs = dom::read_payload(&document, &config.payload_id)?;

        let index = DocumentIndex::new(&docs);
        log::info!("search index built over {} documents", index.len());

        let this = Rc::new(RefCell::new(Self {
            document: document.clone(),
            input: input.clone(),
            panel: panel.clone(),
            hidden_class: config.hidden_class.clone(),
            controller: SuggestController::new(index),
        }));

        subscribe(&this, &document, "keydown", false, Self::on_key_down)?;
        subscribe(&this, &document, "click", false, Self::on_document_click)?;
        subscribe(&this, &input, "input", true, Self::on_input)?;
        subscribe(&this, &panel, "click", true, Self::on_panel_click)
    }

    fn on_input(&mut self, _event: &Event) {
        let query = self.input.value();
        let effects = self.controller.on_input(&query);
        self.apply(effects, None);
    }

    fn on_key_down(&mut self, event: &Event) {
        let Some(keyboard) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let key = Key::from_key_code(keyboard.key_code());
        if key == Key::Other {
            return;
        }
        let effects = self.controller.on_key_down(key, self.focus());
        self.apply(effects, Some(event));
    }

    fn on_document_click(&mut self, event: &Event) {
        let inside = event
            .target()
            .and_then(|target| target.dyn_into::<Node>().ok())
            .is_some_and(|node| self.panel.contains(Some(&node)));
        let effects = self.controller.on_document_click(inside);
        self.apply(effects, Some(event));
    }

    fn on_panel_click(&mut self, _event: &Event) {
        let effects = self.controller.on_panel_click();
        self.apply(effects, None);
    }

    /// Locate the active element relative to the input and panel entries.
    fn focus(&self) -> Focus {
        let Some(active) = self.document.active_element() else {
            return Focus::Elsewhere;
        };
        let active: &Node = &active;
        if self.input.is_same_node(Some(active)) {
            return Focus::QueryInput;
        }
        dom::links(&self.panel)
            .iter()
            .position(|link| link.is_same_node(Some(active)))
            .map_or(Focus::Elsewhere, Focus::Entry)
    }

    fn apply(&self, effects: Vec<Effect>, event: Option<&Event>) {
        for effect in effects {
            let result = match effect {
                Effect::Show => self.panel.class_list().remove_1(&self.hidden_class),
                Effect::Hide => self.panel.class_list().add_1(&self.hidden_class),
                Effect::Render(entries) => self.render(&entries),
                Effect::Clear => self.clear(),
                Effect::FocusInput => self.input.focus(),
                Effect::BlurInput => self.input.blur(),
                Effect::FocusEntry(i) => match dom::links(&self.panel).get(i) {
                    Some(link) => link.focus(),
                    None => Ok(()),
                },
                Effect::PreventDefault => {
                    if let Some(event) = event {
                        event.prevent_default();
                    }
                    Ok(())
                }
            };
            if let Err(err) = result {
                log::warn!("search panel update failed: {err:?}");
            }
        }
    }

    /// Replace the panel's children with `div > a[href] > span + span` entries.
    fn render(&self, entries: &[Suggestion]) -> Result<(), JsValue> {
        self.clear()?;
        for suggestion in entries {
            let entry = self.document.create_element("div")?;
            let link = self.document.create_element("a")?;
            link.set_attribute("href", &suggestion.href)?;

            let title = self.document.create_element("span")?;
            title.set_text_content(Some(suggestion.title.as_str()));
            let description = self.document.create_element("span")?;
            description.set_text_content(Some(suggestion.description.as_str()));

            link.append_child(&title)?;
            link.append_child(&description)?;
            entry.append_child(&link)?;
            self.panel.append_child(&entry)?;
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), JsValue> {
        while let Some(child) = self.panel.last_child() {
            self.panel.remove_child(&child)?;
        }
        Ok(())
    }
}

/// Route `event` on `target` to `handler` on the shared search box.
fn subscribe(
    this: &Rc<RefCell<SearchBox>>,
    target: &EventTarget,
    event: &str,
    capture: bool,
    handler: fn(&mut SearchBox, &Event),
) -> Result<(), JsValue> {
    let this = Rc::clone(this);
    let name = event.to_owned();
    dom::listen(target, event, capture, move |ev| {
        // Handlers run to completion on the main thread; a failed borrow means
        // an effect re-entered the dispatcher and the nested event is dropped.
        let Ok(mut search_box) = this.try_borrow_mut() else {
            log::debug!("dropped re-entrant {name} event");
            return;
        };
        handler(&mut *search_box, &ev);
    })
}
