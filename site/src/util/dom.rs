//! Element lookup, error values, and listener registration.

use search::DocumentSet;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, EventTarget, HtmlElement, Window};

/// A JS `Error` carrying `message`, so failures surface with a stack trace.
pub fn js_error(message: &str) -> JsValue {
    js_sys::Error::new(message).into()
}

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| js_error("no global window"))
}

pub fn document(window: &Window) -> Result<Document, JsValue> {
    window.document().ok_or_else(|| js_error("window has no document"))
}

/// Look up `#id` and cast it to `T`.
pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| js_error(&format!("missing element #{id}")))?
        .dyn_into::<T>()
        .map_err(|_| js_error(&format!("element #{id} has an unexpected type")))
}

/// Every link under `container`, in document order.
pub fn links(container: &HtmlElement) -> Vec<HtmlElement> {
    let Ok(nodes) = container.query_selector_all("a") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Read and validate the document payload embedded at `#id`.
pub fn read_payload(document: &Document, id: &str) -> Result<DocumentSet, JsValue> {
    let script: web_sys::Element = element_by_id(document, id)?;
    let raw = script.text_content().unwrap_or_default();
    DocumentSet::from_json(&raw).map_err(|err| js_error(&format!("#{id}: {err}")))
}

/// Subscribe `handler` to `event` on `target` for the rest of the page's life.
pub fn listen(
    target: &EventTarget,
    event: &str,
    capture: bool,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback_and_bool(event, closure.as_ref().unchecked_ref(), capture)?;
    // Listeners are never removed; the closure lives as long as the page.
    closure.forget();
    Ok(())
}
