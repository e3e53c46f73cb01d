//! Thin helpers over web-sys shared by every behavior.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement};

/// First element matching `selector`, if it is an HTML element.
pub fn query(document: &Document, selector: &str) -> Result<Option<HtmlElement>, JsValue> {
    Ok(document
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok()))
}

/// All HTML elements matching `selector`, in document order. Non-HTML
/// matches (SVG and friends) are skipped.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) -> Result<(), JsValue> {
    el.style().set_property(property, value)
}

/// Class names of `el` in DOM order.
pub fn class_names(el: &Element) -> Vec<String> {
    let list = el.class_list();
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}

/// Attaches `handler` to `target` for the rest of the page's life.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    // Listeners are never removed, so the closure has to outlive this frame.
    callback.forget();
    Ok(())
}
