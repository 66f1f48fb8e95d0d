//! Thin `web-sys` helpers for lookup and listener registration.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, Window};

#[derive(Debug, thiserror::Error)]
pub enum MountError {
    #[error("no browser window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("missing element: {0}")]
    MissingElement(&'static str),
    #[error("element {0} has unexpected type")]
    WrongElementType(&'static str),
    #[error("dom call failed: {0}")]
    Js(String),
}

impl From<wasm_bindgen::JsValue> for MountError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}

/// # Errors
///
/// Returns [`MountError::NoWindow`] outside a browser window context.
pub fn window() -> Result<Window, MountError> {
    web_sys::window().ok_or(MountError::NoWindow)
}

/// # Errors
///
/// Returns [`MountError::NoWindow`] or [`MountError::NoDocument`] when either
/// is absent.
pub fn document() -> Result<Document, MountError> {
    window()?.document().ok_or(MountError::NoDocument)
}

/// Element by id, cast to `T`.
///
/// # Errors
///
/// Returns [`MountError::MissingElement`] when no element has `id`, or
/// [`MountError::WrongElementType`] when it is not a `T`.
pub fn by_id<T: JsCast>(document: &Document, id: &'static str) -> Result<T, MountError> {
    document
        .get_element_by_id(id)
        .ok_or(MountError::MissingElement(id))?
        .dyn_into::<T>()
        .map_err(|_| MountError::WrongElementType(id))
}

/// All elements matching `selector`, in document order.
///
/// # Errors
///
/// Returns [`MountError::Js`] when `selector` is invalid.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, MountError> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Register `handler` for `event` on `target` for the page lifetime.
///
/// # Errors
///
/// Returns [`MountError::Js`] when the browser rejects the listener.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), MountError>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}
