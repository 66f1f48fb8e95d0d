//! Contact form submit handling.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, Window};

use crate::config::SiteConfig;
use crate::state::contact::{ContactHost, ContactSubmission, SubmitOutcome, submit_once};
use crate::util::dom::{self, MountError};

const FORM_ID: &str = "contact-form";
const GLOBAL_HANDLER: &str = "handleContact";

struct BrowserContact {
    window: Window,
}

impl ContactHost for BrowserContact {
    fn alert(&self, message: &str) {
        let _ = self.window.alert_with_message(message);
    }

    fn navigate(&self, uri: &str) {
        if let Err(e) = self.window.location().set_href(uri) {
            log::warn!("mailto navigation failed: {e:?}");
        }
    }
}

fn field_value(form: &HtmlFormElement, name: &str) -> String {
    let Ok(Some(el)) = form.query_selector(&format!("[name=\"{name}\"]")) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    el.dyn_ref::<HtmlTextAreaElement>().map(HtmlTextAreaElement::value).unwrap_or_default()
}

fn submit(ev: &Event, recipient: &str) {
    let already_handled = ev.default_prevented();
    ev.prevent_default();
    let Some(form) = ev.target().and_then(|t| t.dyn_into::<HtmlFormElement>().ok()) else {
        return;
    };
    let Some(window) = web_sys::window() else {
        return;
    };
    let submission =
        ContactSubmission::new(&field_value(&form, "name"), &field_value(&form, "email"), &field_value(&form, "message"));
    match submit_once(&BrowserContact { window }, recipient, already_handled, &submission) {
        SubmitOutcome::Rejected(e) => log::debug!("contact submission rejected: {e}"),
        SubmitOutcome::AlreadyHandled => log::debug!("contact submission already handled"),
        SubmitOutcome::Sent => {}
    }
}

/// Install `window.handleContact` for markup wired with
/// `onsubmit="handleContact(event)"`, and listen on `#contact-form` if present.
///
/// # Errors
///
/// Returns [`MountError`] when there is no window or document, or when the
/// global handler or the form listener cannot be registered.
pub fn mount(config: &SiteConfig) -> Result<(), MountError> {
    let window = dom::window()?;
    let recipient = config.contact_recipient.clone();
    let global = Closure::wrap(Box::new(move |ev: Event| submit(&ev, &recipient)) as Box<dyn FnMut(Event)>);
    js_sys::Reflect::set(&window, &JsValue::from_str(GLOBAL_HANDLER), global.as_ref())?;
    global.forget();

    let document = dom::document()?;
    let Some(form) = document.get_element_by_id(FORM_ID) else {
        log::debug!("no #{FORM_ID}; relying on {GLOBAL_HANDLER}");
        return Ok(());
    };
    let form = form.dyn_into::<HtmlFormElement>().map_err(|_| MountError::WrongElementType(FORM_ID))?;
    let recipient = config.contact_recipient.clone();
    dom::listen(&form, "submit", move |ev| submit(&ev, &recipient))
}
