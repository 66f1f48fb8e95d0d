//! Project detail overlay: `.open-project` buttons, close control, backdrop
//! and Escape key.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent};

use crate::config::SiteConfig;
use crate::projects::ProjectCatalog;
use crate::state::modal::ProjectModal;
use crate::util::dom::{self, MountError};

#[derive(Clone)]
struct ModalView {
    state: Rc<RefCell<ProjectModal>>,
    container: Element,
    content: Element,
}

impl ModalView {
    fn sync(&self) {
        let state = self.state.borrow();
        if let Some(html) = state.content() {
            self.content.set_inner_html(html);
        }
        let _ = self.container.set_attribute("aria-hidden", state.aria_hidden());
    }

    fn open(&self, id: &str) {
        if self.state.borrow_mut().open(id) {
            self.sync();
        }
    }

    fn close(&self) {
        self.state.borrow_mut().close();
        self.sync();
    }
}

/// Bind project buttons, the close control, the backdrop and Escape.
///
/// # Errors
///
/// Returns [`MountError`] when the modal container, content region or close
/// control is missing, or a listener cannot be registered.
pub fn mount(config: &SiteConfig) -> Result<(), MountError> {
    let document = dom::document()?;
    let container = dom::by_id::<Element>(&document, "project-modal")?;
    let content = dom::by_id::<Element>(&document, "modal-content")?;
    let close_button = dom::by_id::<Element>(&document, "modal-close")?;

    let state = ProjectModal::new(ProjectCatalog::builtin(), config.repository_url.clone());
    let view = ModalView { state: Rc::new(RefCell::new(state)), container: container.clone(), content };

    for button in dom::query_all(&document, ".open-project")? {
        let view = view.clone();
        let trigger = button.clone();
        dom::listen(&button, "click", move |_| {
            let id = trigger.get_attribute("data-project").unwrap_or_default();
            view.open(&id);
        })?;
    }

    let on_close = view.clone();
    dom::listen(&close_button, "click", move |_| on_close.close())?;

    let on_backdrop = view.clone();
    let backdrop = container.clone();
    dom::listen(&container, "click", move |ev| {
        let on_self = ev
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .is_some_and(|t| t == backdrop);
        let closed = on_backdrop.state.borrow_mut().click(on_self);
        if closed {
            on_backdrop.sync();
        }
    })?;

    dom::listen(&document, "keydown", move |ev| {
        let is_escape = ev.dyn_ref::<KeyboardEvent>().is_some_and(|k| k.key() == "Escape");
        if is_escape && view.state.borrow().is_visible() {
            view.close();
        }
    })
}
