//! Theme toggle button wiring.
//!
//! Dark mode is the `data-theme="dark"` attribute on `<html>`; light mode
//! removes it so stylesheet defaults apply.

use web_sys::Element;

use crate::config::SiteConfig;
use crate::state::theme::{ThemeController, ThemePreference, ThemeSurface};
use crate::util::dom::{self, MountError};
use crate::util::storage::{LocalStorage, prefers_dark};

const THEME_ATTR: &str = "data-theme";

struct DocumentSurface {
    root: Element,
    icon: Element,
}

impl ThemeSurface for DocumentSurface {
    fn applied(&self) -> ThemePreference {
        match self.root.get_attribute(THEME_ATTR).as_deref() {
            Some("dark") => ThemePreference::Dark,
            _ => ThemePreference::Light,
        }
    }

    fn render(&self, theme: ThemePreference) {
        let _ = match theme {
            ThemePreference::Dark => self.root.set_attribute(THEME_ATTR, "dark"),
            ThemePreference::Light => self.root.remove_attribute(THEME_ATTR),
        };
        self.icon.set_text_content(Some(theme.icon()));
    }
}

/// Apply the startup theme and bind the toggle button.
///
/// # Errors
///
/// Returns [`MountError`] when `#theme-toggle` or `#theme-icon` is missing,
/// or the click listener cannot be registered.
pub fn mount(config: &SiteConfig) -> Result<(), MountError> {
    let document = dom::document()?;
    let root = document.document_element().ok_or(MountError::MissingElement("html"))?;
    let icon = dom::by_id::<Element>(&document, "theme-icon")?;
    let button = dom::by_id::<Element>(&document, "theme-toggle")?;

    let controller = ThemeController::new(LocalStorage, DocumentSurface { root, icon }, config.theme_key.clone());
    let initial = controller.init(prefers_dark());
    log::debug!("theme initialized: {initial}");

    dom::listen(&button, "click", move |_| {
        let next = controller.toggle();
        log::debug!("theme toggled: {next}");
    })
}
