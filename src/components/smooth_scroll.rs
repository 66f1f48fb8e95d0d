//! Smooth scrolling for `a[href^="#"]` links.

use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::state::scroll::{ScrollHost, handle_anchor_click};
use crate::util::dom::{self, MountError};

struct DocumentScroller {
    document: Document,
}

impl ScrollHost for DocumentScroller {
    fn scroll_to_id(&self, id: &str) -> bool {
        let Some(target) = self.document.get_element_by_id(id) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

/// Attach to every in-page link present at mount time; returns the count.
///
/// # Errors
///
/// Returns [`MountError`] when there is no document or a listener cannot be
/// registered.
pub fn mount() -> Result<usize, MountError> {
    let document = dom::document()?;
    let links = dom::query_all(&document, "a[href^=\"#\"]")?;
    let count = links.len();
    for link in links {
        let scroller = DocumentScroller { document: document.clone() };
        let anchor = link.clone();
        dom::listen(&link, "click", move |ev| {
            let href = anchor.get_attribute("href").unwrap_or_default();
            if handle_anchor_click(&scroller, &href).prevents_default() {
                ev.prevent_default();
            }
        })?;
    }
    Ok(count)
}
