//! In-page anchor navigation.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use percent_encoding::percent_decode_str;

/// Something that can bring an element into view by id.
pub trait ScrollHost {
    /// Scroll so the element's top meets the viewport top. Returns `false`
    /// when no element has that id.
    fn scroll_to_id(&self, id: &str) -> bool;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Not an in-page link; the browser handles it.
    PassThrough,
    /// Default navigation suppressed; `scrolled` reports whether a target
    /// element was found.
    Suppressed { scrolled: bool },
}

impl ClickOutcome {
    #[must_use]
    pub fn prevents_default(&self) -> bool {
        matches!(self, Self::Suppressed { .. })
    }
}

/// Element id named by an in-page `href`, percent-decoded.
///
/// Returns `None` for bare `#` and for hrefs that are not fragments.
#[must_use]
pub fn fragment_target(href: &str) -> Option<String> {
    let fragment = href.strip_prefix('#')?;
    if fragment.is_empty() {
        return None;
    }
    let id = percent_decode_str(fragment).decode_utf8_lossy().into_owned();
    Some(id)
}

/// React to a click on a link with `href`.
pub fn handle_anchor_click<H: ScrollHost>(host: &H, href: &str) -> ClickOutcome {
    if !href.starts_with('#') {
        return ClickOutcome::PassThrough;
    }
    let scrolled = fragment_target(href).is_some_and(|id| host.scroll_to_id(&id));
    ClickOutcome::Suppressed { scrolled }
}
