use super::*;
use std::cell::RefCell;

struct FakePage {
    ids: Vec<&'static str>,
    scrolled: RefCell<Vec<String>>,
}

impl FakePage {
    fn with(ids: &[&'static str]) -> Self {
        Self { ids: ids.to_vec(), scrolled: RefCell::new(Vec::new()) }
    }
}

impl ScrollHost for FakePage {
    fn scroll_to_id(&self, id: &str) -> bool {
        if self.ids.contains(&id) {
            self.scrolled.borrow_mut().push(id.to_owned());
            true
        } else {
            false
        }
    }
}

#[test]
fn fragment_target_strips_hash_and_decodes() {
    assert_eq!(fragment_target("#about").as_deref(), Some("about"));
    assert_eq!(fragment_target("#caf%C3%A9").as_deref(), Some("café"));
    assert_eq!(fragment_target("#"), None);
    assert_eq!(fragment_target("/about#x"), None);
}

#[test]
fn known_target_scrolls_and_suppresses() {
    let page = FakePage::with(&["projects"]);
    let outcome = handle_anchor_click(&page, "#projects");
    assert_eq!(outcome, ClickOutcome::Suppressed { scrolled: true });
    assert!(outcome.prevents_default());
    assert_eq!(*page.scrolled.borrow(), ["projects"]);
}

#[test]
fn missing_target_is_suppressed_noop() {
    let page = FakePage::with(&["projects"]);
    assert_eq!(handle_anchor_click(&page, "#nowhere"), ClickOutcome::Suppressed { scrolled: false });
    assert_eq!(handle_anchor_click(&page, "#"), ClickOutcome::Suppressed { scrolled: false });
    assert!(page.scrolled.borrow().is_empty());
}

#[test]
fn repeated_clicks_retrigger_scroll() {
    let page = FakePage::with(&["contact"]);
    for _ in 0..3 {
        handle_anchor_click(&page, "#contact");
    }
    assert_eq!(page.scrolled.borrow().len(), 3);
}

#[test]
fn external_links_pass_through() {
    let page = FakePage::with(&["x"]);
    let outcome = handle_anchor_click(&page, "https://example.com/#x");
    assert_eq!(outcome, ClickOutcome::PassThrough);
    assert!(!outcome.prevents_default());
}
