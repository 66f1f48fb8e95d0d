//! Drives the `#typed` element from a [`PhraseCycle`] on a timeout chain.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::Element;

use crate::config::SiteConfig;
use crate::state::typing::PhraseCycle;
use crate::util::dom::{self, MountError};

/// Start the typing loop on `#typed`.
///
/// # Errors
///
/// Returns [`MountError`] when there is no document or `#typed` is missing.
pub fn mount(config: &SiteConfig) -> Result<(), MountError> {
    let document = dom::document()?;
    let target = dom::by_id::<Element>(&document, "typed")?;
    let cycle = Rc::new(RefCell::new(PhraseCycle::new(config.phrases.clone(), config.typing)));
    step(cycle, target);
    Ok(())
}

fn step(cycle: Rc<RefCell<PhraseCycle>>, target: Element) {
    let frame = cycle.borrow_mut().tick();
    target.set_text_content(Some(&frame.text));
    let millis = u32::try_from(frame.delay.as_millis()).unwrap_or(u32::MAX);
    Timeout::new(millis, move || step(cycle, target)).forget();
}
