//! One-shot width animation for `.progress span` indicators.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::SiteConfig;
use crate::state::progress::ProgressRevealer;
use crate::util::dom::{self, MountError};

const INDICATOR_SELECTOR: &str = ".progress span";

fn set_width(el: &Element, width: &str) {
    if let Some(el) = el.dyn_ref::<HtmlElement>() {
        let _ = el.style().set_property("width", width);
    }
}

fn observer_supported() -> bool {
    web_sys::window()
        .is_some_and(|w| js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
}

fn reveal_now(elements: &[Element], revealer: &mut ProgressRevealer) {
    for (index, width) in revealer.reveal_all() {
        set_width(&elements[index], &width);
    }
}

/// Observe every indicator, or reveal them all at once when viewport
/// observation is unavailable or cannot be created.
///
/// # Errors
///
/// Returns [`MountError`] when there is no document or the indicator query
/// fails.
pub fn mount(config: &SiteConfig) -> Result<(), MountError> {
    let document = dom::document()?;
    let indicators = dom::query_all(&document, INDICATOR_SELECTOR)?;
    if indicators.is_empty() {
        return Ok(());
    }
    let attrs = indicators.iter().map(|el| el.get_attribute("data-progress")).collect::<Vec<_>>();
    let mut revealer = ProgressRevealer::new(attrs.iter().map(Option::as_deref), config.progress_default_percent);

    if !observer_supported() {
        log::info!("IntersectionObserver unavailable; revealing {} indicators now", indicators.len());
        reveal_now(&indicators, &mut revealer);
        return Ok(());
    }

    let revealer = Rc::new(RefCell::new(revealer));
    let elements = Rc::new(indicators);
    let tracked = Rc::clone(&elements);
    let observed = Rc::clone(&revealer);
    let cb = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let target = entry.target();
            let Some(index) = tracked.iter().position(|el| *el == target) else {
                continue;
            };
            if let Some(width) = observed.borrow_mut().intersect(index, entry.is_intersecting()) {
                set_width(&target, &width);
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.progress_threshold));
    match IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            cb.forget();
            for el in elements.iter() {
                observer.observe(el);
            }
        }
        Err(e) => {
            log::warn!("IntersectionObserver construction failed ({e:?}); revealing indicators now");
            reveal_now(&elements, &mut revealer.borrow_mut());
        }
    }
    Ok(())
}
