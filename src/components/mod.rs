//! Browser bindings attaching each behavior to the page markup.
//!
//! SYSTEM CONTEXT
//! ==============
//! Markup is owned by the static page; every component looks up its mount
//! points by id/class at start and is skipped (with a warning) if they are
//! missing. Components never share state.

pub mod contact_form;
pub mod footer_year;
pub mod progress_bars;
pub mod project_modal;
pub mod smooth_scroll;
pub mod theme_toggle;
pub mod typed_banner;

use crate::config::SiteConfig;
use crate::util::dom::MountError;

fn report(component: &str, result: Result<(), MountError>) {
    match result {
        Ok(()) => log::debug!("{component} mounted"),
        Err(e) => log::warn!("{component} skipped: {e}"),
    }
}

/// Mount every component independently.
pub fn mount_all(config: &SiteConfig) {
    report("theme toggle", theme_toggle::mount(config));
    report("typed banner", typed_banner::mount(config));
    report(
        "smooth scroll",
        smooth_scroll::mount().map(|count| log::debug!("smooth scroll bound to {count} links")),
    );
    report("project modal", project_modal::mount(config));
    report("progress bars", progress_bars::mount(config));
    report("contact form", contact_form::mount(config));
    report("footer year", footer_year::mount());
}
