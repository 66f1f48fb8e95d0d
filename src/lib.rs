//! # folio
//!
//! Client-side behavior for a static portfolio page, compiled to WASM:
//! theme switching, a typing banner, smooth in-page scrolling, a project
//! detail modal, scroll-triggered progress bars and a `mailto:` contact form.
//!
//! `state` holds browser-independent state machines behind small host
//! traits and is what the native test suite exercises. With the `hydrate`
//! feature, `components` binds them to the DOM via `web-sys` and `start`
//! runs on module instantiation.

pub mod config;
#[cfg(feature = "hydrate")]
pub mod components;
pub mod projects;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
use std::sync::OnceLock;

#[cfg(feature = "hydrate")]
use config::SiteConfig;

#[cfg(feature = "hydrate")]
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Page config: defaults overridden by the embedded `#site-config` JSON.
#[cfg(feature = "hydrate")]
pub fn site_config() -> &'static SiteConfig {
    SITE_CONFIG.get_or_init(|| {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(config::CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        SiteConfig::from_json_or_default(raw.as_deref())
    })
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);

    components::mount_all(site_config());
}
