//! CalcSphere front-end.
//!
//! Progressive enhancement for the server-rendered CalcSphere pages: theme
//! switching, navigation, scroll effects, catalog search and diagnostics.
//! The `state` models are plain Rust and run in host tests; the browser
//! bindings under `controllers` build with the `csr` feature and start from
//! the wasm entry point below.

#[cfg(feature = "csr")]
pub mod app;
pub mod components;
pub mod config;
#[cfg(feature = "csr")]
pub mod controllers;
pub mod error;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Trace) {
        web_sys::console::warn_1(&format!("logger already set: {e}").into());
    }

    let boot = || {
        let config = app::load_config();
        let level = config.log_level.level().unwrap_or_else(|| {
            log::warn!("unknown log level {:?}; using info", config.log_level.0);
            log::Level::Info
        });
        log::set_max_level(level.to_level_filter());
        let site = app::Site::boot(&config);
        // Controllers own the page's listeners for the rest of its life.
        std::mem::forget(site);
        log::info!("{} initialized", config.head.site_name);
    };

    if let Err(e) = util::dom::when_ready(boot) {
        log::error!("boot deferred failed: {e}");
    }
}
