//! # docgrade
//!
//! Leptos + WASM frontend for the document compliance-grading dashboard.
//!
//! This crate contains the route page, the three dashboard widgets
//! (submission tracker, student progress, score override), application
//! state, configuration, and the HTTP client. Widget state machines and
//! derived values live in the framework-agnostic `grading` crate.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let config = config::ClientConfig::from_build_env();
    if let Err(e) = console_log::init_with_level(config.log_level) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
