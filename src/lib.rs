//! # analytics-ui
//!
//! Leptos + WASM front-end for the Assisted Prescription analytics
//! dashboard: authentication gating (GitHub OAuth or local
//! username/password), cookie-consent banner, top navigation, and the
//! protected charts view. All backend behavior lives behind the gateway's
//! identity endpoints; this crate is the client-side access gate plus view
//! composition.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
