//! # console-client
//!
//! Leptos + WASM frontend for the YouNeed admin console.
//!
//! This crate contains the login page, the dashboard shell state machine, its
//! navigation and logout components, and the two dashboard view panels. The
//! `youneed-console` server renders it with SSR and serves the hydrate bundle.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: wire logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
