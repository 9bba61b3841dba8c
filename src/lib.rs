//! # sahayak-landing
//!
//! Leptos + WASM front end for the Swasthya Sahayak landing page: theme
//! toggle, mobile navigation, scroll progress, fade-ins, animated stats and
//! call-to-action loading states.
//!
//! The `state` modules are plain data and compile on any target. Browser
//! wiring is gated behind the `csr` feature so `cargo test` runs natively.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and logger, then mount `App`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
    log::info!("Swasthya Sahayak platform initialized");
}
