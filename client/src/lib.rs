//! # client
//!
//! Leptos + WASM editor shell centered on the explorer sidebar.
//!
//! This crate contains the editor page, the sidebar and its panel stack,
//! the explorer/onboarding state models, and the browser utilities the
//! sidebar leans on (horizontal resize, scoped document listeners,
//! performance marks, local storage persistence).

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: wires browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialized");
    }
    leptos::mount::hydrate_body(app::App);
}
