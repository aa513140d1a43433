//! # mogzauri
//!
//! Leptos + WASM frontend for the Mogzauri travel guide.
//!
//! This crate carries the site's client-side preference layer: a light/dark
//! theme toggle and a Georgian/English label switcher, both persisted in
//! localStorage and reapplied on load. The controller core (`prefs`) is
//! browser-free and natively testable; `util` binds it to the document, and
//! `components`/`pages` are the page chrome that mounts it.

pub mod app;
pub mod components;
pub mod pages;
pub mod prefs;
pub mod state;
pub mod util;

/// WASM entry point: install logging hooks, then hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
