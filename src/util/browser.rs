//! Browser entry points for the preference controller.
//!
//! Binds the localStorage store and the DOM surface to the controller
//! operations. These are the functions page chrome wires to user actions;
//! on the server path both adapters are inert, so every call degrades to
//! the controller's documented defaults.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use crate::prefs::controller;
use crate::prefs::model::{Language, Theme};
use crate::util::document::DomSurface;
use crate::util::storage::BrowserStore;

/// Hydrate persisted preferences into the document.
///
/// Runs once from the root component after the document is interactive.
/// Returns the applied pair for mirroring into reactive state.
pub fn init() -> (Theme, Language) {
    controller::init(&BrowserStore, &DomSurface)
}

/// Flip the visual theme, persist it, and return the new value.
pub fn toggle_theme() -> Theme {
    controller::toggle_theme(&BrowserStore, &DomSurface)
}

/// Persist and apply the display language.
pub fn set_language(lang: Language) {
    controller::set_language(&BrowserStore, &DomSurface, lang);
}
