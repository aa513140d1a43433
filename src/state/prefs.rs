#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

use crate::prefs::model::{Language, Theme};

/// Reactive mirror of the persisted preferences.
///
/// The document-level attributes stay owned by the preference controller;
/// this state only feeds chrome that renders through the view layer
/// (control titles, pressed markers).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PrefsState {
    pub theme: Theme,
    pub language: Language,
}
