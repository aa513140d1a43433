//! Rendering-surface seam the preference controller drives.
//!
//! The distilled capability set of the live document: one root theme
//! indicator, one glyph element, the marked-up text slots, and the pair of
//! language selector buttons. `util::document` implements it over the real
//! DOM; tests substitute recording fakes.

use crate::prefs::model::{Language, Theme, ThemeGlyph};

/// One element carrying per-language text variants.
pub trait TextSlot {
    /// The marked-up variant for `lang`, if the element carries one.
    fn variant(&self, lang: Language) -> Option<String>;

    /// Replace the visible text.
    fn set_text(&self, text: &str);
}

/// Capability interface over the document consumed by the controller.
pub trait Surface {
    /// Current root theme indicator, if present and well-formed.
    fn theme(&self) -> Option<Theme>;

    /// Write the root theme indicator.
    fn set_theme(&self, theme: Theme);

    /// Update the glyph element inside the toggle control.
    fn set_theme_glyph(&self, glyph: ThemeGlyph);

    /// Visit every language-variant text slot in the document.
    fn for_each_text_slot(&self, visit: &mut dyn FnMut(&dyn TextSlot));

    /// Mark `lang`'s selector button active and the other one inactive.
    fn set_active_language(&self, lang: Language);
}
