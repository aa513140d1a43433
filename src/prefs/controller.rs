//! Preference controller: theme toggle, language switching, hydration.
//!
//! DESIGN
//! ======
//! Operations mutate an injected store and surface instead of globals so the
//! same logic runs against the live document and against in-memory fakes.
//! The surface, not the store, is the source of truth for the current theme:
//! toggling flips whatever the document shows, then writes through.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::prefs::model::{Language, Theme};
use crate::prefs::store::PreferenceStore;
use crate::prefs::surface::{Surface, TextSlot};

/// Flip the theme shown by the surface and write it through.
///
/// An absent or unreadable root indicator counts as not-dark, so the first
/// toggle on a fresh document deterministically lands on dark.
pub fn toggle_theme(store: &dyn PreferenceStore, surface: &dyn Surface) -> Theme {
    let next = surface.theme().map_or(Theme::Dark, Theme::flip);
    surface.set_theme(next);
    store.set_theme(next);
    update_theme_glyph(surface, next);
    next
}

/// Point the toggle glyph at the other mode: sun while dark, moon-and-stars
/// while light.
pub fn update_theme_glyph(surface: &dyn Surface, theme: Theme) {
    surface.set_theme_glyph(theme.glyph());
}

/// Persist `lang`, then apply it to the surface.
pub fn set_language(store: &dyn PreferenceStore, surface: &dyn Surface, lang: Language) {
    store.set_language(lang);
    apply_language(surface, lang);
}

/// Relabel every text slot for `lang` and move the active-language marker.
///
/// A slot without the requested variant falls back to the default-language
/// variant; a slot without either is left untouched.
pub fn apply_language(surface: &dyn Surface, lang: Language) {
    surface.for_each_text_slot(&mut |slot| {
        if let Some(text) = resolve_label(slot, lang) {
            slot.set_text(&text);
        }
    });
    surface.set_active_language(lang);
}

fn resolve_label(slot: &dyn TextSlot, lang: Language) -> Option<String> {
    slot.variant(lang).or_else(|| slot.variant(Language::default()))
}

/// Hydrate both preferences from the store and reflect them into the
/// surface. Absent or unreadable entries fall back to the defaults (light,
/// Georgian). Applies only; never writes back to the store.
pub fn init(store: &dyn PreferenceStore, surface: &dyn Surface) -> (Theme, Language) {
    let theme = store.theme().unwrap_or_default();
    surface.set_theme(theme);
    update_theme_glyph(surface, theme);

    let lang = store.language().unwrap_or_default();
    apply_language(surface, lang);

    (theme, lang)
}
