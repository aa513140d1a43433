//! Theme toggle button hosting the glyph element.

use leptos::prelude::*;

use crate::prefs::model::{Language, Theme};
use crate::state::prefs::PrefsState;

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

/// Toggle between the light and dark theme.
///
/// The button hosts the `#theme-icon` glyph element the preference
/// controller drives. Markup ships the light-mode glyph; the controller
/// owns the icon class and the root `data-theme` attribute from hydration
/// onward, so the view layer only feeds the tooltip. The tooltip follows
/// the display language along with the rest of the chrome.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let prefs = expect_context::<RwSignal<PrefsState>>();

    let title = move || {
        let state = prefs.get();
        toggle_title(state.theme, state.language)
    };

    let on_toggle = move |_| {
        let next = crate::util::browser::toggle_theme();
        prefs.update(|p| p.theme = next);
    };

    view! {
        <button class="btn header__theme-toggle" title=title on:click=on_toggle>
            <span id="theme-icon">
                <i class="bi bi-moon-stars"></i>
            </span>
        </button>
    }
}

fn toggle_title(theme: Theme, lang: Language) -> &'static str {
    match (lang, theme) {
        (Language::Georgian, Theme::Light) => "მუქ თემაზე გადართვა",
        (Language::Georgian, Theme::Dark) => "ნათელ თემაზე გადართვა",
        (Language::English, Theme::Light) => "Switch to dark theme",
        (Language::English, Theme::Dark) => "Switch to light theme",
    }
}
