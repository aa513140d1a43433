//! Language selector buttons (Georgian / English).

use leptos::prelude::*;

use crate::prefs::model::Language;
use crate::state::prefs::PrefsState;

/// Paired selector buttons for the display language.
///
/// The `active` class on `#btn-ka`/`#btn-en` is owned by the preference
/// controller; markup ships the Georgian default. The signal mirror only
/// feeds `aria-pressed`.
#[component]
pub fn LanguageSwitcher() -> impl IntoView {
    let prefs = expect_context::<RwSignal<PrefsState>>();

    let select = move |lang: Language| {
        crate::util::browser::set_language(lang);
        prefs.update(|p| p.language = lang);
    };

    let pressed = move |lang: Language| (prefs.get().language == lang).to_string();

    view! {
        <div class="header__languages">
            <button
                id="btn-ka"
                class="btn header__language active"
                aria-pressed=move || pressed(Language::Georgian)
                on:click=move |_| select(Language::Georgian)
            >
                "ქარ"
            </button>
            <button
                id="btn-en"
                class="btn header__language"
                aria-pressed=move || pressed(Language::English)
                on:click=move |_| select(Language::English)
            >
                "ENG"
            </button>
        </div>
    }
}
