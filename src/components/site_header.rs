//! Site header with brand, bilingual navigation, and preference controls.

use leptos::prelude::*;

use crate::components::language_switcher::LanguageSwitcher;
use crate::components::theme_toggle::ThemeToggle;

/// Fixed page header hosting navigation and the two preference controls.
///
/// Navigation labels carry the `data-ka`/`data-en` variant attributes the
/// language controller rewrites in place; markup ships the Georgian text.
#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="header">
            <a href="/" class="header__brand">"მოგზაური"</a>
            <nav class="header__nav">
                <a href="/" class="header__link" data-ka="მთავარი" data-en="Home">
                    "მთავარი"
                </a>
                <a href="/about" class="header__link" data-ka="შესახებ" data-en="About">
                    "შესახებ"
                </a>
            </nav>
            <span class="header__spacer"></span>
            <LanguageSwitcher/>
            <ThemeToggle/>
        </header>
    }
}
