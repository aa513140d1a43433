//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{about::AboutPage, home::HomePage};
use crate::state::prefs::PrefsState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ka">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the preference state context, hydrates persisted preferences,
/// and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let prefs = RwSignal::new(PrefsState::default());
    provide_context(prefs);

    // Apply persisted theme and language once the document is interactive,
    // then mirror the applied pair for reactive chrome. Reads nothing
    // reactive, so it runs once per page load.
    Effect::new(move || {
        let (theme, language) = crate::util::browser::init();
        prefs.update(|p| {
            p.theme = theme;
            p.language = language;
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/mogzauri.css"/>
        <Title text="მოგზაური"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("about") view=AboutPage/>
            </Routes>
        </Router>
    }
}
