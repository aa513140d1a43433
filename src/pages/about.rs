//! About page describing the guide.

use leptos::prelude::*;

use crate::components::site_header::SiteHeader;

/// Short bilingual description of the project.
#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <SiteHeader/>
            <main class="about-page__main">
                <h1 data-ka="შესახებ" data-en="About">"შესახებ"</h1>
                <p
                    data-ka="მოგზაური არის გზამკვლევი საქართველოს გარშემო: მარშრუტები, სანახაობები და პრაქტიკული რჩევები."
                    data-en="Mogzauri is a travel guide around Georgia: routes, sights and practical tips."
                >
                    "მოგზაური არის გზამკვლევი საქართველოს გარშემო: მარშრუტები, სანახაობები და პრაქტიკული რჩევები."
                </p>
            </main>
        </div>
    }
}
