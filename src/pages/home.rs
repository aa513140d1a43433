//! Landing page with category and region overviews.

use leptos::prelude::*;

use crate::components::site_header::SiteHeader;

/// Landing page. Static bilingual content; every label carries its language
/// variants for the in-place switcher.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <SiteHeader/>
            <main class="home-page__main">
                <h1 data-ka="აღმოაჩინე საქართველო" data-en="Discover Georgia">
                    "აღმოაჩინე საქართველო"
                </h1>
                <p
                    class="home-page__lead"
                    data-ka="მარშრუტები, ადგილები და რჩევები მოგზაურებისთვის"
                    data-en="Routes, places and tips for travelers"
                >
                    "მარშრუტები, ადგილები და რჩევები მოგზაურებისთვის"
                </p>

                <section class="home-page__section">
                    <h2 data-ka="კატეგორიები" data-en="Categories">"კატეგორიები"</h2>
                    <ul class="home-page__categories">
                        <li data-ka="მთები" data-en="Mountains">"მთები"</li>
                        <li data-ka="ჩანჩქერები" data-en="Waterfalls">"ჩანჩქერები"</li>
                        <li data-ka="ისტორიული" data-en="Historical">"ისტორიული"</li>
                        <li data-ka="ტყეები" data-en="Forests">"ტყეები"</li>
                        <li data-ka="ხედები" data-en="Viewpoints">"ხედები"</li>
                        <li data-ka="ლაშქრობა" data-en="Hiking">"ლაშქრობა"</li>
                        <li data-ka="ტბები" data-en="Lakes">"ტბები"</li>
                        <li data-ka="მზის ამოსვლა" data-en="Sunrise">"მზის ამოსვლა"</li>
                    </ul>
                </section>

                <section class="home-page__section">
                    <h2 data-ka="პოპულარული რეგიონები" data-en="Popular regions">
                        "პოპულარული რეგიონები"
                    </h2>
                    <ul class="home-page__regions">
                        <li data-ka="სვანეთი" data-en="Svaneti">"სვანეთი"</li>
                        <li data-ka="კახეთი" data-en="Kakheti">"კახეთი"</li>
                        <li data-ka="აჭარა" data-en="Adjara">"აჭარა"</li>
                    </ul>
                </section>
            </main>
        </div>
    }
}
