use leptos::prelude::*;
use leptos_meta::{Body, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};

use crate::components::login::LoginPage;
use crate::components::ui::*;

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/portico.css" />

        <Title text="Portico" />

        <Router>
            <main>
                <Routes fallback=move || "Not found.">
                    <Route path=StaticSegment("") view=HomePage />
                    <Route path=StaticSegment("login") view=LoginPage />
                    <Route path=WildcardSegment("any") view=NotFound />
                </Routes>
                <Body {..} class="bg-slate-950 text-slate-100" />
            </main>
        </Router>
    }
}

/// Landing page for visitors that were not sent to the login page yet.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <div class="p-4 mx-auto max-w-7xl">
            <h1 class="text-xl font-bold">"Portico"</h1>
            <p>
                "Continue to the " <ANorm href="/login">"login page"</ANorm> "."
            </p>
        </div>
    }
}

/// 404 - Not Found
#[component]
fn NotFound() -> impl IntoView {
    // The status can only be set during the initial server-side render.
    #[cfg(feature = "ssr")]
    {
        let resp = expect_context::<leptos_actix::ResponseOptions>();
        resp.set_status(actix_web::http::StatusCode::NOT_FOUND);
    }

    view! { <h1>"Not Found"</h1> }
}
