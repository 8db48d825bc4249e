//! Public landing page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::util::guard;

/// Landing page — public, renders regardless of authentication state.
#[component]
pub fn LandingPage() -> impl IntoView {
    let navigate = use_navigate();
    let on_open = move |_| navigate(guard::APP.path, NavigateOptions::default());

    view! {
        <div class="landing-page">
            <h1>"Assisted Prescription"</h1>
            <p class="landing-page__lead">
                "Explore adverse reactions, therapy outcomes, and risk "
                "assessments across patient demographics."
            </p>
            <button class="btn btn--primary landing-page__cta" on:click=on_open>
                "Open the app"
            </button>
        </div>
    }
}
