//! Top navigation bar with title, app link, and session controls.

#[cfg(test)]
#[path = "app_bar_test.rs"]
mod app_bar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::state::session::{SessionEvent, SessionState, SignInAction};
use crate::util::guard;

/// Label for the trailing session button. While the status lookup is in
/// flight the button reads "Sign In"; clicking it is a no-op until the
/// mode resolves as well.
fn session_button_label(authenticated: Option<bool>) -> &'static str {
    if authenticated == Some(true) { "Sign Out" } else { "Sign In" }
}

/// App bar shown on every route.
///
/// The title navigates to the landing page, the App button to the protected
/// charts view, and the trailing button signs the session in or out.
#[component]
pub fn AppBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let navigate_home = navigate.clone();
    let on_title = move |_| navigate_home(guard::LANDING.path, NavigateOptions::default());

    let navigate_app = navigate.clone();
    let on_app = move |_| navigate_app(guard::APP.path, NavigateOptions::default());

    let on_session = move |_| {
        if session.get_untracked().authenticated == Some(true) {
            #[cfg(feature = "csr")]
            {
                leptos::task::spawn_local(async move {
                    match api::sign_out().await {
                        Some(()) => session.update(|s| s.apply(SessionEvent::SignedOut)),
                        None => log::warn!("sign-out request failed; session left untouched"),
                    }
                });
            }
            return;
        }
        match session.get_untracked().sign_in_action() {
            SignInAction::OpenPrompt => session.update(|s| s.apply(SessionEvent::PromptOpened)),
            SignInAction::RedirectToProvider => api::redirect_to_provider_login(),
            SignInAction::Ignore => {}
        }
    };

    view! {
        <header class="app-bar">
            <div class="app-bar__title pointer" on:click=on_title>
                "Assisted Prescription"
                <span class="app-bar__subtitle">" / Analytics"</span>
            </div>
            <div class="app-bar__actions">
                <button class="btn app-bar__btn" on:click=on_app>
                    "App"
                </button>
                <button class="btn app-bar__btn" on:click=on_session>
                    {move || session_button_label(session.get().authenticated)}
                </button>
            </div>
        </header>
    }
}
