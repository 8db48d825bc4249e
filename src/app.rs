//! Root application component with routing, context, and the access gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session record is constructed here once per page load, seeded from
//! the persisted consent marker, and provided via context. The identity
//! resolver runs as two independent browser tasks; neither has a timeout
//! or retry, so the gate can stay unresolved for as long as the identity
//! service does.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::app_bar::AppBar;
use crate::components::cookie_banner::CookieBanner;
use crate::components::login_dialog::LoginDialog;
use crate::pages::{charts::ChartsPage, landing::LandingPage};
use crate::state::session::SessionState;
use crate::util::consent;

/// Root application component.
///
/// Provides the shared session context, starts identity resolution, and
/// sets up client-side routing for the public and protected views.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::new(consent::read_consent()));
    provide_context(session);

    // Identity resolver: two independent one-shot lookups. Either may land
    // first; each applies its event exactly once, a failure leaves the
    // field unresolved.
    #[cfg(feature = "csr")]
    {
        use crate::net::api;
        use crate::state::session::SessionEvent;

        leptos::task::spawn_local(async move {
            match api::fetch_auth_mode().await {
                Some(mode) => session.update(|s| s.apply(SessionEvent::ModeResolved(mode))),
                None => log::warn!("auth-mode lookup failed; gate stays unresolved"),
            }
        });
        leptos::task::spawn_local(async move {
            match api::fetch_auth_status().await {
                Some(authenticated) => {
                    session.update(|s| s.apply(SessionEvent::StatusResolved(authenticated)));
                }
                None => log::warn!("auth-status lookup failed; gate stays unresolved"),
            }
        });
    }

    view! {
        <Title text="Assisted Prescription"/>

        <Router>
            <AppBar/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=LandingPage/>
                    <Route path=StaticSegment("app") view=ChartsPage/>
                </Routes>
            </main>
            <Show when=move || session.get().login_prompt_open>
                <LoginDialog/>
            </Show>
            <Show when=move || !session.get().cookie_consent_given>
                <CookieBanner/>
            </Show>
        </Router>
    }
}
