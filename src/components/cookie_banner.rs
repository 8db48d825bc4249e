//! Cookie-consent banner.

use leptos::prelude::*;

use crate::state::session::{SessionEvent, SessionState};
use crate::util::consent;

/// Bottom banner shown until consent is given. Accepting persists the
/// consent marker and hides the banner for all future page loads.
#[component]
pub fn CookieBanner() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let on_accept = move |_| {
        consent::write_consent_marker();
        session.update(|s| s.apply(SessionEvent::ConsentAccepted));
    };

    view! {
        <div class="cookie-banner">
            <span class="cookie-banner__text">
                "By continuing to browse the site, you are agreeing to "
                <a href="/legal/cookie-policy">"our use of cookies"</a>
                "."
            </span>
            <button class="btn cookie-banner__close" on:click=on_accept>
                "Close"
            </button>
        </div>
    }
}
