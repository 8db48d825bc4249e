//! Route guard for authenticated views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical access decisions: the guard is a pure
//! function of (session state, requested route) re-evaluated on every state
//! mutation and navigation, never an owned persistent machine. Denial
//! side effects (login prompt vs. blocking alert) are installed as a
//! reactive effect by the protected page.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;

use crate::state::session::{DenialAction, SessionEvent, SessionState};

/// A navigable route and whether it is gated on authentication.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub requires_auth: bool,
}

/// Public landing route.
pub const LANDING: Route = Route { path: "/", requires_auth: false };

/// Protected charts route.
pub const APP: Route = Route { path: "/app", requires_auth: true };

/// Outcome of evaluating a route against the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the requested view.
    Render,
    /// Authentication status still in flight; render nothing.
    Unresolved,
    /// Authenticated-only route requested without a session; render nothing
    /// and run the denial action.
    Deny,
}

/// Decide whether `route` may render under `session`.
///
/// Public routes always render, including while the status lookup is still
/// in flight. Protected routes render nothing until the status resolves,
/// then render or deny on the resolved value.
pub fn decide(session: &SessionState, route: &Route) -> RouteDecision {
    if !route.requires_auth {
        return RouteDecision::Render;
    }
    match session.authenticated {
        None => RouteDecision::Unresolved,
        Some(true) => RouteDecision::Render,
        Some(false) => RouteDecision::Deny,
    }
}

/// Install the denial side effect for a protected route.
///
/// Re-runs on every session mutation, so a denial that lands while the auth
/// mode is still unresolved stays silent and fires once the mode arrives.
pub fn install_denial_handler(session: RwSignal<SessionState>, route: Route) {
    Effect::new(move || {
        let state = session.get();
        if decide(&state, &route) != RouteDecision::Deny {
            return;
        }
        match state.denial_action() {
            DenialAction::OpenPrompt => {
                if !state.login_prompt_open {
                    session.update(|s| s.apply(SessionEvent::PromptOpened));
                }
            }
            DenialAction::NotifyBlocked => notify_blocked(),
            DenialAction::Ignore => {}
        }
    });
}

/// Blocking notification for an unauthenticated protected-route request
/// under provider mode. The one explicit user-facing error signal in the
/// gate.
fn notify_blocked() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message("Please sign in to access this page");
        }
    }
}
