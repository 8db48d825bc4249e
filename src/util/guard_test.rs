use super::*;
use crate::state::session::AuthMode;

fn session(auth_mode: Option<AuthMode>, authenticated: Option<bool>) -> SessionState {
    SessionState {
        auth_mode,
        authenticated,
        login_prompt_open: false,
        cookie_consent_given: false,
    }
}

// =============================================================
// Route table
// =============================================================

#[test]
fn landing_route_is_public() {
    assert_eq!(LANDING.path, "/");
    assert!(!LANDING.requires_auth);
}

#[test]
fn app_route_requires_auth() {
    assert_eq!(APP.path, "/app");
    assert!(APP.requires_auth);
}

// =============================================================
// Public routes render regardless of authentication
// =============================================================

#[test]
fn public_route_renders_while_status_unresolved() {
    let state = session(None, None);
    assert_eq!(decide(&state, &LANDING), RouteDecision::Render);
}

#[test]
fn public_route_renders_for_authenticated_and_anonymous_sessions() {
    assert_eq!(decide(&session(None, Some(true)), &LANDING), RouteDecision::Render);
    assert_eq!(decide(&session(None, Some(false)), &LANDING), RouteDecision::Render);
}

// =============================================================
// Protected routes
// =============================================================

#[test]
fn protected_route_blank_while_status_unresolved() {
    // Mode resolution alone must not unlock protected content.
    assert_eq!(decide(&session(None, None), &APP), RouteDecision::Unresolved);
    assert_eq!(
        decide(&session(Some(AuthMode::Local), None), &APP),
        RouteDecision::Unresolved
    );
    assert_eq!(
        decide(&session(Some(AuthMode::Github), None), &APP),
        RouteDecision::Unresolved
    );
}

#[test]
fn protected_route_renders_for_authenticated_session() {
    let state = session(Some(AuthMode::Github), Some(true));
    assert_eq!(decide(&state, &APP), RouteDecision::Render);
}

#[test]
fn protected_route_denied_for_anonymous_session() {
    let state = session(Some(AuthMode::Local), Some(false));
    assert_eq!(decide(&state, &APP), RouteDecision::Deny);
}

// =============================================================
// Denial scenarios across resolution orderings
// =============================================================

#[test]
fn local_denial_stays_blank_until_both_lookups_resolve() {
    use crate::state::session::{DenialAction, SessionEvent};

    // Status lands first: denied, but the denial action is still silent.
    let mut state = SessionState::new(false);
    state.apply(SessionEvent::StatusResolved(false));
    assert_eq!(decide(&state, &APP), RouteDecision::Deny);
    assert_eq!(state.denial_action(), DenialAction::Ignore);

    // Mode lands second: the same denial now opens the login prompt.
    state.apply(SessionEvent::ModeResolved(AuthMode::Local));
    assert_eq!(decide(&state, &APP), RouteDecision::Deny);
    assert_eq!(state.denial_action(), DenialAction::OpenPrompt);
}

#[test]
fn local_denial_opens_prompt_when_mode_resolves_first() {
    use crate::state::session::{DenialAction, SessionEvent};

    let mut state = SessionState::new(false);
    state.apply(SessionEvent::ModeResolved(AuthMode::Local));
    assert_eq!(decide(&state, &APP), RouteDecision::Unresolved);

    state.apply(SessionEvent::StatusResolved(false));
    assert_eq!(decide(&state, &APP), RouteDecision::Deny);
    assert_eq!(state.denial_action(), DenialAction::OpenPrompt);
}

#[test]
fn github_authenticated_session_renders_without_side_effects() {
    use crate::state::session::SessionEvent;

    let mut state = SessionState::new(false);
    state.apply(SessionEvent::ModeResolved(AuthMode::Github));
    state.apply(SessionEvent::StatusResolved(true));
    assert_eq!(decide(&state, &APP), RouteDecision::Render);
    assert!(!state.login_prompt_open);
}

#[test]
fn sign_out_re_evaluates_to_denial() {
    use crate::state::session::{DenialAction, SessionEvent};

    let mut state = SessionState::new(false);
    state.apply(SessionEvent::ModeResolved(AuthMode::Github));
    state.apply(SessionEvent::StatusResolved(true));
    assert_eq!(decide(&state, &APP), RouteDecision::Render);

    state.apply(SessionEvent::SignedOut);
    assert_eq!(decide(&state, &APP), RouteDecision::Deny);
    assert_eq!(state.denial_action(), DenialAction::NotifyBlocked);
}
