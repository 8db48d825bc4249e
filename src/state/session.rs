//! Session state for the access gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SessionState` is constructed per page load, provided via Leptos
//! context, and mutated only through `SessionEvent` application. The two
//! identity lookups resolve independently and in no guaranteed order, so
//! every consumer reads resolved-vs-unresolved through the `Option`
//! sentinels rather than assuming a sequence.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Authentication mode the deployment is configured for.
///
/// Resolved once per page load from the identity-mode endpoint. An
/// unrecognized token maps to `Unknown`, for which both sign-in and denial
/// handling are no-ops.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    /// Username/password form handled by the local gateway.
    Local,
    /// External GitHub OAuth provider.
    Github,
    /// Mode token the client does not recognize.
    Unknown,
}

impl AuthMode {
    /// Parse the plain token returned by the identity-mode endpoint.
    pub fn parse(token: &str) -> Self {
        match token {
            "local" => Self::Local,
            "github" => Self::Github,
            _ => Self::Unknown,
        }
    }
}

/// In-memory session record backing the access gate.
///
/// `auth_mode == None` and `authenticated == None` mean the corresponding
/// identity lookup has not completed. Protected content must not render
/// while `authenticated` is `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub auth_mode: Option<AuthMode>,
    pub authenticated: Option<bool>,
    pub login_prompt_open: bool,
    pub cookie_consent_given: bool,
}

impl SessionState {
    /// Fresh state for a new page load. `cookie_consent_given` comes from
    /// the persisted consent marker so the banner never flashes for users
    /// who already accepted.
    pub fn new(cookie_consent_given: bool) -> Self {
        Self {
            auth_mode: None,
            authenticated: None,
            login_prompt_open: false,
            cookie_consent_given,
        }
    }

    /// Apply one state transition.
    ///
    /// Resolution events are first-wins: each identity field is written at
    /// most once per page load (the lookups are one-shot and never re-poll).
    pub fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::ModeResolved(mode) => {
                if self.auth_mode.is_none() {
                    self.auth_mode = Some(mode);
                }
            }
            SessionEvent::StatusResolved(authenticated) => {
                if self.authenticated.is_none() {
                    self.authenticated = Some(authenticated);
                }
            }
            SessionEvent::SignedOut => self.authenticated = Some(false),
            SessionEvent::PromptOpened => self.login_prompt_open = true,
            SessionEvent::PromptClosed => self.login_prompt_open = false,
            SessionEvent::ConsentAccepted => self.cookie_consent_given = true,
        }
    }

    /// What the Sign In button should do under the current mode.
    pub fn sign_in_action(&self) -> SignInAction {
        match self.auth_mode {
            Some(AuthMode::Local) => SignInAction::OpenPrompt,
            Some(AuthMode::Github) => SignInAction::RedirectToProvider,
            Some(AuthMode::Unknown) | None => SignInAction::Ignore,
        }
    }

    /// What a protected-route denial should do under the current mode.
    ///
    /// While the mode is unresolved the denial stays silent; the guard
    /// re-evaluates once the mode lands and the action fires then.
    pub fn denial_action(&self) -> DenialAction {
        match self.auth_mode {
            Some(AuthMode::Local) => DenialAction::OpenPrompt,
            Some(AuthMode::Github) => DenialAction::NotifyBlocked,
            Some(AuthMode::Unknown) | None => DenialAction::Ignore,
        }
    }
}

/// State transitions applied by the identity resolver and session actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// The identity-mode lookup completed.
    ModeResolved(AuthMode),
    /// The authentication-status lookup completed.
    StatusResolved(bool),
    /// The sign-out endpoint confirmed session termination.
    SignedOut,
    PromptOpened,
    PromptClosed,
    ConsentAccepted,
}

/// Outcome of a Sign In click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignInAction {
    OpenPrompt,
    RedirectToProvider,
    Ignore,
}

/// Outcome of an unauthenticated request for a protected route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DenialAction {
    OpenPrompt,
    NotifyBlocked,
    Ignore,
}
