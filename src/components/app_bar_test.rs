use super::*;

#[test]
fn authenticated_session_shows_sign_out() {
    assert_eq!(session_button_label(Some(true)), "Sign Out");
}

#[test]
fn anonymous_session_shows_sign_in() {
    assert_eq!(session_button_label(Some(false)), "Sign In");
}

#[test]
fn unresolved_session_shows_sign_in() {
    assert_eq!(session_button_label(None), "Sign In");
}
