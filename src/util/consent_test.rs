use super::*;

#[test]
fn marker_detected_among_other_cookies() {
    assert!(has_consent_marker("theme=dark; apqlikcoreaccept=true; lang=en"));
}

#[test]
fn marker_detected_when_only_cookie() {
    assert!(has_consent_marker("apqlikcoreaccept=true"));
}

#[test]
fn marker_absent_from_unrelated_cookies() {
    assert!(!has_consent_marker(""));
    assert!(!has_consent_marker("theme=dark; lang=en"));
}

#[test]
fn cookie_string_pins_name_value_expiry_and_path() {
    assert_eq!(
        consent_cookie_string(),
        "apqlikcoreaccept=true; expires=Sat, 01 Jan 2050 00:00:00 GMT; path=/"
    );
}

#[test]
fn written_cookie_string_round_trips_through_the_marker_check() {
    assert!(has_consent_marker(&consent_cookie_string()));
}
