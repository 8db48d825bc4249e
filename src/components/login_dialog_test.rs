use super::*;

#[test]
fn validate_login_input_trims_both_fields() {
    assert_eq!(
        validate_login_input("  ada  ", " hunter2 "),
        Ok(("ada".to_owned(), "hunter2".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_username() {
    assert_eq!(
        validate_login_input("   ", "hunter2"),
        Err("Enter both user ID and password.")
    );
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(
        validate_login_input("ada", ""),
        Err("Enter both user ID and password.")
    );
}
