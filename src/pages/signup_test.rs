use super::*;

#[test]
fn accepts_complete_input_and_trims() {
    assert_eq!(
        validate_signup_input(" Alice ", " a@b.com ", "longenough"),
        Ok((
            "Alice".to_owned(),
            "a@b.com".to_owned(),
            "longenough".to_owned()
        ))
    );
}

#[test]
fn requires_name() {
    assert_eq!(
        validate_signup_input("  ", "a@b.com", "longenough"),
        Err("Enter your name.")
    );
}

#[test]
fn requires_plausible_email() {
    assert_eq!(
        validate_signup_input("Alice", "nope", "longenough"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn enforces_minimum_password_length() {
    assert_eq!(
        validate_signup_input("Alice", "a@b.com", "short"),
        Err("Password must be at least 8 characters.")
    );
    assert!(validate_signup_input("Alice", "a@b.com", "12345678").is_ok());
}
