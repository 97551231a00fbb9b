use super::*;

#[test]
fn request_failed_message_includes_operation_and_status() {
    assert_eq!(
        request_failed_message("session check", 503),
        "session check failed: 503"
    );
    assert_eq!(request_failed_message("login", 429), "login failed: 429");
}
