use super::*;
use crate::net::types::{PostStatus, Profile};
use crate::state::session::SessionState;

fn post_by(user_id: &str) -> PostDocument {
    PostDocument {
        slug: "first-post".to_owned(),
        title: "First Post".to_owned(),
        content: "body".to_owned(),
        featured_image: "f1".to_owned(),
        status: PostStatus::Active,
        user_id: user_id.to_owned(),
    }
}

fn session_for(user_id: &str) -> SessionState {
    SessionState::authenticated(Profile {
        id: user_id.to_owned(),
        name: "Test User".to_owned(),
        email: "a@b.com".to_owned(),
    })
}

#[test]
fn author_sees_controls() {
    assert!(is_author(&post_by("u1"), &session_for("u1")));
}

#[test]
fn other_users_do_not() {
    assert!(!is_author(&post_by("u1"), &session_for("u2")));
}

#[test]
fn anonymous_and_unresolved_sessions_do_not() {
    assert!(!is_author(&post_by("u1"), &SessionState::anonymous()));
    assert!(!is_author(&post_by("u1"), &SessionState::unknown()));
}
