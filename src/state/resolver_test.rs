use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::state::session::SessionStatus;

fn profile(id: &str, email: &str) -> Profile {
    Profile {
        id: id.to_owned(),
        name: "Test User".to_owned(),
        email: email.to_owned(),
    }
}

// =============================================================
// Outcome application
// =============================================================

#[test]
fn profile_outcome_authenticates() {
    let store = SessionStore::new();
    let resolver = SessionResolver::new(store.clone());
    assert!(resolver.begin());
    assert!(resolver.complete(ResolutionOutcome::Profile(profile("u1", "a@b.com"))));

    let state = store.state();
    assert_eq!(state.status(), SessionStatus::Authenticated);
    assert_eq!(state.profile().map(|p| p.id.as_str()), Some("u1"));
    assert_eq!(state.profile().map(|p| p.email.as_str()), Some("a@b.com"));
}

#[test]
fn no_session_outcome_is_anonymous() {
    let store = SessionStore::new();
    let resolver = SessionResolver::new(store.clone());
    resolver.complete(ResolutionOutcome::NoSession);

    let state = store.state();
    assert_eq!(state.status(), SessionStatus::Anonymous);
    assert!(state.profile().is_none());
}

#[test]
fn failure_outcome_is_anonymous_never_unknown_or_authenticated() {
    let store = SessionStore::new();
    let resolver = SessionResolver::new(store.clone());
    resolver.complete(ResolutionOutcome::Failed("network unreachable".to_owned()));

    assert_eq!(store.state().status(), SessionStatus::Anonymous);
}

// =============================================================
// Exactly-once
// =============================================================

#[test]
fn begin_claims_the_slot_once() {
    let resolver = SessionResolver::new(SessionStore::new());
    assert!(resolver.begin());
    assert!(!resolver.begin());
    assert!(!resolver.begin());
}

#[test]
fn begin_is_coalesced_across_clones() {
    let resolver = SessionResolver::new(SessionStore::new());
    let twin = resolver.clone();
    assert!(resolver.begin());
    assert!(!twin.begin());
}

#[test]
fn duplicate_completion_yields_one_observed_transition() {
    let store = SessionStore::new();
    let transitions = Arc::new(AtomicUsize::new(0));
    let counter = transitions.clone();
    let _sub = store.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let resolver = SessionResolver::new(store.clone());
    assert!(resolver.complete(ResolutionOutcome::NoSession));
    assert!(!resolver.complete(ResolutionOutcome::Profile(profile("u1", "a@b.com"))));

    assert_eq!(transitions.load(Ordering::SeqCst), 1);
    assert_eq!(store.state().status(), SessionStatus::Anonymous);
}

#[test]
fn stale_completion_after_explicit_login_is_discarded() {
    let store = SessionStore::new();
    let resolver = SessionResolver::new(store.clone());

    // An explicit login settles the status before the startup check lands.
    store.set_authenticated(profile("u1", "a@b.com"));
    assert!(!resolver.complete(ResolutionOutcome::NoSession));

    assert_eq!(store.state().status(), SessionStatus::Authenticated);
}
