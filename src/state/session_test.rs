use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::*;

fn profile(id: &str, email: &str) -> Profile {
    Profile {
        id: id.to_owned(),
        name: "Test User".to_owned(),
        email: email.to_owned(),
    }
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn new_store_starts_unknown_with_no_profile() {
    let store = SessionStore::new();
    let state = store.state();
    assert_eq!(state.status(), SessionStatus::Unknown);
    assert!(state.profile().is_none());
}

#[test]
fn session_state_default_is_unknown() {
    assert_eq!(SessionState::default(), SessionState::unknown());
}

// =============================================================
// Mutations
// =============================================================

#[test]
fn set_authenticated_stores_profile() {
    let store = SessionStore::new();
    store.set_authenticated(profile("u1", "a@b.com"));
    let state = store.state();
    assert_eq!(state.status(), SessionStatus::Authenticated);
    assert_eq!(state.profile().map(|p| p.id.as_str()), Some("u1"));
}

#[test]
fn set_anonymous_clears_profile() {
    let store = SessionStore::new();
    store.set_authenticated(profile("u1", "a@b.com"));
    store.set_anonymous();
    let state = store.state();
    assert_eq!(state.status(), SessionStatus::Anonymous);
    assert!(state.profile().is_none());
}

#[test]
fn login_logout_login_round_trip() {
    let store = SessionStore::new();
    store.set_anonymous();
    store.set_authenticated(profile("u1", "a@b.com"));
    assert_eq!(store.state().status(), SessionStatus::Authenticated);
    store.set_anonymous();
    assert_eq!(store.state().status(), SessionStatus::Anonymous);
    store.set_authenticated(profile("u2", "c@d.com"));
    assert_eq!(store.state().profile().map(|p| p.id.as_str()), Some("u2"));
}

// =============================================================
// Observers
// =============================================================

#[test]
fn observer_sees_fully_formed_snapshot_after_commit() {
    let store = SessionStore::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_writer = seen.clone();
    let _sub = store.subscribe(move |state| {
        // Status and profile must always be consistent in a notification.
        let has_profile = state.profile().is_some();
        let authenticated = state.status() == SessionStatus::Authenticated;
        assert_eq!(has_profile, authenticated);
        seen_writer.lock().unwrap().push(state.status());
    });

    store.set_authenticated(profile("u1", "a@b.com"));
    store.set_anonymous();

    let statuses = seen.lock().unwrap();
    assert_eq!(
        *statuses,
        vec![SessionStatus::Authenticated, SessionStatus::Anonymous]
    );
}

#[test]
fn observer_can_read_store_from_callback() {
    let store = SessionStore::new();
    let reader = store.clone();
    let matched = Arc::new(AtomicUsize::new(0));
    let matched_writer = matched.clone();
    let _sub = store.subscribe(move |state| {
        if reader.state() == *state {
            matched_writer.fetch_add(1, Ordering::SeqCst);
        }
    });

    store.set_anonymous();
    assert_eq!(matched.load(Ordering::SeqCst), 1);
}

#[test]
fn dropping_subscription_unregisters_observer() {
    let store = SessionStore::new();
    let count = Arc::new(AtomicUsize::new(0));
    let counter = count.clone();
    let sub = store.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    store.set_anonymous();
    drop(sub);
    store.set_authenticated(profile("u1", "a@b.com"));

    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn multiple_observers_all_notified() {
    let store = SessionStore::new();
    let count = Arc::new(AtomicUsize::new(0));
    let first = count.clone();
    let second = count.clone();
    let _a = store.subscribe(move |_| {
        first.fetch_add(1, Ordering::SeqCst);
    });
    let _b = store.subscribe(move |_| {
        second.fetch_add(1, Ordering::SeqCst);
    });

    store.set_anonymous();
    assert_eq!(count.load(Ordering::SeqCst), 2);
}

// =============================================================
// Resolution guard
// =============================================================

#[test]
fn resolve_is_discarded_once_status_settled() {
    let store = SessionStore::new();
    store.set_authenticated(profile("u1", "a@b.com"));
    let applied = store.resolve(ResolutionOutcome::NoSession);
    assert!(!applied);
    assert_eq!(store.state().status(), SessionStatus::Authenticated);
}

#[test]
fn racing_resolutions_apply_exactly_once() {
    let store = SessionStore::new();
    let transitions = Arc::new(AtomicUsize::new(0));
    let counter = transitions.clone();
    let _sub = store.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let store = store.clone();
            std::thread::spawn(move || {
                let outcome = if i % 2 == 0 {
                    ResolutionOutcome::NoSession
                } else {
                    ResolutionOutcome::Profile(profile("u1", "a@b.com"))
                };
                store.resolve(outcome)
            })
        })
        .collect();
    let applied = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .filter(|applied| *applied)
        .count();

    assert_eq!(applied, 1);
    assert_eq!(transitions.load(Ordering::SeqCst), 1);
    assert_ne!(store.state().status(), SessionStatus::Unknown);
}
