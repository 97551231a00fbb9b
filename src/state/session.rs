//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The store is the single source of truth for "is this user logged in".
//! Route gates and the header subscribe to it; the startup resolver and the
//! login/logout flows are its only writers.
//!
//! DESIGN
//! ======
//! `SessionState` is constructed through its three factory methods so a
//! profile can never be observed without `Authenticated` status (and vice
//! versa). Observers receive a full snapshot after each mutation commits,
//! never a partially-updated one.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, Weak};

use crate::net::types::Profile;
use crate::state::resolver::ResolutionOutcome;

/// Authentication status of the current browser session.
///
/// `Unknown` exists only between application start and the first resolver
/// completion; thereafter the status moves between `Authenticated` and
/// `Anonymous` on explicit login/logout and never returns to `Unknown`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Unknown,
    Authenticated,
    Anonymous,
}

/// Immutable snapshot of the session: status plus the profile, if any.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    status: SessionStatus,
    profile: Option<Profile>,
}

impl SessionState {
    /// The startup state: status not yet resolved, no profile.
    pub fn unknown() -> Self {
        Self::default()
    }

    /// An authenticated session holding the user's profile.
    pub fn authenticated(profile: Profile) -> Self {
        Self {
            status: SessionStatus::Authenticated,
            profile: Some(profile),
        }
    }

    /// A resolved session with no logged-in user.
    pub fn anonymous() -> Self {
        Self {
            status: SessionStatus::Anonymous,
            profile: None,
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }
}

type Observer = Arc<dyn Fn(&SessionState) + Send + Sync>;

struct StoreInner {
    state: SessionState,
    next_observer_id: u64,
    observers: Vec<(u64, Observer)>,
}

/// Process-wide session container with explicit observer registration.
///
/// Constructed once at startup and handed to the UI tree via context rather
/// than living as a module-level singleton, so tests get fresh instances.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Create a store in the `Unknown` state.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                state: SessionState::unknown(),
                next_observer_id: 0,
                observers: Vec::new(),
            })),
        }
    }

    /// Current snapshot. No side effects.
    pub fn state(&self) -> SessionState {
        match self.inner.lock() {
            Ok(inner) => inner.state.clone(),
            Err(poisoned) => poisoned.into_inner().state.clone(),
        }
    }

    /// Transition to `Authenticated` with the given profile.
    pub fn set_authenticated(&self, profile: Profile) {
        self.commit(SessionState::authenticated(profile));
    }

    /// Transition to `Anonymous` and clear the profile.
    pub fn set_anonymous(&self) {
        self.commit(SessionState::anonymous());
    }

    /// Apply a startup resolution outcome.
    ///
    /// Only effective while the status is still `Unknown`; a duplicate or
    /// late completion after an explicit login/logout is discarded. The
    /// status check and the transition happen under one lock, so two racing
    /// completions can never both apply. Returns whether a transition
    /// happened.
    pub fn resolve(&self, outcome: ResolutionOutcome) -> bool {
        let next = match outcome {
            ResolutionOutcome::Profile(profile) => SessionState::authenticated(profile),
            ResolutionOutcome::NoSession => SessionState::anonymous(),
            ResolutionOutcome::Failed(reason) => {
                // Fail closed: an indeterminate session is never authenticated.
                log::warn!("session resolution failed, treating as anonymous: {reason}");
                SessionState::anonymous()
            }
        };
        let committed = {
            let mut inner = self.lock();
            if inner.state.status() == SessionStatus::Unknown {
                inner.state = next;
                let observers: Vec<Observer> =
                    inner.observers.iter().map(|(_, obs)| Arc::clone(obs)).collect();
                Some((inner.state.clone(), observers))
            } else {
                None
            }
        };
        match committed {
            Some((snapshot, observers)) => {
                for observer in observers {
                    observer(&snapshot);
                }
                true
            }
            None => false,
        }
    }

    /// Register an observer called with a snapshot after every commit.
    ///
    /// The observer stays registered until the returned [`Subscription`] is
    /// dropped.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&SessionState) + Send + Sync + 'static,
    {
        let id = {
            let mut inner = self.lock();
            let id = inner.next_observer_id;
            inner.next_observer_id += 1;
            inner.observers.push((id, Arc::new(observer)));
            id
        };
        Subscription {
            store: Arc::downgrade(&self.inner),
            id,
        }
    }

    fn commit(&self, state: SessionState) {
        // Mutate under the lock, notify outside it so observers can read the
        // store (or unsubscribe) without deadlocking.
        let (snapshot, observers) = {
            let mut inner = self.lock();
            inner.state = state;
            let observers: Vec<Observer> =
                inner.observers.iter().map(|(_, obs)| Arc::clone(obs)).collect();
            (inner.state.clone(), observers)
        };
        for observer in observers {
            observer(&snapshot);
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StoreInner> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// Handle returned by [`SessionStore::subscribe`]; dropping it unregisters
/// the observer.
pub struct Subscription {
    store: Weak<Mutex<StoreInner>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(store) = self.store.upgrade() {
            let mut inner = match store.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            inner.observers.retain(|(id, _)| *id != self.id);
        }
    }
}
