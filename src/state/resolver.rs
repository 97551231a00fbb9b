//! One-time startup resolution of the session status.
//!
//! SYSTEM CONTEXT
//! ==============
//! At application start the store holds `Unknown`. The resolver asks the
//! backend who the current caller is and moves the store to `Authenticated`
//! or `Anonymous` exactly once. Route gates stay in their waiting state
//! until that completion lands.

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::net::types::Profile;
use crate::state::session::SessionStore;

/// Result of asking the backend for the current session.
#[derive(Clone, Debug, PartialEq)]
pub enum ResolutionOutcome {
    /// An active session exists; here is its profile.
    Profile(Profile),
    /// The backend answered definitively: nobody is logged in.
    NoSession,
    /// Transport error or malformed response. Treated as no session.
    Failed(String),
}

/// Drives the `Unknown -> Authenticated | Anonymous` transition.
///
/// One instance lives for the application lifetime. `begin` coalesces
/// duplicate invocations (hot remounts, re-run effects) so the network call
/// is issued at most once, and the store's own `Unknown`-only guard makes
/// `complete` idempotent on top of that.
#[derive(Clone)]
pub struct SessionResolver {
    store: SessionStore,
    started: Arc<AtomicBool>,
}

impl SessionResolver {
    pub fn new(store: SessionStore) -> Self {
        Self {
            store,
            started: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Claim the single resolution slot.
    ///
    /// Returns `true` for the first caller only; later callers must not
    /// issue another session check.
    pub fn begin(&self) -> bool {
        !self.started.swap(true, Ordering::SeqCst)
    }

    /// Apply the backend's answer to the store.
    ///
    /// Returns whether a status transition happened. A completion arriving
    /// after the status already settled (duplicate, or an explicit login
    /// raced ahead) is discarded.
    pub fn complete(&self, outcome: ResolutionOutcome) -> bool {
        self.store.resolve(outcome)
    }
}
