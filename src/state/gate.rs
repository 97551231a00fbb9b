//! Route-gate state machine: requirement vs. session status.
//!
//! DESIGN
//! ======
//! The decision logic is a pure function so route guarding is testable
//! without a DOM or router. The Leptos component in
//! `components::route_gate` feeds it the live session signal and turns
//! `Redirect` decisions into navigation exactly once per disallowed entry.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use crate::state::session::{SessionState, SessionStatus};

/// Fallback route when an authenticated-only view is hit anonymously.
pub const LOGIN_ROUTE: &str = "/login";
/// Fallback route when an anonymous-only view is hit while logged in.
pub const HOME_ROUTE: &str = "/";

/// Declared requirement of a gated route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteRequirement {
    /// Only render for a logged-in user; otherwise send to the login page.
    Authenticated,
    /// Only render for an anonymous visitor; otherwise send home.
    Anonymous,
}

/// What a gate should do for a given session snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Session not yet resolved: show a neutral waiting indicator.
    Pending,
    /// Requirement satisfied: render the wrapped subtree.
    Allow,
    /// Requirement mismatched: navigate to the fallback route.
    Redirect(&'static str),
}

/// Evaluate a requirement against the current session snapshot.
///
/// Protected content is never allowed while the status is `Unknown`; the
/// resolver's answer must land first.
pub fn evaluate(requirement: RouteRequirement, state: &SessionState) -> GateDecision {
    match (requirement, state.status()) {
        (_, SessionStatus::Unknown) => GateDecision::Pending,
        (RouteRequirement::Authenticated, SessionStatus::Authenticated)
        | (RouteRequirement::Anonymous, SessionStatus::Anonymous) => GateDecision::Allow,
        (RouteRequirement::Authenticated, SessionStatus::Anonymous) => {
            GateDecision::Redirect(LOGIN_ROUTE)
        }
        (RouteRequirement::Anonymous, SessionStatus::Authenticated) => {
            GateDecision::Redirect(HOME_ROUTE)
        }
    }
}

/// One-shot trigger for the redirect side effect.
///
/// A gate re-evaluates on every session change and every render; without the
/// latch a mismatch would fire navigation repeatedly while the route
/// transition is still in flight. The latch re-arms whenever the decision
/// leaves `Redirect`, so a later disallowed entry (e.g. logout on a
/// protected page) redirects again.
#[derive(Debug, Default)]
pub struct RedirectLatch {
    fired: bool,
}

impl RedirectLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the latest decision; returns the path to navigate to, at most
    /// once per disallowed-state entry.
    pub fn arm(&mut self, decision: GateDecision) -> Option<&'static str> {
        match decision {
            GateDecision::Redirect(path) => {
                if self.fired {
                    None
                } else {
                    self.fired = true;
                    Some(path)
                }
            }
            GateDecision::Pending | GateDecision::Allow => {
                self.fired = false;
                None
            }
        }
    }
}
