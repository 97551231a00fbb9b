//! Route gate wrapping protected and anonymous-only pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every gated route declares a [`RouteRequirement`]; the gate re-evaluates
//! it against the session signal on each change and renders, waits, or
//! redirects. Decision logic lives in `state::gate` so this component stays
//! a thin binding to the router.

use std::sync::{Arc, Mutex};

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::gate::{GateDecision, RedirectLatch, RouteRequirement, evaluate};
use crate::state::session::SessionState;

/// Conditionally render `children` based on the session status.
///
/// While the session is unresolved the gate shows a neutral waiting
/// indicator and never redirects; once resolved, a requirement mismatch
/// navigates to the fallback route exactly once.
#[component]
pub fn RouteGate(requirement: RouteRequirement, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let latch = Arc::new(Mutex::new(RedirectLatch::new()));

    Effect::new(move || {
        let decision = evaluate(requirement, &session.get());
        let redirect = match latch.lock() {
            Ok(mut latch) => latch.arm(decision),
            Err(poisoned) => poisoned.into_inner().arm(decision),
        };
        if let Some(path) = redirect {
            navigate(path, NavigateOptions::default());
        }
    });

    move || match evaluate(requirement, &session.get()) {
        GateDecision::Allow => children(),
        GateDecision::Pending | GateDecision::Redirect(_) => {
            view! { <p class="route-gate__waiting">"Loading..."</p> }.into_any()
        }
    }
}
