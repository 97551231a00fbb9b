//! Top navigation bar with session-dependent items and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header is a session observer like the gates: its item set follows the
//! status signal, and logout is the one place the store transitions
//! `Authenticated -> Anonymous` by user action.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;

use crate::net::backend::BackendConfig;
use crate::state::session::{SessionState, SessionStatus, SessionStore};

/// A navigation entry in the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

/// Navigation items visible for a given session status.
///
/// While the session is unresolved only Home is offered, so the header never
/// advertises a destination its gate would immediately bounce.
pub fn nav_items(status: SessionStatus) -> Vec<NavItem> {
    let mut items = vec![NavItem {
        label: "Home",
        path: "/",
    }];
    match status {
        SessionStatus::Unknown => {}
        SessionStatus::Anonymous => {
            items.push(NavItem {
                label: "Login",
                path: "/login",
            });
            items.push(NavItem {
                label: "Signup",
                path: "/signup",
            });
        }
        SessionStatus::Authenticated => {
            items.push(NavItem {
                label: "All Posts",
                path: "/all-posts",
            });
            items.push(NavItem {
                label: "Add Post",
                path: "/add-post",
            });
        }
    }
    items
}

/// Site header with navigation and logout.
#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let store = expect_context::<SessionStore>();
    let config = expect_context::<BackendConfig>();

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let store = store.clone();
            let config = config.clone();
            leptos::task::spawn_local(async move {
                // Best-effort remote teardown; the local session ends either way.
                crate::net::identity::logout(&config).await;
                store.set_anonymous();
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&store, &config);
        }
    };

    view! {
        <header class="header">
            <nav class="header__nav">
                <a class="header__brand" href="/">
                    "Inkpost"
                </a>
                <ul class="header__items">
                    {move || {
                        nav_items(session.get().status())
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <li class="header__item">
                                        <a href=item.path>{item.label}</a>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                    <Show when=move || session.get().status() == SessionStatus::Authenticated>
                        <li class="header__item">
                            <button class="header__logout" on:click=on_logout.clone()>
                                "Logout"
                            </button>
                        </li>
                    </Show>
                </ul>
            </nav>
        </header>
    }
}
