//! Public landing page listing active posts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reachable in every session state, so it handles the anonymous case
//! inline instead of being wrapped in a gate: an empty result for an
//! anonymous visitor shows a login prompt rather than an empty grid.

use leptos::prelude::*;

use crate::components::post_card::PostCard;
use crate::net::backend::BackendConfig;
use crate::net::content;
use crate::state::session::{SessionState, SessionStatus};

/// Home page — grid of active posts, or a login prompt.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let config = expect_context::<BackendConfig>();

    let posts = LocalResource::new(move || {
        let config = config.clone();
        async move { content::list_active_posts(&config).await.unwrap_or_default() }
    });

    view! {
        <div class="home-page">
            <Suspense fallback=move || {
                view! { <p class="home-page__loading">"Loading posts..."</p> }
            }>
                {move || {
                    posts
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                if session.get().status() == SessionStatus::Anonymous {
                                    view! {
                                        <p class="home-page__empty">
                                            <a href="/login">"Log in to read posts."</a>
                                        </p>
                                    }
                                        .into_any()
                                } else {
                                    view! { <p class="home-page__empty">"No posts yet."</p> }
                                        .into_any()
                                }
                            } else {
                                view! {
                                    <div class="home-page__grid">
                                        {list
                                            .into_iter()
                                            .map(|post| {
                                                view! {
                                                    <PostCard
                                                        slug=post.slug
                                                        title=post.title
                                                        featured_image=post.featured_image
                                                    />
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
