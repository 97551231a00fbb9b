//! Authenticated listing of all active posts.

use leptos::prelude::*;

use crate::components::post_card::PostCard;
use crate::net::backend::BackendConfig;
use crate::net::content;

/// All-posts page — always reached through an authenticated gate.
#[component]
pub fn AllPostsPage() -> impl IntoView {
    let config = expect_context::<BackendConfig>();

    let posts = LocalResource::new(move || {
        let config = config.clone();
        async move { content::list_active_posts(&config).await.unwrap_or_default() }
    });

    view! {
        <div class="all-posts-page">
            <h1 class="all-posts-page__heading">"All Posts"</h1>
            <Suspense fallback=move || {
                view! { <p class="all-posts-page__loading">"Loading posts..."</p> }
            }>
                {move || {
                    posts
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! { <p class="all-posts-page__empty">"No posts yet."</p> }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="all-posts-page__grid">
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
