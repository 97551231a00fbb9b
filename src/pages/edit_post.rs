//! Authenticated page for editing an existing post.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::post_form::PostForm;
use crate::net::backend::BackendConfig;
use crate::net::content;

/// Edit-post page — loads the document named by the `:slug` route param and
/// hands it to the shared form.
#[component]
pub fn EditPostPage() -> impl IntoView {
    let config = expect_context::<BackendConfig>();
    let params = use_params_map();

    let post = LocalResource::new(move || {
        let config = config.clone();
        let slug = params.read().get("slug").unwrap_or_default();
        async move { content::get_post(&config, &slug).await }
    });

    view! {
        <div class="edit-post-page">
            <h1 class="edit-post-page__heading">"Edit Post"</h1>
            <Suspense fallback=move || {
                view! { <p class="edit-post-page__loading">"Loading post..."</p> }
            }>
                {move || {
                    post.get()
                        .map(|loaded| match loaded {
                            Some(post) => view! { <PostForm post=post/> }.into_any(),
                            None => {
                                view! { <p class="edit-post-page__missing">"Post not found."</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
