//! Public single-post view with author-only edit and delete.

#[cfg(test)]
#[path = "post_test.rs"]
mod post_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::backend::BackendConfig;
use crate::net::content;
use crate::net::media;
use crate::net::types::PostDocument;
use crate::state::session::SessionState;
use crate::util::markdown;

/// Only the author may edit or delete a post.
fn is_author(post: &PostDocument, state: &SessionState) -> bool {
    state.profile().is_some_and(|profile| profile.id == post.user_id)
}

/// Post page — renders the cover image and markdown body for the `:slug`
/// route param.
#[component]
pub fn PostPage() -> impl IntoView {
    let config = expect_context::<BackendConfig>();
    let params = use_params_map();

    let post = LocalResource::new(move || {
        let config = config.clone();
        let slug = params.read().get("slug").unwrap_or_default();
        async move { content::get_post(&config, &slug).await }
    });

    view! {
        <div class="post-page">
            <Suspense fallback=move || {
                view! { <p class="post-page__loading">"Loading post..."</p> }
            }>
                {move || {
                    post.get()
                        .map(|loaded| match loaded {
                            Some(post) => view! { <PostView post=post/> }.into_any(),
                            None => {
                                view! { <p class="post-page__missing">"Post not found."</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

/// Loaded-post body, split out so the author check runs against a concrete
/// document.
#[component]
fn PostView(post: PostDocument) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let config = expect_context::<BackendConfig>();
    let navigate = use_navigate();

    let image_url = media::preview_url(&config, &post.featured_image);
    let body_html = markdown::render_html(&post.content);
    let edit_href = format!("/edit-post/{}", post.slug);
    let busy = RwSignal::new(false);

    let author_post = post.clone();
    let show_controls = move || is_author(&author_post, &session.get());

    let delete_slug = post.slug.clone();
    let delete_image = post.featured_image.clone();
    let on_delete = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            let navigate = navigate.clone();
            let slug = delete_slug.clone();
            let image = delete_image.clone();
            leptos::task::spawn_local(async move {
                if crate::net::content::delete_post(&config, &slug).await {
                    crate::net::media::delete_file(&config, &image).await;
                    navigate("/", leptos_router::NavigateOptions::default());
                } else {
                    busy.set(false);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&config, &navigate, &delete_slug, &delete_image);
        }
    };

    view! {
        <article class="post-page__article">
            <img class="post-page__image" src=image_url alt=post.title.clone()/>
            <h1 class="post-page__title">{post.title.clone()}</h1>
            <Show when=show_controls.clone()>
                <div class="post-page__controls">
                    <a class="post-page__edit" href=edit_href.clone()>
                        "Edit"
                    </a>
                    <button
                        class="post-page__delete"
                        disabled=move || busy.get()
                        on:click=on_delete.clone()
                    >
                        "Delete"
                    </button>
                </div>
            </Show>
            <div class="post-page__body" inner_html=body_html></div>
        </article>
    }
}
