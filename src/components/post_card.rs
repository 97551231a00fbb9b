//! Clickable card for post list items.
//!
//! DESIGN
//! ======
//! Keeps post presentation consistent between the home grid and the
//! all-posts grid; the whole card links to the post view.

use leptos::prelude::*;

use crate::net::backend::BackendConfig;
use crate::net::media;

/// A clickable card representing a post.
#[component]
pub fn PostCard(slug: String, title: String, featured_image: String) -> impl IntoView {
    let config = expect_context::<BackendConfig>();
    let href = format!("/post/{slug}");
    let image_url = media::preview_url(&config, &featured_image);

    view! {
        <a class="post-card" href=href>
            <img class="post-card__image" src=image_url alt=title.clone()/>
            <h2 class="post-card__title">{title}</h2>
        </a>
    }
}
