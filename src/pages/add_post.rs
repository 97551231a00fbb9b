//! Authenticated page for writing a new post.

use leptos::prelude::*;

use crate::components::post_form::PostForm;

#[component]
pub fn AddPostPage() -> impl IntoView {
    view! {
        <div class="add-post-page">
            <h1 class="add-post-page__heading">"New Post"</h1>
            <PostForm/>
        </div>
    }
}
