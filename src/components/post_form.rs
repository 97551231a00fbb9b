//! Shared create/edit form for posts.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AddPost` renders this with no post, `EditPost` with the loaded one. The
//! slug doubles as the document primary key: it is auto-derived from the
//! title while creating and read-only while editing. Creating requires a
//! cover image; editing uploads a replacement and then deletes the old file.

#[cfg(test)]
#[path = "post_form_test.rs"]
mod post_form_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::content_editor::ContentEditor;
use crate::net::backend::BackendConfig;
use crate::net::media;
use crate::net::types::{PostDocument, PostStatus};
use crate::state::session::SessionState;
use crate::util::slug::slugify;

/// Check form fields before any network work.
///
/// The image is only mandatory when creating; an edit without a new file
/// keeps the existing one.
fn validate_post_form(
    title: &str,
    slug: &str,
    editing: bool,
    has_file: bool,
) -> Result<(), &'static str> {
    if title.trim().is_empty() {
        return Err("Enter a title first.");
    }
    if slug.trim().is_empty() {
        return Err("The slug cannot be empty.");
    }
    if !editing && !has_file {
        return Err("Choose a cover image.");
    }
    Ok(())
}

/// Which save call to issue once the optional upload has settled.
#[derive(Clone, Debug, PartialEq, Eq)]
enum SaveAction {
    /// Create a new document with this cover image.
    Create { featured_image: String },
    /// Patch the existing document; `None` keeps the stored cover image.
    Update { featured_image: Option<String> },
}

/// The submit flow after validation and upload: what to delete, then save.
#[derive(Clone, Debug, PartialEq, Eq)]
struct SubmissionPlan {
    /// Old cover file superseded by a fresh upload.
    delete_file: Option<String>,
    action: SaveAction,
}

/// Decide the save call and cover-image cleanup for one submission.
///
/// Editing with a new upload deletes the previous file before patching;
/// editing without one leaves the stored image untouched. On the create
/// path validation already guaranteed a file, so `uploaded` is present.
fn plan_submission(
    editing: bool,
    uploaded: Option<String>,
    previous_image: Option<String>,
) -> SubmissionPlan {
    if editing {
        SubmissionPlan {
            delete_file: if uploaded.is_some() { previous_image } else { None },
            action: SaveAction::Update {
                featured_image: uploaded,
            },
        }
    } else {
        SubmissionPlan {
            delete_file: None,
            action: SaveAction::Create {
                featured_image: uploaded.unwrap_or_default(),
            },
        }
    }
}

/// Post create/edit form. Pass `post` to edit an existing document.
#[component]
pub fn PostForm(#[prop(optional)] post: Option<PostDocument>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let config = expect_context::<BackendConfig>();
    let navigate = use_navigate();

    let editing = post.is_some();
    let title = RwSignal::new(post.as_ref().map(|p| p.title.clone()).unwrap_or_default());
    let slug = RwSignal::new(post.as_ref().map(|p| p.slug.clone()).unwrap_or_default());
    let content = RwSignal::new(post.as_ref().map(|p| p.content.clone()).unwrap_or_default());
    let status = RwSignal::new(post.as_ref().map_or(PostStatus::Active, |p| p.status));
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let file_input = NodeRef::<leptos::html::Input>::new();

    let existing_image = post.as_ref().map(|p| p.featured_image.clone());
    let existing_preview = existing_image
        .as_ref()
        .map(|id| media::preview_url(&config, id));

    let on_title_input = move |ev| {
        let value = event_target_value(&ev);
        if !editing {
            slug.set(slugify(&value));
        }
        title.set(value);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let file = file_input
                .get()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            if let Err(message) =
                validate_post_form(&title.get(), &slug.get(), editing, file.is_some())
            {
                error.set(message.to_owned());
                return;
            }
            let Some(author_id) = session.get().profile().map(|p| p.id.clone()) else {
                error.set("You must be logged in to publish.".to_owned());
                return;
            };

            busy.set(true);
            error.set(String::new());

            let config = config.clone();
            let navigate = navigate.clone();
            let previous_image = existing_image.clone();
            let slug_value = slug.get().trim().to_owned();
            let title_value = title.get().trim().to_owned();
            let content_value = content.get();
            let status_value = status.get();

            leptos::task::spawn_local(async move {
                let uploaded = match file {
                    Some(file) => match media::upload_file(&config, &file).await {
                        Ok(stored) => Some(stored.id),
                        Err(e) => {
                            error.set(format!("Image upload failed: {e}"));
                            busy.set(false);
                            return;
                        }
                    },
                    None => None,
                };

                let plan = plan_submission(editing, uploaded, previous_image);
                if let Some(old) = &plan.delete_file {
                    media::delete_file(&config, old).await;
                }
                let result = match plan.action {
                    SaveAction::Update { featured_image } => {
                        let patch = crate::net::content::PostPatch {
                            title: title_value,
                            content: content_value,
                            featured_image,
                            status: status_value,
                        };
                        crate::net::content::update_post(&config, &slug_value, &patch).await
                    }
                    SaveAction::Create { featured_image } => {
                        let new_post = crate::net::content::NewPost {
                            slug: slug_value.clone(),
                            title: title_value,
                            content: content_value,
                            featured_image,
                            status: status_value,
                            user_id: author_id,
                        };
                        crate::net::content::create_post(&config, &new_post).await
                    }
                };

                match result {
                    Ok(saved) => {
                        navigate(&format!("/post/{}", saved.slug), leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        error.set(e);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&config, &navigate, &existing_image, &session, &file_input);
        }
    };

    view! {
        <form class="post-form" on:submit=on_submit>
            <div class="post-form__main">
                <label class="post-form__label">
                    "Title"
                    <input
                        class="post-form__input"
                        type="text"
                        placeholder="Title"
                        prop:value=move || title.get()
                        on:input=on_title_input
                    />
                </label>
                <label class="post-form__label">
                    "Slug"
                    <input
                        class="post-form__input"
                        type="text"
                        placeholder="slug"
                        disabled=editing
                        prop:value=move || slug.get()
                        on:input=move |ev| slug.set(slugify(&event_target_value(&ev)))
                    />
                </label>
                <ContentEditor label="Content" value=content/>
            </div>
            <div class="post-form__side">
                <label class="post-form__label">
                    "Cover image"
                    <input
                        class="post-form__input"
                        type="file"
                        accept="image/png, image/jpg, image/jpeg, image/gif"
                        node_ref=file_input
                    />
                </label>
                {existing_preview
                    .map(|url| view! { <img class="post-form__preview" src=url alt="Current cover"/> })}
                <label class="post-form__label">
                    "Status"
                    <select
                        class="post-form__input"
                        on:change=move |ev| {
                            status
                                .set(
                                    if event_target_value(&ev) == "inactive" {
                                        PostStatus::Inactive
                                    } else {
                                        PostStatus::Active
                                    },
                                );
                        }
                    >
                        <option value="active" selected=status.get_untracked() == PostStatus::Active>
                            "Active"
                        </option>
                        <option
                            value="inactive"
                            selected=status.get_untracked() == PostStatus::Inactive
                        >
                            "Inactive"
                        </option>
                    </select>
                </label>
                <Show when=move || !error.get().is_empty()>
                    <p class="post-form__error">{move || error.get()}</p>
                </Show>
                <button class="post-form__submit" type="submit" disabled=move || busy.get()>
                    {if editing { "Update" } else { "Submit" }}
                </button>
            </div>
        </form>
    }
}
