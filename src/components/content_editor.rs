//! Markdown editor with a live preview.
//!
//! Typed stand-in for a rich-text widget: the body is plain markdown in a
//! textarea and the preview renders through the same path as the post view.

use leptos::prelude::*;

use crate::util::markdown;

/// Labelled markdown textarea with rendered preview underneath.
#[component]
pub fn ContentEditor(label: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="content-editor">
            <label class="content-editor__label">{label}</label>
            <textarea
                class="content-editor__input"
                rows="12"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
            <div
                class="content-editor__preview"
                inner_html=move || markdown::render_html(&value.get())
            ></div>
        </div>
    }
}
