//! Post-document CRUD against the backend database.
//!
//! SYSTEM CONTEXT
//! ==============
//! Documents are keyed by the user-chosen slug. The backend owns storage and
//! query semantics; this module only shapes requests and degrades read
//! failures to `Option`/`bool` the way the UI wants them.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use super::backend::BackendConfig;
use super::types::{PostDocument, PostStatus};
#[cfg(feature = "hydrate")]
use super::types::DocumentPage;

/// Fields for a new post document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewPost {
    pub slug: String,
    pub title: String,
    pub content: String,
    pub featured_image: String,
    pub status: PostStatus,
    pub user_id: String,
}

/// Fields updatable on an existing post. `featured_image` is `None` when
/// the cover image is unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostPatch {
    pub title: String,
    pub content: String,
    pub featured_image: Option<String>,
    pub status: PostStatus,
}

#[cfg(any(test, feature = "hydrate"))]
fn new_post_payload(post: &NewPost) -> serde_json::Value {
    serde_json::json!({
        "documentId": post.slug,
        "data": {
            "title": post.title,
            "content": post.content,
            "featuredImage": post.featured_image,
            "status": post.status.as_str(),
            "userId": post.user_id,
        },
    })
}

#[cfg(any(test, feature = "hydrate"))]
fn patch_payload(patch: &PostPatch) -> serde_json::Value {
    let mut data = serde_json::json!({
        "title": patch.title,
        "content": patch.content,
        "status": patch.status.as_str(),
    });
    if let Some(image) = &patch.featured_image {
        data["featuredImage"] = serde_json::Value::String(image.clone());
    }
    serde_json::json!({ "data": data })
}

/// Server-side filter selecting publicly listed posts.
#[cfg(any(test, feature = "hydrate"))]
fn active_status_query() -> String {
    format!("equal(\"status\", [\"{}\"])", PostStatus::Active.as_str())
}

/// Create a post document keyed by its slug.
///
/// # Errors
///
/// Returns the backend's message if creation fails (e.g. the slug is
/// already taken).
pub async fn create_post(config: &BackendConfig, post: &NewPost) -> Result<PostDocument, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&config.documents_url())
            .header(super::backend::PROJECT_HEADER, &config.project_id)
            .credentials(web_sys::RequestCredentials::Include)
            .json(&new_post_payload(post))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure_message("create post", resp).await);
        }
        resp.json().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, post);
        Err("not available on server".to_owned())
    }
}

/// Update an existing post document.
///
/// # Errors
///
/// Returns the backend's message if the update is rejected.
pub async fn update_post(
    config: &BackendConfig,
    slug: &str,
    patch: &PostPatch,
) -> Result<PostDocument, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::patch(&config.document_url(slug))
            .header(super::backend::PROJECT_HEADER, &config.project_id)
            .credentials(web_sys::RequestCredentials::Include)
            .json(&patch_payload(patch))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure_message("update post", resp).await);
        }
        resp.json().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, slug, patch);
        Err("not available on server".to_owned())
    }
}

/// Delete a post document. Returns whether the backend confirmed deletion;
/// failures are logged.
pub async fn delete_post(config: &BackendConfig, slug: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        match gloo_net::http::Request::delete(&config.document_url(slug))
            .header(super::backend::PROJECT_HEADER, &config.project_id)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
        {
            Ok(resp) if resp.ok() => true,
            Ok(resp) => {
                log::warn!("delete post {slug} failed: {}", resp.status());
                false
            }
            Err(e) => {
                log::warn!("delete post {slug} failed: {e}");
                false
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, slug);
        false
    }
}

/// Fetch a single post by slug. `None` if missing, unauthorized, or on the
/// server.
pub async fn get_post(config: &BackendConfig, slug: &str) -> Option<PostDocument> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&config.document_url(slug))
            .header(super::backend::PROJECT_HEADER, &config.project_id)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, slug);
        None
    }
}

/// List publicly active posts. `None` on failure or on the server.
pub async fn list_active_posts(config: &BackendConfig) -> Option<Vec<PostDocument>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&config.documents_url())
            .header(super::backend::PROJECT_HEADER, &config.project_id)
            .credentials(web_sys::RequestCredentials::Include)
            .query([("queries[]", active_status_query().as_str())])
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        let page: DocumentPage = resp.json().await.ok()?;
        Some(page.documents)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        None
    }
}

#[cfg(feature = "hydrate")]
async fn failure_message(operation: &str, resp: gloo_net::http::Response) -> String {
    let status = resp.status();
    match resp.json::<super::types::ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => format!("{operation} failed: {status}"),
    }
}
