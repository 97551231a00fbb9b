//! Backend endpoint configuration and URL construction.
//!
//! SYSTEM CONTEXT
//! ==============
//! All persistence, authentication, and file storage belong to an external
//! Appwrite-compatible service. This module is the single place that knows
//! how to address it; the `identity`, `content`, and `media` modules build
//! every request URL through it.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

/// Header carrying the project identifier on every request.
pub const PROJECT_HEADER: &str = "X-Appwrite-Project";

/// Typed backend configuration, replacing an open-ended env-var bag.
///
/// Values are baked in at compile time via `INKPOST_*` build environment
/// variables; the defaults point at the hosted service with empty resource
/// ids so a misconfigured build fails visibly at the backend, not silently.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    /// Base REST endpoint, without a trailing slash.
    pub endpoint: String,
    /// Project identifier sent with every request.
    pub project_id: String,
    /// Database holding the posts collection.
    pub database_id: String,
    /// Collection holding post documents.
    pub collection_id: String,
    /// Storage bucket holding cover images.
    pub bucket_id: String,
}

impl BackendConfig {
    /// Build from compile-time environment, falling back to defaults.
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("INKPOST_ENDPOINT").unwrap_or("https://cloud.appwrite.io/v1"),
            option_env!("INKPOST_PROJECT_ID").unwrap_or(""),
            option_env!("INKPOST_DATABASE_ID").unwrap_or(""),
            option_env!("INKPOST_COLLECTION_ID").unwrap_or(""),
            option_env!("INKPOST_BUCKET_ID").unwrap_or(""),
        )
    }

    pub fn new(
        endpoint: &str,
        project_id: &str,
        database_id: &str,
        collection_id: &str,
        bucket_id: &str,
    ) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_owned(),
            project_id: project_id.to_owned(),
            database_id: database_id.to_owned(),
            collection_id: collection_id.to_owned(),
            bucket_id: bucket_id.to_owned(),
        }
    }

    /// `GET`/`POST /account` — account creation and current-account lookup.
    pub fn account_url(&self) -> String {
        format!("{}/account", self.endpoint)
    }

    /// `POST /account/sessions/email` — email + password login.
    pub fn email_session_url(&self) -> String {
        format!("{}/account/sessions/email", self.endpoint)
    }

    /// `DELETE /account/sessions` — tear down every session for the account.
    pub fn sessions_url(&self) -> String {
        format!("{}/account/sessions", self.endpoint)
    }

    /// Collection-level documents URL (create, list).
    pub fn documents_url(&self) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.endpoint, self.database_id, self.collection_id
        )
    }

    /// Single-document URL keyed by slug (get, patch, delete).
    pub fn document_url(&self, slug: &str) -> String {
        format!("{}/{}", self.documents_url(), slug)
    }

    /// Bucket-level files URL (upload).
    pub fn files_url(&self) -> String {
        format!("{}/storage/buckets/{}/files", self.endpoint, self.bucket_id)
    }

    /// Single-file URL (delete).
    pub fn file_url(&self, file_id: &str) -> String {
        format!("{}/{}", self.files_url(), file_id)
    }

    /// Public preview URL for an uploaded image.
    ///
    /// Used directly in `<img src=...>`, so the project id rides along as a
    /// query parameter instead of a header.
    pub fn file_preview_url(&self, file_id: &str) -> String {
        format!(
            "{}/{}/preview?project={}",
            self.files_url(),
            file_id,
            self.project_id
        )
    }
}
