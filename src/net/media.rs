//! Cover-image storage: upload, delete, preview URLs.
//!
//! Uploads go as multipart form data with a generated UUID file id; the
//! backend returns the stored handle. Preview URLs are plain links the
//! browser fetches itself, so building one has no network cost.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "media_test.rs"]
mod media_test;

use super::backend::BackendConfig;
#[cfg(feature = "hydrate")]
use super::types::StoredFile;

/// Generate the identifier for a new upload.
#[cfg(any(test, feature = "hydrate"))]
fn new_file_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Upload a browser [`File`](web_sys::File) to the bucket.
///
/// # Errors
///
/// Returns a message if the form cannot be built or the backend rejects the
/// upload.
#[cfg(feature = "hydrate")]
pub async fn upload_file(config: &BackendConfig, file: &web_sys::File) -> Result<StoredFile, String> {
    let form = web_sys::FormData::new().map_err(|_| "failed to build form data".to_owned())?;
    form.append_with_str("fileId", &new_file_id())
        .map_err(|_| "failed to build form data".to_owned())?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| "failed to build form data".to_owned())?;

    let resp = gloo_net::http::Request::post(&config.files_url())
        .header(super::backend::PROJECT_HEADER, &config.project_id)
        .credentials(web_sys::RequestCredentials::Include)
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("upload failed: {}", resp.status()));
    }
    resp.json().await.map_err(|e| e.to_string())
}

/// Delete an uploaded file. Returns whether the backend confirmed; failures
/// are logged.
pub async fn delete_file(config: &BackendConfig, file_id: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        match gloo_net::http::Request::delete(&config.file_url(file_id))
            .header(super::backend::PROJECT_HEADER, &config.project_id)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
        {
            Ok(resp) if resp.ok() => true,
            Ok(resp) => {
                log::warn!("delete file {file_id} failed: {}", resp.status());
                false
            }
            Err(e) => {
                log::warn!("delete file {file_id} failed: {e}");
                false
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, file_id);
        false
    }
}

/// Public preview URL for a stored image.
pub fn preview_url(config: &BackendConfig, file_id: &str) -> String {
    config.file_preview_url(file_id)
}
