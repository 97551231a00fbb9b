use super::*;

fn config() -> BackendConfig {
    BackendConfig::new("https://backend.example/v1", "proj", "db", "posts", "covers")
}

#[test]
fn endpoint_trailing_slash_is_trimmed() {
    let config = BackendConfig::new("https://backend.example/v1/", "p", "d", "c", "b");
    assert_eq!(config.endpoint, "https://backend.example/v1");
    assert_eq!(config.account_url(), "https://backend.example/v1/account");
}

#[test]
fn account_and_session_urls() {
    let config = config();
    assert_eq!(config.account_url(), "https://backend.example/v1/account");
    assert_eq!(
        config.email_session_url(),
        "https://backend.example/v1/account/sessions/email"
    );
    assert_eq!(
        config.sessions_url(),
        "https://backend.example/v1/account/sessions"
    );
}

#[test]
fn document_urls_embed_database_and_collection() {
    let config = config();
    assert_eq!(
        config.documents_url(),
        "https://backend.example/v1/databases/db/collections/posts/documents"
    );
    assert_eq!(
        config.document_url("my-slug"),
        "https://backend.example/v1/databases/db/collections/posts/documents/my-slug"
    );
}

#[test]
fn file_urls_embed_bucket() {
    let config = config();
    assert_eq!(
        config.files_url(),
        "https://backend.example/v1/storage/buckets/covers/files"
    );
    assert_eq!(
        config.file_url("f1"),
        "https://backend.example/v1/storage/buckets/covers/files/f1"
    );
}

#[test]
fn preview_url_carries_project_query() {
    let config = config();
    assert_eq!(
        config.file_preview_url("f1"),
        "https://backend.example/v1/storage/buckets/covers/files/f1/preview?project=proj"
    );
}
