use super::*;

#[test]
fn profile_deserializes_dollar_id() {
    let json = r#"{"$id":"u1","name":"Alice","email":"a@b.com"}"#;
    let profile: Profile = serde_json::from_str(json).unwrap();
    assert_eq!(profile.id, "u1");
    assert_eq!(profile.name, "Alice");
    assert_eq!(profile.email, "a@b.com");
}

#[test]
fn session_handle_deserializes_user_id() {
    let json = r#"{"$id":"s1","userId":"u1"}"#;
    let session: SessionHandle = serde_json::from_str(json).unwrap();
    assert_eq!(session.id, "s1");
    assert_eq!(session.user_id, "u1");
}

#[test]
fn post_document_maps_camel_case_fields() {
    let json = r##"{
        "$id": "first-post",
        "title": "First Post",
        "content": "# Hello",
        "featuredImage": "f1",
        "status": "active",
        "userId": "u1"
    }"##;
    let post: PostDocument = serde_json::from_str(json).unwrap();
    assert_eq!(post.slug, "first-post");
    assert_eq!(post.featured_image, "f1");
    assert_eq!(post.status, PostStatus::Active);
    assert_eq!(post.user_id, "u1");
}

#[test]
fn post_status_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&PostStatus::Active).unwrap(), "\"active\"");
    assert_eq!(
        serde_json::to_string(&PostStatus::Inactive).unwrap(),
        "\"inactive\""
    );
    assert_eq!(PostStatus::Active.as_str(), "active");
    assert_eq!(PostStatus::Inactive.as_str(), "inactive");
}

#[test]
fn document_page_deserializes_list_shape() {
    let json = r#"{
        "total": 1,
        "documents": [{
            "$id": "only",
            "title": "Only",
            "content": "body",
            "featuredImage": "f9",
            "status": "inactive",
            "userId": "u2"
        }]
    }"#;
    let page: DocumentPage = serde_json::from_str(json).unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.documents.len(), 1);
    assert_eq!(page.documents[0].slug, "only");
    assert_eq!(page.documents[0].status, PostStatus::Inactive);
}

#[test]
fn stored_file_and_error_body_deserialize() {
    let file: StoredFile = serde_json::from_str(r#"{"$id":"f1"}"#).unwrap();
    assert_eq!(file.id, "f1");

    let error: ErrorBody =
        serde_json::from_str(r#"{"message":"Invalid credentials","code":401}"#).unwrap();
    assert_eq!(error.message, "Invalid credentials");
}
