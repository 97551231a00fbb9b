use super::*;

#[test]
fn new_post_payload_uses_slug_as_document_id() {
    let post = NewPost {
        slug: "first-post".to_owned(),
        title: "First Post".to_owned(),
        content: "# Hello".to_owned(),
        featured_image: "f1".to_owned(),
        status: PostStatus::Active,
        user_id: "u1".to_owned(),
    };
    let payload = new_post_payload(&post);
    assert_eq!(payload["documentId"], "first-post");
    assert_eq!(payload["data"]["title"], "First Post");
    assert_eq!(payload["data"]["featuredImage"], "f1");
    assert_eq!(payload["data"]["status"], "active");
    assert_eq!(payload["data"]["userId"], "u1");
}

#[test]
fn patch_payload_omits_image_when_unchanged() {
    let patch = PostPatch {
        title: "Edited".to_owned(),
        content: "body".to_owned(),
        featured_image: None,
        status: PostStatus::Inactive,
    };
    let payload = patch_payload(&patch);
    assert_eq!(payload["data"]["title"], "Edited");
    assert_eq!(payload["data"]["status"], "inactive");
    assert!(payload["data"].get("featuredImage").is_none());
}

#[test]
fn patch_payload_includes_replacement_image() {
    let patch = PostPatch {
        title: "Edited".to_owned(),
        content: "body".to_owned(),
        featured_image: Some("f2".to_owned()),
        status: PostStatus::Active,
    };
    let payload = patch_payload(&patch);
    assert_eq!(payload["data"]["featuredImage"], "f2");
}

#[test]
fn active_status_query_shape() {
    assert_eq!(active_status_query(), r#"equal("status", ["active"])"#);
}
