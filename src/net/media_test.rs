use super::*;

#[test]
fn new_file_ids_are_unique_uuids() {
    let first = new_file_id();
    let second = new_file_id();
    assert_ne!(first, second);
    assert!(uuid::Uuid::parse_str(&first).is_ok());
}

#[test]
fn preview_url_delegates_to_config() {
    let config = BackendConfig::new("https://backend.example/v1", "proj", "db", "posts", "covers");
    assert_eq!(preview_url(&config, "f1"), config.file_preview_url("f1"));
}
