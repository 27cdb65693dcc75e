use super::*;

#[test]
fn post_list_decodes_from_store_json() {
    let json = r#"[
        {"id": 1, "title": "First", "body": "<p>hi</p>", "author": "Alice", "timestamp": 1700000001},
        {"id": 2, "title": "Second", "body": "<p>yo</p>", "author": "Bob", "timestamp": 1700000002}
    ]"#;
    let posts: Vec<Post> = serde_json::from_str(json).unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, 1);
    assert_eq!(posts[1].author, "Bob");
}

#[test]
fn create_result_decodes_ok_variant() {
    let r: CreateResult = serde_json::from_str(r#"{"ok": 5}"#).unwrap();
    assert_eq!(r, CreateResult::Ok(5));
}

#[test]
fn create_result_decodes_err_variant() {
    let r: CreateResult = serde_json::from_str(r#"{"err": "title required"}"#).unwrap();
    assert_eq!(r, CreateResult::Err("title required".to_owned()));
}

#[test]
fn create_result_round_trips() {
    let r = CreateResult::Ok(42);
    let json = serde_json::to_string(&r).unwrap();
    assert_eq!(json, r#"{"ok":42}"#);
}
