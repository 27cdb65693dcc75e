use super::*;
use crate::net::types::Post;
use crate::state::draft::DraftPost;

fn post(id: u64, title: &str) -> Post {
    Post {
        id,
        title: title.to_owned(),
        body: format!("<p>{title}</p>"),
        author: "Alice".to_owned(),
        timestamp: 1_700_000_000 + id,
    }
}

#[test]
fn defaults_start_loading_with_no_posts() {
    let s = PostBoardState::default();
    assert!(s.posts.is_empty());
    assert!(s.loading);
    assert!(!s.form_visible);
    assert_eq!(s.draft, DraftPost::default());
}

#[test]
fn successful_refresh_mirrors_the_store_order() {
    let mut s = PostBoardState::default();
    s.begin_refresh();
    s.refresh_succeeded(vec![post(3, "c"), post(1, "a"), post(2, "b")]);

    assert!(!s.loading);
    let ids: Vec<u64> = s.posts.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[test]
fn failed_refresh_clears_loading_and_keeps_prior_posts() {
    let mut s = PostBoardState::default();

    // First load fails: list stays empty.
    s.begin_refresh();
    s.refresh_failed();
    assert!(!s.loading);
    assert!(s.posts.is_empty());

    // A later failure keeps the stale list visible.
    s.refresh_succeeded(vec![post(1, "a")]);
    s.begin_refresh();
    assert!(s.loading);
    s.refresh_failed();
    assert!(!s.loading);
    assert_eq!(s.posts.len(), 1);
}

#[test]
fn repeated_refresh_with_same_result_is_idempotent() {
    let mut s = PostBoardState::default();
    s.begin_refresh();
    s.refresh_succeeded(vec![post(1, "a"), post(2, "b")]);
    let first = s.posts.clone();

    s.begin_refresh();
    s.refresh_succeeded(vec![post(1, "a"), post(2, "b")]);
    assert_eq!(s.posts, first);
}

#[test]
fn toggle_form_flips_visibility_and_keeps_the_draft() {
    let mut s = PostBoardState::default();
    s.draft.title = "Hello".to_owned();

    s.toggle_form();
    assert!(s.form_visible);

    s.toggle_form();
    assert!(!s.form_visible);
    assert_eq!(s.draft.title, "Hello");

    // Reopening resumes the prior input.
    s.toggle_form();
    assert_eq!(s.draft.title, "Hello");
}

#[test]
fn submit_succeeded_hides_form_and_resets_draft() {
    let mut s = PostBoardState::default();
    s.toggle_form();
    s.draft.title = "Hello".to_owned();
    s.draft.author = "Alice".to_owned();
    s.draft.editor.set_pending("World".to_owned());

    s.submit_succeeded();
    assert!(!s.form_visible);
    assert_eq!(s.draft, DraftPost::default());
}

#[test]
fn submit_failed_leaves_form_and_draft_intact() {
    let mut s = PostBoardState::default();
    s.toggle_form();
    s.draft.title = "Hello".to_owned();
    s.draft.author = "Alice".to_owned();
    s.draft.editor.set_pending("World".to_owned());
    let before = s.clone();

    s.submit_failed();
    assert_eq!(s, before);
}
