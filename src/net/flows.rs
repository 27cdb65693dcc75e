//! Async flows between the UI and the post store.
//!
//! Generic over [`PostStore`] so they run against a recording fake in
//! tests. The page components apply the resulting state transitions;
//! nothing here touches signals.

#[cfg(test)]
#[path = "flows_test.rs"]
mod flows_test;

use super::store::{PostStore, StoreError};
use super::types::{CreateResult, Post};
use crate::state::draft::DraftPost;

/// Outcome of submitting a draft, with the store's two failure channels
/// kept distinct.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The store accepted the post and assigned this id.
    Created(u64),
    /// The store rejected the input (validation-level, tagged value).
    Rejected(String),
    /// The request itself failed.
    TransportFailed(StoreError),
}

/// Fetch the current post list from the store.
pub async fn load_posts<S: PostStore>(store: &S) -> Result<Vec<Post>, StoreError> {
    store.list_posts().await
}

/// Serialize the draft's document to HTML and create the post.
///
/// Calls the store exactly once per invocation; retrying is the user's
/// decision, made by resubmitting the form.
pub async fn submit_draft<S: PostStore>(store: &S, draft: &DraftPost) -> SubmitOutcome {
    let body = draft.editor.document().to_html();
    match store.create_post(&draft.title, &body, &draft.author).await {
        Ok(CreateResult::Ok(id)) => SubmitOutcome::Created(id),
        Ok(CreateResult::Err(msg)) => SubmitOutcome::Rejected(msg),
        Err(e) => SubmitOutcome::TransportFailed(e),
    }
}
