//! The post store trait and its transport-level error type.

use std::fmt;

use super::types::{CreateResult, Post};

/// The external service of record for posts.
///
/// Passed to the flows explicitly so they stay testable with a fake;
/// the UI injects [`super::api::HttpPostStore`] via context.
///
/// Validation failures travel inside [`CreateResult`]; [`StoreError`]
/// covers the transport channel (request failed, bad status, bad
/// payload). Callers must handle both.
#[allow(async_fn_in_trait)]
pub trait PostStore {
    async fn list_posts(&self) -> Result<Vec<Post>, StoreError>;

    async fn create_post(
        &self,
        title: &str,
        body: &str,
        author: &str,
    ) -> Result<CreateResult, StoreError>;
}

/// Transport-level failure talking to the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// The request could not be sent or the connection failed.
    Request(String),
    /// The store answered with a non-success HTTP status.
    Status(u16),
    /// The response body could not be decoded.
    Decode(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request(msg) => write!(f, "request failed: {msg}"),
            Self::Status(code) => write!(f, "store returned status {code}"),
            Self::Decode(msg) => write!(f, "bad store response: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}
