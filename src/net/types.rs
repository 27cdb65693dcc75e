//! Wire types shared with the post store.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// A published post as returned by the store.
///
/// `body` is HTML produced by the composer at submit time; the store is
/// the trusted source and the card renders it verbatim. `timestamp` is
/// assigned by the store's clock and is part of the entity contract even
/// though this view does not render it.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
    pub author: String,
    pub timestamp: u64,
}

/// The store's tagged create response: the new post id, or a
/// validation-level rejection message.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CreateResult {
    #[serde(rename = "ok")]
    Ok(u64),
    #[serde(rename = "err")]
    Err(String),
}
