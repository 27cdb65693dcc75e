//! HTTP client for the post store.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against
//! `/api/posts`. Server-side (SSR): inert stubs returning an error, since
//! the store is only reachable from the browser.

#![allow(clippy::unused_async)]

use super::store::{PostStore, StoreError};
use super::types::{CreateResult, Post};

/// Store client talking to the post API over HTTP.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpPostStore;

impl PostStore for HttpPostStore {
    async fn list_posts(&self) -> Result<Vec<Post>, StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get("/api/posts")
                .send()
                .await
                .map_err(|e| StoreError::Request(e.to_string()))?;
            if !resp.ok() {
                return Err(StoreError::Status(resp.status()));
            }
            resp.json::<Vec<Post>>()
                .await
                .map_err(|e| StoreError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(StoreError::Request("not available on server".to_owned()))
        }
    }

    async fn create_post(
        &self,
        title: &str,
        body: &str,
        author: &str,
    ) -> Result<CreateResult, StoreError> {
        #[cfg(feature = "hydrate")]
        {
            #[derive(serde::Serialize)]
            struct CreatePostRequest<'a> {
                title: &'a str,
                body: &'a str,
                author: &'a str,
            }

            let resp = gloo_net::http::Request::post("/api/posts")
                .json(&CreatePostRequest {
                    title,
                    body,
                    author,
                })
                .map_err(|e| StoreError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| StoreError::Request(e.to_string()))?;
            if !resp.ok() {
                return Err(StoreError::Status(resp.status()));
            }
            resp.json::<CreateResult>()
                .await
                .map_err(|e| StoreError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (title, body, author);
            Err(StoreError::Request("not available on server".to_owned()))
        }
    }
}
