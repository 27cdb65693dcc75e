//! # postboard
//!
//! Leptos + WASM single-page client for a post-publishing board.
//! Lists published posts and submits new ones (title, author, rich-text
//! body) to the post store behind `/api/posts`.
//!
//! This crate contains pages, components, application state, the rich-text
//! document model, and the HTTP store client. The store owns persistence
//! and id assignment; this client is a straight mirror of its state at the
//! last fetch.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod richtext;
pub mod state;

/// WASM entry point: hydrate the server-rendered page in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
