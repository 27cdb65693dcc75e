//! Card for a single published post.

use leptos::prelude::*;

use crate::net::types::Post;

/// A card showing a post's title, author line, and rendered body.
///
/// The body is HTML the store returned. The store is the trusted source,
/// so it is injected verbatim.
#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    view! {
        <article class="post-card">
            <h2 class="post-card__title">{post.title}</h2>
            <p class="post-card__author">"By " {post.author}</p>
            <div class="post-card__body" inner_html=post.body></div>
        </article>
    }
}
