//! The post board page: post list, loading indicator, and creation form.

use leptos::prelude::*;

use crate::components::post_card::PostCard;
use crate::components::post_form::PostForm;
use crate::net::api::HttpPostStore;
use crate::net::flows::{self, SubmitOutcome};
use crate::state::board::PostBoardState;

/// Post board page — fetches the list on mount, shows posts in store
/// order, and toggles the creation form from a floating button.
///
/// Every store failure is logged and otherwise swallowed: a failed fetch
/// leaves the stale list visible, a failed submit leaves the form open
/// with the draft intact so the user can resubmit.
#[component]
pub fn BoardPage() -> impl IntoView {
    let state = expect_context::<RwSignal<PostBoardState>>();
    let store = expect_context::<HttpPostStore>();

    let refresh = move || {
        state.update(PostBoardState::begin_refresh);
        leptos::task::spawn_local(async move {
            match flows::load_posts(&store).await {
                Ok(posts) => state.update(|s| s.refresh_succeeded(posts)),
                Err(e) => {
                    log::error!("failed to fetch posts: {e}");
                    state.update(PostBoardState::refresh_failed);
                }
            }
        });
    };

    // Fetch on mount. Effects only run in the browser.
    Effect::new(move || refresh());

    let on_submit = Callback::new(move |()| {
        let draft = state.get_untracked().draft;
        if !draft.is_submittable() {
            return;
        }
        leptos::task::spawn_local(async move {
            match flows::submit_draft(&store, &draft).await {
                SubmitOutcome::Created(id) => {
                    log::debug!("created post {id}");
                    state.update(PostBoardState::submit_succeeded);
                    refresh();
                }
                SubmitOutcome::Rejected(msg) => {
                    log::error!("store rejected post: {msg}");
                    state.update(PostBoardState::submit_failed);
                }
                SubmitOutcome::TransportFailed(e) => {
                    log::error!("failed to create post: {e}");
                    state.update(PostBoardState::submit_failed);
                }
            }
        });
    });

    view! {
        <div class="board-page">
            <header class="board-page__bar">
                <h1>"Crypto Blog"</h1>
            </header>

            <main class="board-page__content">
                {move || {
                    let s = state.get();
                    if s.loading {
                        return view! {
                            <div class="board-page__spinner" aria-label="Loading posts"></div>
                        }
                            .into_any();
                    }

                    if s.posts.is_empty() {
                        return view! {
                            <div class="board-page__empty">"No posts yet"</div>
                        }
                            .into_any();
                    }

                    view! {
                        <div class="board-page__posts">
                            {s
                                .posts
                                .into_iter()
                                .map(|post| view! { <PostCard post=post/> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }}

                <Show when=move || state.get().form_visible>
                    <PostForm on_submit=on_submit/>
                </Show>

                <button
                    class="board-page__fab"
                    aria-label="New post"
                    on:click=move |_| state.update(PostBoardState::toggle_form)
                >
                    "+"
                </button>
            </main>
        </div>
    }
}
