//! Root application component and SSR shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::net::api::HttpPostStore;
use crate::pages::board::BoardPage;
use crate::state::board::PostBoardState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the board state signal and the HTTP store client via context
/// so the page and its components share one injected store.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(PostBoardState::default()));
    provide_context(HttpPostStore);

    view! {
        <Stylesheet id="leptos" href="/pkg/postboard.css"/>
        <Title text="Crypto Blog"/>
        <BoardPage/>
    }
}
