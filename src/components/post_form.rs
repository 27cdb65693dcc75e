//! Creation form: title and author inputs, the rich-text editor, and
//! the submit button.

use leptos::prelude::*;

use crate::components::editor::RichTextEditor;
use crate::state::board::PostBoardState;

/// The new-post form. Submission is delegated to the page via
/// `on_submit`; the button stays disabled until title and author are
/// present, mirroring required-field inputs.
#[component]
pub fn PostForm(on_submit: Callback<()>) -> impl IntoView {
    let state = expect_context::<RwSignal<PostBoardState>>();

    let can_submit = move || state.get().draft.is_submittable();

    view! {
        <form
            class="post-form"
            on:submit=move |ev| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <input
                class="post-form__input"
                type="text"
                placeholder="Title"
                required
                prop:value=move || state.get().draft.title
                on:input=move |ev| {
                    state.update(|s| s.draft.title = event_target_value(&ev));
                }
            />
            <input
                class="post-form__input"
                type="text"
                placeholder="Author"
                required
                prop:value=move || state.get().draft.author
                on:input=move |ev| {
                    state.update(|s| s.draft.author = event_target_value(&ev));
                }
            />
            <RichTextEditor/>
            <button class="btn btn--primary post-form__submit" type="submit" disabled=move || !can_submit()>
                "Submit"
            </button>
        </form>
    }
}
