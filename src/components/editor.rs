//! Rich-text composer: mark toolbar, block selector, live preview, and
//! the text entry driving [`crate::richtext::EditorState`].

use leptos::prelude::*;

use crate::richtext::BlockKind;
use crate::state::board::PostBoardState;

fn mark_class(active: bool) -> &'static str {
    if active {
        "editor__mark editor__mark--active"
    } else {
        "editor__mark"
    }
}

fn kind_value(kind: BlockKind) -> &'static str {
    match kind {
        BlockKind::Paragraph => "p",
        BlockKind::Heading => "h",
        BlockKind::Bullet => "ul",
    }
}

fn kind_from_value(value: &str) -> BlockKind {
    match value {
        "h" => BlockKind::Heading,
        "ul" => BlockKind::Bullet,
        _ => BlockKind::Paragraph,
    }
}

/// The editor widget for the draft body.
///
/// Typing edits the current run; Enter ends the block. Toggling a mark
/// applies to text typed afterwards. The preview shows the document as
/// it will be serialized at submit time.
#[component]
pub fn RichTextEditor() -> impl IntoView {
    let state = expect_context::<RwSignal<PostBoardState>>();

    let editor = move || state.get().draft.editor;

    view! {
        <div class="editor">
            <div class="editor__toolbar">
                <button
                    type="button"
                    class=move || mark_class(editor().marks.bold)
                    on:click=move |_| state.update(|s| s.draft.editor.toggle_bold())
                >
                    <strong>"B"</strong>
                </button>
                <button
                    type="button"
                    class=move || mark_class(editor().marks.italic)
                    on:click=move |_| state.update(|s| s.draft.editor.toggle_italic())
                >
                    <em>"I"</em>
                </button>
                <select
                    class="editor__kind"
                    prop:value=move || kind_value(editor().block_kind)
                    on:change=move |ev| {
                        let kind = kind_from_value(&event_target_value(&ev));
                        state.update(|s| s.draft.editor.set_block_kind(kind));
                    }
                >
                    <option value="p">"Paragraph"</option>
                    <option value="h">"Heading"</option>
                    <option value="ul">"Bullet"</option>
                </select>
            </div>

            <div class="editor__preview" inner_html=move || editor().document().to_html()></div>

            <input
                class="editor__input"
                type="text"
                placeholder="Write your post..."
                prop:value=move || editor().pending
                on:input=move |ev| {
                    state.update(|s| s.draft.editor.set_pending(event_target_value(&ev)));
                }
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        state.update(|s| s.draft.editor.end_block());
                    }
                }
            />
        </div>
    }
}
