//! Editable state for the rich-text composer.
//!
//! The editor accumulates finished blocks plus one open block: its
//! committed runs (`open`), the text currently being typed (`pending`),
//! and the marks that apply to it. Toggling a mark mid-run splits the
//! run so earlier text keeps its original styling.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use super::document::{Block, BlockKind, Document, Marks, Span};

/// In-progress rich-text content being composed in the post form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditorState {
    /// Blocks ended with Enter, in order.
    pub blocks: Vec<Block>,
    /// Committed runs of the block being edited.
    pub open: Vec<Span>,
    /// Text typed since the last mark change, not yet a span.
    pub pending: String,
    /// Marks applied to `pending` and to text typed next.
    pub marks: Marks,
    /// Block style of the block being edited.
    pub block_kind: BlockKind,
}

impl EditorState {
    /// Replace the text of the current run (the composer input is bound
    /// to `pending`, so every keystroke lands here).
    pub fn set_pending(&mut self, text: String) {
        self.pending = text;
    }

    /// Toggle bold for subsequently typed text. Flushes the current run
    /// first so already-typed text keeps its styling.
    pub fn toggle_bold(&mut self) {
        self.flush_pending();
        self.marks.bold = !self.marks.bold;
    }

    /// Toggle italic for subsequently typed text.
    pub fn toggle_italic(&mut self) {
        self.flush_pending();
        self.marks.italic = !self.marks.italic;
    }

    /// Change the block style of the block being edited.
    pub fn set_block_kind(&mut self, kind: BlockKind) {
        self.block_kind = kind;
    }

    /// End the current block (Enter). The next typed text starts a new
    /// block of the same kind.
    pub fn end_block(&mut self) {
        self.flush_pending();
        let spans = std::mem::take(&mut self.open);
        self.blocks.push(Block {
            kind: self.block_kind,
            spans,
        });
    }

    /// Snapshot the full document, including the open block.
    pub fn document(&self) -> Document {
        let mut doc = Document {
            blocks: self.blocks.clone(),
        };
        let mut spans = self.open.clone();
        if !self.pending.is_empty() {
            spans.push(Span {
                text: self.pending.clone(),
                marks: self.marks,
            });
        }
        if !spans.is_empty() {
            doc.blocks.push(Block {
                kind: self.block_kind,
                spans,
            });
        }
        doc
    }

    /// True if nothing has been typed anywhere.
    pub fn is_empty(&self) -> bool {
        self.document().is_empty()
    }

    fn flush_pending(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.pending);
        self.open.push(Span {
            text,
            marks: self.marks,
        });
    }
}
