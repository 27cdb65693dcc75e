//! Rich-text document model for the post composer.
//!
//! DESIGN
//! ======
//! The draft body is held as a structured document (blocks of styled text
//! runs), not as an HTML string. HTML is produced exactly once, at submit
//! time, by [`document::Document::to_html`]. The editor component drives
//! [`editor::EditorState`], an editable wrapper around the document.

pub mod document;
pub mod editor;

pub use document::{Block, BlockKind, Document, Marks, Span};
pub use editor::EditorState;
