#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use crate::richtext::EditorState;

/// The unsaved post being composed in the form.
///
/// Form-scoped and transient: reset only after a successful submit,
/// never persisted. Hiding the form keeps the draft so reopening
/// resumes prior input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DraftPost {
    pub title: String,
    pub author: String,
    pub editor: EditorState,
}

impl DraftPost {
    /// Required-field presence: title and author must be non-blank.
    /// The store performs any further validation.
    pub fn is_submittable(&self) -> bool {
        !self.title.trim().is_empty() && !self.author.trim().is_empty()
    }
}
