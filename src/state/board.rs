#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use super::draft::DraftPost;
use crate::net::types::Post;

/// State of the post board: the mirrored post list, the loading flag,
/// and the creation form.
///
/// `posts` holds the store's order as returned; it is never re-sorted
/// and never mutated locally. The list is authoritative only after a
/// successful round trip, so every transition that touches it replaces
/// it wholesale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostBoardState {
    pub posts: Vec<Post>,
    pub loading: bool,
    pub form_visible: bool,
    pub draft: DraftPost,
}

impl Default for PostBoardState {
    fn default() -> Self {
        // Loading starts true: the mount-time fetch begins immediately.
        Self {
            posts: Vec::new(),
            loading: true,
            form_visible: false,
            draft: DraftPost::default(),
        }
    }
}

impl PostBoardState {
    /// A refresh round trip has started.
    pub fn begin_refresh(&mut self) {
        self.loading = true;
    }

    /// The store answered: mirror its list as-is.
    pub fn refresh_succeeded(&mut self, posts: Vec<Post>) {
        self.posts = posts;
        self.loading = false;
    }

    /// The fetch failed. Keep whatever list we already had
    /// (stale-but-available) and stop the loading indicator.
    pub fn refresh_failed(&mut self) {
        self.loading = false;
    }

    /// Show or hide the creation form. The draft survives hiding, so
    /// reopening the form resumes the user's input.
    pub fn toggle_form(&mut self) {
        self.form_visible = !self.form_visible;
    }

    /// The store accepted the post: hide the form and start a fresh
    /// draft.
    pub fn submit_succeeded(&mut self) {
        self.form_visible = false;
        self.draft = DraftPost::default();
    }

    /// The submit failed on either channel. Nothing changes: the form
    /// stays open and the draft keeps the user's input for a retry.
    #[allow(clippy::unused_self)]
    pub fn submit_failed(&mut self) {}
}
