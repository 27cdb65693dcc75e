//! Reusable UI components for the post board.

pub mod editor;
pub mod post_card;
pub mod post_form;
