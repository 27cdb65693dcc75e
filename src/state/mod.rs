//! Client-side state.
//!
//! DESIGN
//! ======
//! All board behavior lives in pure transitions on plain structs; the
//! page component wraps them in an `RwSignal` and applies them around
//! its await points. The transitions, not the Leptos wiring, are the
//! tested surface.

pub mod board;
pub mod draft;
