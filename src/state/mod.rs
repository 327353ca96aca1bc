//! UI-only state for the Qawaid viewer.
//!
//! Preferences and navigation live in the library; this module holds the
//! transient per-screen toggles that are not worth persisting.

mod lesson_state;

pub use lesson_state::LessonState;
