//! Centralized application state for the Qawaid viewer.
//!
//! Constructed once at startup and handed by reference to the coordinators
//! and screens; nothing here is global.

use crate::state::LessonState;
use qawaid::{KeyValueStorage, Navigator, PreferenceStore, SplashTimer};
use std::time::{Duration, Instant};

/// Main application state composed of focused components.
pub struct AppState {
    /// Dark mode and theme variant, persisted on change
    pub preferences: PreferenceStore,

    /// Screen stack
    pub navigator: Navigator,

    /// Splash auto-advance
    pub splash_timer: SplashTimer,

    /// Expanded lesson previews
    pub lessons: LessonState,

    /// Transient message shown in the header (if any)
    pub status_message: Option<String>,
}

impl AppState {
    /// Creates state on the splash screen with default preferences.
    pub fn new(storage: Box<dyn KeyValueStorage>, splash_delay: Duration, now: Instant) -> Self {
        Self {
            preferences: PreferenceStore::new(storage),
            navigator: Navigator::new(),
            splash_timer: SplashTimer::start(splash_delay, now),
            lessons: LessonState::new(),
            status_message: None,
        }
    }
}
