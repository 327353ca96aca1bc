//! Application-level coordination.
//!
//! Turns screen interactions into state changes and drives the splash timer.

use crate::app::AppState;
use crate::ui::screen_manager::ScreenInteraction;
use qawaid::{PreferenceError, ScreenId, ThemeVariant};
use std::time::Instant;

/// Coordinates application-level operations.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Applies one interaction reported by the screen manager.
    pub fn handle_interaction(state: &mut AppState, interaction: ScreenInteraction) {
        match interaction {
            ScreenInteraction::Navigate(screen) => {
                state.navigator.navigate(screen);
                state.status_message = None;
            }
            ScreenInteraction::Back => Self::go_back(state),
            ScreenInteraction::ToggleDarkMode => state.preferences.toggle_dark_mode(),
            ScreenInteraction::SelectVariant(variant) => Self::select_variant(state, variant),
            ScreenInteraction::ToggleLessonPreview(lesson) => {
                state.lessons.toggle(lesson);
            }
        }
    }

    /// Whether a back request would do anything.
    ///
    /// Once the splash has advanced it is never shown again, so the screen
    /// above it acts as the bottom of the stack.
    pub fn can_go_back(state: &AppState) -> bool {
        matches!(state.navigator.previous(), Some(screen) if screen != ScreenId::Splash)
    }

    fn go_back(state: &mut AppState) {
        if Self::can_go_back(state) {
            state.navigator.go_back();
            state.status_message = None;
        }
    }

    fn select_variant(state: &mut AppState, variant: ThemeVariant) {
        match state.preferences.set_theme_variant(variant) {
            Ok(()) => state.status_message = None,
            Err(e @ PreferenceError::InvalidVariant(_)) => {
                log::warn!("{}", e);
                state.status_message = Some(e.to_string());
            }
            Err(e) => log::warn!("Theme change not saved: {}", e),
        }
    }

    /// Advances from the splash screen when its timer fires.
    ///
    /// The timer is cancelled as soon as the splash is no longer visible.
    /// Returns true if the transition happened this call.
    pub fn tick_splash(state: &mut AppState, now: Instant) -> bool {
        if state.navigator.current() != ScreenId::Splash {
            state.splash_timer.cancel();
            return false;
        }
        if state.splash_timer.poll(now) {
            state.navigator.navigate(ScreenId::Home);
            return true;
        }
        false
    }
}
