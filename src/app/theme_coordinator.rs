//! Theme resolution and application.
//!
//! Picks the palette for the visible screen and applies it to the egui
//! context every frame.

use crate::app::AppState;
use crate::presentation::visuals;
use qawaid::{resolve_fixed, Palette, ScreenId, SectionId};

/// Coordinates theme resolution for the current screen.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// The section that owns `screen`, if any.
    fn section_of(screen: ScreenId) -> Option<SectionId> {
        match screen {
            ScreenId::Section(section) => Some(section),
            ScreenId::Lesson(lesson) => Some(lesson.section),
            ScreenId::Splash | ScreenId::Home | ScreenId::Settings | ScreenId::WordFrequency => None,
        }
    }

    /// Palette for the visible screen: the section's own palette where it has
    /// one, otherwise the user's variant.
    pub fn current_palette(state: &AppState) -> Palette {
        let dark = state.preferences.is_dark_mode();
        match Self::section_of(state.navigator.current()).and_then(SectionId::fixed_palette) {
            Some(fixed) => resolve_fixed(fixed, dark),
            None => state.preferences.palette(),
        }
    }

    /// Applies `palette` to the egui context.
    ///
    /// Called every frame so preference and screen changes show immediately.
    pub fn apply(ctx: &egui::Context, palette: &Palette, is_dark_mode: bool) {
        ctx.set_visuals(visuals::build_visuals(palette, is_dark_mode));
    }
}
