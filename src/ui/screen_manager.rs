//! Screen orchestration.
//!
//! Renders the header and the screen on top of the navigation stack, and
//! reports user interactions for the application coordinator to apply.

use crate::app::AppState;
use crate::ui::{header, home, lesson, section, settings, splash, word_frequency};
use eframe::egui;
use qawaid::{LessonId, Palette, ScreenId, ThemeVariant};

/// Result of screen interactions that need to be handled by the application coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenInteraction {
    /// Push a screen
    Navigate(ScreenId),
    /// Pop the current screen
    Back,
    ToggleDarkMode,
    SelectVariant(ThemeVariant),
    /// Expand or collapse a lesson preview on a section screen
    ToggleLessonPreview(LessonId),
}

/// Renders the visible screen.
pub struct ScreenManager;

impl ScreenManager {
    /// Renders the visible screen and returns the interaction it produced
    ///
    /// The splash screen is drawn alone; every other screen gets the header
    /// panel and a scroll area keyed by screen so each keeps its own offset.
    /// Escape is reported as `Back` when nothing else was clicked.
    ///
    /// # Arguments
    /// * `ctx` - The egui context
    /// * `state` - Reference to application state
    /// * `palette` - Palette resolved for the visible screen
    pub fn render(ctx: &egui::Context, state: &AppState, palette: &Palette) -> Option<ScreenInteraction> {
        let current = state.navigator.current();

        if current == ScreenId::Splash {
            egui::CentralPanel::default().show(ctx, |ui| splash::render_splash(ui, palette));
            return None;
        }

        let mut interaction = None;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            interaction = header::render_header(ui, state, palette);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt(("screen_scroll", current))
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let screen_interaction = match current {
                        ScreenId::Splash => None,
                        ScreenId::Home => home::render_home(ui, palette),
                        ScreenId::Settings => settings::render_settings(ui, state, palette),
                        ScreenId::Section(id) => section::render_section(ui, state, id, palette),
                        ScreenId::Lesson(id) => {
                            lesson::render_lesson(ui, id, palette);
                            None
                        }
                        ScreenId::WordFrequency => {
                            word_frequency::render_word_frequency(ui, palette);
                            None
                        }
                    };
                    if screen_interaction.is_some() {
                        interaction = screen_interaction;
                    }
                });
        });

        // Escape mirrors the back button
        if interaction.is_none() && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            interaction = Some(ScreenInteraction::Back);
        }

        interaction
    }
}
