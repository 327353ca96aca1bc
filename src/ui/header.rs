//! Header bar rendering
//!
//! Back button, screen title, dark mode toggle and settings shortcut.

use crate::app::{AppState, ApplicationCoordinator};
use crate::ui::screen_manager::ScreenInteraction;
use eframe::egui;
use egui::RichText;
use qawaid::{Palette, ScreenId};

/// Renders the header bar above every screen except the splash
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
/// * `palette` - Palette resolved for the visible screen
///
/// # Returns
/// The interaction triggered by a header control, if any
pub fn render_header(ui: &mut egui::Ui, state: &AppState, palette: &Palette) -> Option<ScreenInteraction> {
    let mut interaction = None;
    let current = state.navigator.current();

    ui.horizontal(|ui| {
        let back = ui.add_enabled(ApplicationCoordinator::can_go_back(state), egui::Button::new("← Back"));
        if back.clicked() {
            interaction = Some(ScreenInteraction::Back);
        }

        ui.separator();
        ui.label(RichText::new(current.title()).strong().size(18.0).color(palette.primary.to_color32()));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if current != ScreenId::Settings && ui.button("⚙ Settings").clicked() {
                interaction = Some(ScreenInteraction::Navigate(ScreenId::Settings));
            }

            let icon = if state.preferences.is_dark_mode() { "☀" } else { "🌙" };
            if ui.button(icon).on_hover_text("Toggle dark mode").clicked() {
                interaction = Some(ScreenInteraction::ToggleDarkMode);
            }
        });
    });

    if let Some(message) = &state.status_message {
        ui.colored_label(palette.accent.to_color32(), message);
    }

    interaction
}
