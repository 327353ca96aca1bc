//! Settings screen: dark mode and theme variant selection.

use crate::app::AppState;
use crate::ui::screen_manager::ScreenInteraction;
use crate::ui::widgets;
use eframe::egui;
use egui::{RichText, Stroke};
use qawaid::{resolve, with_opacity, Palette, ThemeVariant};

/// Renders the settings screen
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state (current preferences)
/// * `palette` - Palette resolved for the visible screen
///
/// # Returns
/// `ToggleDarkMode` or `SelectVariant` when the user changes a setting
pub fn render_settings(ui: &mut egui::Ui, state: &AppState, palette: &Palette) -> Option<ScreenInteraction> {
    let mut interaction = None;
    let prefs = state.preferences.state();

    widgets::card(ui, palette, |ui| {
        let mut dark = prefs.is_dark_mode;
        if ui.checkbox(&mut dark, "Dark mode").changed() {
            interaction = Some(ScreenInteraction::ToggleDarkMode);
        }
    });
    ui.add_space(8.0);

    ui.label(RichText::new("Theme").strong());
    for &variant in ThemeVariant::selectable() {
        widgets::card(ui, palette, |ui| {
            ui.horizontal(|ui| {
                if ui.radio(prefs.theme_variant == variant, variant.label()).clicked() {
                    interaction = Some(ScreenInteraction::SelectVariant(variant));
                }
                swatches(ui, &resolve(variant, prefs.is_dark_mode));
            });
        });
        ui.add_space(4.0);
    }

    interaction
}

/// Small colour boxes for every palette entry, with the hex value on hover
fn swatches(ui: &mut egui::Ui, palette: &Palette) {
    for (name, color) in palette.entries() {
        let (rect, response) = ui.allocate_exact_size(egui::vec2(18.0, 18.0), egui::Sense::hover());
        ui.painter().rect(
            rect,
            3.0,
            color.to_color32(),
            Stroke::new(1.0, with_opacity(palette.border, 0.8).to_color32()),
            egui::StrokeKind::Inside,
        );
        response.on_hover_text(format!("{name}: {color}"));
    }
}
