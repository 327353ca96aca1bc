//! Splash screen shown while startup loads run.

use eframe::egui;
use egui::RichText;
use qawaid::Palette;

/// Renders the centred title and a spinner
pub fn render_splash(ui: &mut egui::Ui, palette: &Palette) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.3);
        ui.label(RichText::new("قواعد القرآن").size(48.0).color(palette.primary.to_color32()));
        ui.label(RichText::new("قرآنی عربی کے قواعد").size(24.0));
        ui.label(RichText::new("Quranic Arabic Grammar").size(18.0).color(palette.text_secondary.to_color32()));
        ui.add_space(24.0);
        ui.spinner();
    });
}
