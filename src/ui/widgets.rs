//! Shared building blocks for lesson screens.

use eframe::egui;
use egui::{Align, Layout, RichText, Stroke};
use qawaid::content::{Diagram, Text};
use qawaid::{with_opacity, Palette};

const ARABIC_SIZE: f32 = 24.0;
const URDU_SIZE: f32 = 18.0;

/// A rounded card filled with the palette's card colour.
pub fn card<R>(ui: &mut egui::Ui, palette: &Palette, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::new()
        .fill(palette.card.to_color32())
        .stroke(Stroke::new(1.0, palette.border.to_color32()))
        .corner_radius(8.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
        .inner
}

/// Arabic and Urdu right-aligned above the English line.
pub fn trilingual(ui: &mut egui::Ui, text: &Text, palette: &Palette) {
    ui.with_layout(Layout::top_down(Align::Max), |ui| {
        ui.label(RichText::new(text.ar).size(ARABIC_SIZE).color(palette.primary.to_color32()));
        ui.label(RichText::new(text.ur).size(URDU_SIZE));
    });
    ui.label(RichText::new(text.en).color(palette.text_secondary.to_color32()));
}

/// A striped grid with a bold header row.
pub fn table(
    ui: &mut egui::Ui,
    id: impl std::hash::Hash,
    caption: &str,
    headers: &[&str],
    rows: &[Vec<&str>],
    palette: &Palette,
) {
    ui.label(RichText::new(caption).size(URDU_SIZE).strong().color(palette.primary.to_color32()));
    egui::Grid::new(id)
        .striped(true)
        .spacing([24.0, 6.0])
        .show(ui, |ui| {
            for header in headers {
                ui.label(RichText::new(*header).strong().color(palette.text_secondary.to_color32()));
            }
            ui.end_row();

            for row in rows {
                for cell in row {
                    ui.label(RichText::new(*cell).size(URDU_SIZE));
                }
                ui.end_row();
            }
        });
}

/// One row of boxes per diagram level, centred, top to bottom.
pub fn diagram(ui: &mut egui::Ui, diagram: &Diagram, palette: &Palette) {
    let box_fill = with_opacity(palette.primary, 0.15).to_color32();
    let box_stroke = Stroke::new(1.5, palette.primary.to_color32());
    let levels = diagram.levels();
    let last = levels.len().saturating_sub(1);

    ui.vertical_centered(|ui| {
        for (depth, level) in levels.iter().enumerate() {
            ui.horizontal_wrapped(|ui| {
                for node in level {
                    egui::Frame::new()
                        .fill(box_fill)
                        .stroke(box_stroke)
                        .corner_radius(6.0)
                        .inner_margin(8.0)
                        .show(ui, |ui| {
                            ui.label(RichText::new(&node.label).size(URDU_SIZE));
                        });
                }
            });
            if depth < last {
                ui.label(RichText::new("↓").color(palette.accent.to_color32()));
            }
        }
    });
}

/// A full-width button styled as a card, used for drill-down lists.
pub fn nav_card(ui: &mut egui::Ui, title: &Text, palette: &Palette) -> bool {
    let button = egui::Button::new(
        RichText::new(format!("{}  ·  {}  ·  {}", title.en, title.ur, title.ar)).size(URDU_SIZE),
    )
    .fill(palette.card.to_color32())
    .stroke(Stroke::new(1.0, palette.border.to_color32()))
    .corner_radius(8.0)
    .min_size(egui::vec2(ui.available_width(), 48.0));
    ui.add(button).clicked()
}
