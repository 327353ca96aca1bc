//! Word frequency screen: counts with running coverage.

use crate::ui::widgets;
use eframe::egui;
use egui::RichText;
use qawaid::content::quran_word_frequency;
use qawaid::Palette;

/// Renders the coverage bar and the per-word table with running percentages
pub fn render_word_frequency(ui: &mut egui::Ui, palette: &Palette) {
    let table = quran_word_frequency();
    let rows = table.cumulative();
    let coverage = table.coverage_percent();

    ui.label(format!("Total words in the Quran: {}", table.total_words));
    ui.add(
        egui::ProgressBar::new((coverage / 100.0) as f32)
            .fill(palette.primary.to_color32())
            .text(format!("These {} words cover {:.1}% of the text", rows.len(), coverage)),
    );
    ui.add_space(8.0);

    widgets::card(ui, palette, |ui| {
        egui::Grid::new("word_frequency_grid")
            .striped(true)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                for header in ["#", "Word", "Urdu", "English", "Count", "%", "Cumulative"] {
                    ui.label(RichText::new(header).strong().color(palette.text_secondary.to_color32()));
                }
                ui.end_row();

                for (i, row) in rows.iter().enumerate() {
                    ui.label((i + 1).to_string());
                    ui.label(RichText::new(row.word.arabic).size(22.0).color(palette.primary.to_color32()));
                    ui.label(row.word.urdu);
                    ui.label(row.word.english);
                    ui.label(row.word.count.to_string());
                    ui.label(format!("{:.2}", row.percent));
                    ui.label(format!("{:.2}", row.cumulative_percent));
                    ui.end_row();
                }
            });
    });
}
