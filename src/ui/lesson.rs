//! Lesson screen: renders every block of a lesson.

use crate::ui::widgets;
use eframe::egui;
use egui::RichText;
use qawaid::content::{self, Block, Diagram};
use qawaid::{LessonId, Palette};

/// Renders every block of a lesson in order
///
/// Malformed diagram outlines are logged and shown as an error line in
/// place of the diagram.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `lesson_id` - Lesson to render
/// * `palette` - Palette resolved for the visible screen
pub fn render_lesson(ui: &mut egui::Ui, lesson_id: LessonId, palette: &Palette) {
    let Some(lesson) = content::find_lesson(lesson_id) else {
        ui.label(format!("Lesson {} not found", lesson_id.number));
        return;
    };

    widgets::trilingual(ui, &lesson.title, palette);
    ui.separator();

    for (index, block) in lesson.blocks.iter().enumerate() {
        widgets::card(ui, palette, |ui| match block {
            Block::Paragraph(text) => widgets::trilingual(ui, text, palette),
            Block::Table { caption, headers, rows } => {
                widgets::table(ui, (lesson_id, index), caption, headers, rows, palette);
            }
            Block::Diagram { caption, outline } => {
                ui.label(RichText::new(*caption).strong());
                match Diagram::from_outline(outline.as_slice()) {
                    Ok(diagram) => widgets::diagram(ui, &diagram, palette),
                    Err(e) => {
                        log::error!("Bad diagram in {:?}: {}", lesson_id, e);
                        ui.colored_label(palette.accent.to_color32(), e.to_string());
                    }
                }
            }
        });
        ui.add_space(8.0);
    }
}
