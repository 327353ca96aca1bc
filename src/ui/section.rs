//! Section screen: lesson list with expandable previews.

use crate::app::AppState;
use crate::ui::screen_manager::ScreenInteraction;
use crate::ui::widgets;
use eframe::egui;
use egui::RichText;
use qawaid::content::{self, Block};
use qawaid::{Palette, ScreenId, SectionId};

/// Renders the lesson list of `section_id`
///
/// Each lesson has an Open button and a toggle showing its title and first
/// paragraph inline.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state (expanded previews)
/// * `section_id` - Section to list
/// * `palette` - Palette resolved for the visible screen
pub fn render_section(
    ui: &mut egui::Ui,
    state: &AppState,
    section_id: SectionId,
    palette: &Palette,
) -> Option<ScreenInteraction> {
    let Some(section) = content::find_section(section_id) else {
        ui.label(format!("No content for {}", section_id.title()));
        return None;
    };

    let mut interaction = None;
    widgets::trilingual(ui, &section.title, palette);
    ui.separator();

    for lesson in &section.lessons {
        widgets::card(ui, palette, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(format!("{}. {}", lesson.id.number, lesson.title.en)).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Open").clicked() {
                        interaction = Some(ScreenInteraction::Navigate(ScreenId::Lesson(lesson.id)));
                    }
                    let expanded = state.lessons.is_expanded(lesson.id);
                    if ui.button(if expanded { "▲" } else { "▼" }).clicked() {
                        interaction = Some(ScreenInteraction::ToggleLessonPreview(lesson.id));
                    }
                });
            });

            if state.lessons.is_expanded(lesson.id) {
                ui.separator();
                widgets::trilingual(ui, &lesson.title, palette);
                let intro = lesson.blocks.iter().find_map(|b| match b {
                    Block::Paragraph(text) => Some(text),
                    _ => None,
                });
                if let Some(text) = intro {
                    widgets::trilingual(ui, text, palette);
                }
            }
        });
        ui.add_space(6.0);
    }

    interaction
}
