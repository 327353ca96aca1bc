//! Home screen: section list plus the word-frequency chart.

use crate::ui::screen_manager::ScreenInteraction;
use crate::ui::widgets;
use eframe::egui;
use qawaid::content::{self, Text};
use qawaid::{Palette, ScreenId};

/// Renders the home screen: one card per section and a word-frequency card
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `palette` - Palette resolved for the visible screen
pub fn render_home(ui: &mut egui::Ui, palette: &Palette) -> Option<ScreenInteraction> {
    let mut interaction = None;

    ui.add_space(8.0);
    for section in content::catalog() {
        if widgets::nav_card(ui, &section.title, palette) {
            interaction = Some(ScreenInteraction::Navigate(ScreenId::Section(section.id)));
        }
        ui.add_space(6.0);
    }

    ui.separator();
    let frequency = Text {
        ar: "الكلمات الأكثر تكرارًا",
        ur: "کثیر الاستعمال الفاظ",
        en: "Word frequency",
    };
    if widgets::nav_card(ui, &frequency, palette) {
        interaction = Some(ScreenInteraction::Navigate(ScreenId::WordFrequency));
    }

    interaction
}
