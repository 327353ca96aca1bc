//! Palette to egui visuals mapping.

use egui::{Color32, Visuals};
use qawaid::{with_opacity, Palette};

/// Builds egui visuals for `palette`, starting from egui's light or dark defaults.
pub fn build_visuals(palette: &Palette, is_dark_mode: bool) -> Visuals {
    let mut visuals = if is_dark_mode { Visuals::dark() } else { Visuals::light() };
    let c = |color: qawaid::Color| -> Color32 { color.to_color32() };

    // Background colors
    visuals.panel_fill = c(palette.background);
    visuals.window_fill = c(palette.surface);
    visuals.extreme_bg_color = c(palette.surface);
    visuals.faint_bg_color = c(with_opacity(palette.primary, 0.06));
    visuals.window_stroke.color = c(palette.border);
    visuals.window_shadow.color = c(palette.shadow);
    visuals.popup_shadow.color = c(palette.shadow);

    // Text
    visuals.override_text_color = Some(c(palette.text));
    visuals.hyperlink_color = c(palette.accent);

    // Selection
    visuals.selection.bg_fill = c(with_opacity(palette.primary, 0.35));
    visuals.selection.stroke.color = c(palette.primary);

    // Widgets
    visuals.widgets.noninteractive.bg_fill = c(palette.card);
    visuals.widgets.noninteractive.bg_stroke.color = c(palette.border);
    visuals.widgets.inactive.bg_fill = c(palette.surface);
    visuals.widgets.inactive.weak_bg_fill = c(palette.surface);
    visuals.widgets.hovered.bg_fill = c(with_opacity(palette.primary, 0.2));
    visuals.widgets.hovered.weak_bg_fill = c(with_opacity(palette.primary, 0.2));
    visuals.widgets.hovered.bg_stroke.color = c(palette.primary);
    visuals.widgets.active.bg_fill = c(with_opacity(palette.primary, 0.4));
    visuals.widgets.active.weak_bg_fill = c(with_opacity(palette.primary, 0.4));

    visuals
}
