//! Presentation layer: mapping resolved palettes onto egui styling.

pub mod visuals;
