//! UI rendering subsystem
//!
//! - Header bar (back, title, dark mode toggle, settings)
//! - One renderer per screen: splash, home, section, lesson, word frequency, settings
//! - Shared widgets (cards, trilingual text, tables, box diagrams)
//! - Screen manager (dispatch on the current `ScreenId`)

pub mod header;
pub mod widgets;
pub mod splash;
pub mod home;
pub mod section;
pub mod lesson;
pub mod word_frequency;
pub mod settings;
pub mod screen_manager;
