//! Background I/O for startup work: preference record and font files.

pub mod loading_state;
pub mod preference_loader;
pub mod font_loader;

// Re-export commonly used types
pub use loading_state::LoadingState;
pub use preference_loader::PreferenceLoader;
pub use font_loader::FontLoader;
