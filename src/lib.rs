pub mod config;
pub mod content;
pub mod navigation;
pub mod preferences;
pub mod storage;
pub mod theme;

// Export configuration
pub use config::AppConfig;

// Export preference store
pub use preferences::{PreferenceError, PreferenceStore, Preferences};

// Export storage backends
pub use storage::{JsonFileStorage, KeyValueStorage, MemoryStorage, StorageError};

// Export navigation
pub use navigation::{Navigator, ScreenId, SplashTimer};

// Export theme support
pub use theme::{resolve, resolve_fixed, with_opacity, Color, FixedSection, Palette, ThemeVariant};

// Export content model
pub use content::{LessonId, SectionId};
