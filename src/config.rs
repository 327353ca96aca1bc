//! Application configuration.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

const APP_DIR: &str = "qawaid";

/// Startup settings for the viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory holding persisted preferences.
    pub storage_dir: PathBuf,
    /// Directory searched for Arabic / Urdu font files.
    pub fonts_dir: PathBuf,
    /// How long the splash screen stays up before advancing to home.
    pub splash_delay: Duration,
    /// Initial window size in points.
    pub window_size: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        let storage_dir = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR);
        Self::with_storage_dir(storage_dir)
    }
}

impl AppConfig {
    /// Default configuration rooted at `storage_dir`; fonts live in its `fonts/` subdirectory.
    pub fn with_storage_dir(storage_dir: impl Into<PathBuf>) -> Self {
        let storage_dir = storage_dir.into();
        Self {
            fonts_dir: storage_dir.join("fonts"),
            storage_dir,
            splash_delay: Duration::from_secs(2),
            window_size: [1100.0, 780.0],
        }
    }

    /// Builds a configuration from command-line arguments (program name excluded).
    ///
    /// The only recognised argument is an optional storage directory.
    pub fn from_args<I>(mut args: I) -> Self
    where
        I: Iterator<Item = String>,
    {
        match args.next() {
            Some(dir) => Self::with_storage_dir(dir),
            None => Self::default(),
        }
    }

    /// Creates the storage and fonts directories if missing.
    ///
    /// The fonts directory is created empty so users know where to drop
    /// font files.
    pub fn ensure_dirs(&self) -> Result<()> {
        for dir in [&self.storage_dir, &self.fonts_dir] {
            fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = AppConfig::default();
        assert!(config.storage_dir.ends_with(APP_DIR));
        assert_eq!(config.fonts_dir, config.storage_dir.join("fonts"));
        assert_eq!(config.splash_delay, Duration::from_secs(2));
    }

    #[test]
    fn test_storage_dir_argument() {
        let config = AppConfig::from_args(vec!["/tmp/q".to_string()].into_iter());
        assert_eq!(config.storage_dir, PathBuf::from("/tmp/q"));
        assert_eq!(config.fonts_dir, PathBuf::from("/tmp/q/fonts"));

        let config = AppConfig::from_args(std::iter::empty());
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_ensure_dirs_creates_fonts_dir() -> Result<()> {
        let root = tempfile::tempdir()?;
        let config = AppConfig::with_storage_dir(root.path().join("nested").join("qawaid"));

        config.ensure_dirs()?;
        assert!(config.fonts_dir.is_dir());
        // Idempotent
        config.ensure_dirs()?;
        Ok(())
    }

    #[test]
    fn test_ensure_dirs_reports_path() {
        let root = tempfile::tempdir().unwrap();
        let blocker = root.path().join("file");
        fs::write(&blocker, b"x").unwrap();

        let err = AppConfig::with_storage_dir(&blocker).ensure_dirs().unwrap_err();
        assert!(format!("{err:#}").contains("file"));
    }
}
