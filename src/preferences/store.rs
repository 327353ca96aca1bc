//! Persisted preference store.
//!
//! Owns the dark-mode flag and theme variant for the lifetime of the process.
//! Every mutation writes the full record under [`STORAGE_KEY`]; write failures
//! are logged and the in-memory value stays in effect.
//!
//! Changes made before the record has been loaded take effect in memory at
//! once but are only written after the load, replayed on top of the stored
//! record. Nothing is written before the load has been applied.

use super::migration::{migrate, PersistedPreferences};
use super::Preferences;
use crate::storage::{save_setting, KeyValueStorage, StorageError};
use crate::theme::{self, Palette, ThemeVariant};

/// Key under which the preference record is persisted.
pub const STORAGE_KEY: &str = "theme-storage";

#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("theme variant '{0}' cannot be selected")]
    InvalidVariant(ThemeVariant),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// User changes that arrived before the persisted record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct PendingChanges {
    is_dark_mode: Option<bool>,
    theme_variant: Option<ThemeVariant>,
}

impl PendingChanges {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn apply_to(self, prefs: &mut Preferences) {
        if let Some(dark) = self.is_dark_mode {
            prefs.is_dark_mode = dark;
        }
        if let Some(variant) = self.theme_variant {
            prefs.theme_variant = variant;
        }
    }
}

/// Holds the live preferences and the backend they are persisted to.
pub struct PreferenceStore {
    prefs: Preferences,
    storage: Box<dyn KeyValueStorage>,
    loaded: bool,
    pending: PendingChanges,
}

impl std::fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("prefs", &self.prefs)
            .field("loaded", &self.loaded)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl PreferenceStore {
    /// Creates a store holding default preferences. Nothing is read until [`load`](Self::load).
    pub fn new(storage: Box<dyn KeyValueStorage>) -> Self {
        Self {
            prefs: Preferences::default(),
            storage,
            loaded: false,
            pending: PendingChanges::default(),
        }
    }

    // ===== Queries =====

    pub fn state(&self) -> Preferences {
        self.prefs
    }

    pub fn is_dark_mode(&self) -> bool {
        self.prefs.is_dark_mode
    }

    pub fn theme_variant(&self) -> ThemeVariant {
        self.prefs.theme_variant
    }

    /// True once a persisted record (or its absence) has been applied.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Palette for the user's current choice.
    pub fn palette(&self) -> Palette {
        theme::resolve(self.prefs.theme_variant, self.prefs.is_dark_mode)
    }

    // ===== Mutations =====

    /// Flips dark mode and persists the record.
    pub fn toggle_dark_mode(&mut self) {
        self.prefs.is_dark_mode = !self.prefs.is_dark_mode;
        log::debug!("Dark mode {}", if self.prefs.is_dark_mode { "on" } else { "off" });
        if self.loaded {
            self.persist();
        } else {
            self.pending.is_dark_mode = Some(self.prefs.is_dark_mode);
        }
    }

    /// Selects a user-facing variant. Section palettes are rejected.
    pub fn set_theme_variant(&mut self, variant: ThemeVariant) -> Result<(), PreferenceError> {
        if !variant.is_user_selectable() {
            return Err(PreferenceError::InvalidVariant(variant));
        }
        self.prefs.theme_variant = variant;
        log::debug!("Theme variant set to {}", variant);
        if self.loaded {
            self.persist();
        } else {
            self.pending.theme_variant = Some(variant);
        }
        Ok(())
    }

    // ===== Loading =====

    /// Reads and applies the persisted record synchronously.
    pub fn load(&mut self) {
        let raw = self.storage.get_string(STORAGE_KEY);
        self.apply_loaded(raw);
    }

    /// Applies a raw read of [`STORAGE_KEY`], e.g. one performed on a background thread.
    ///
    /// Missing, unreadable or malformed records leave the defaults in place.
    /// Changes made before the load are reapplied on top and then persisted.
    pub fn apply_loaded(&mut self, raw: Result<Option<String>, StorageError>) {
        self.loaded = true;
        let mut prefs = match raw {
            Ok(Some(json)) => match serde_json::from_str::<PersistedPreferences>(&json) {
                Ok(record) => migrate(record),
                Err(e) => {
                    log::warn!("Ignoring malformed preference record: {}", e);
                    Preferences::default()
                }
            },
            Ok(None) => {
                log::info!("No stored preferences, using defaults");
                Preferences::default()
            }
            Err(e) => {
                log::warn!("Could not read preferences, using defaults: {}", e);
                Preferences::default()
            }
        };

        let pending = std::mem::take(&mut self.pending);
        pending.apply_to(&mut prefs);
        self.prefs = prefs;
        log::info!(
            "Preferences loaded: variant={} dark={}",
            self.prefs.theme_variant,
            self.prefs.is_dark_mode
        );

        if !pending.is_empty() {
            log::info!("Saving changes made while preferences were loading");
            self.persist();
        }
    }

    /// Writes the current record, returning the backend error if any.
    pub fn try_persist(&mut self) -> Result<(), PreferenceError> {
        let record = PersistedPreferences::from(self.prefs);
        save_setting(self.storage.as_mut(), STORAGE_KEY, &record)?;
        Ok(())
    }

    fn persist(&mut self) {
        if let Err(e) = self.try_persist() {
            log::warn!("Failed to persist preferences: {}", e);
        }
    }
}
