//! User display preferences: dark mode flag and theme variant.
//!
//! - `migration` upgrades persisted records to the current schema
//! - `store` owns the live values and writes them back on every change

mod migration;
mod store;

pub use migration::{migrate, PersistedPreferences, CURRENT_VERSION};
pub use store::{PreferenceError, PreferenceStore, STORAGE_KEY};

use crate::theme::ThemeVariant;
use serde::{Deserialize, Serialize};

/// Snapshot of the user's display preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub is_dark_mode: bool,
    pub theme_variant: ThemeVariant,
}
