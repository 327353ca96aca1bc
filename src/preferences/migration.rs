//! Version-tagged upgrade of persisted preference records.
//!
//! Each step rewrites a record from version `n` to `n + 1`. New steps are
//! appended to [`STEPS`]; the store never needs to change.

use super::Preferences;
use crate::theme::ThemeVariant;
use serde::{Deserialize, Serialize};

/// Schema version written by this build.
pub const CURRENT_VERSION: u32 = 1;

/// On-disk shape of the preference record.
///
/// `theme_variant` stays a plain string so that names retired by earlier
/// releases still deserialise and can be remapped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedPreferences {
    #[serde(default)]
    pub is_dark_mode: bool,
    #[serde(default = "default_variant_name")]
    pub theme_variant: String,
    #[serde(default)]
    pub version: u32,
}

fn default_variant_name() -> String {
    ThemeVariant::default().as_str().to_string()
}

impl From<Preferences> for PersistedPreferences {
    fn from(prefs: Preferences) -> Self {
        Self {
            is_dark_mode: prefs.is_dark_mode,
            theme_variant: prefs.theme_variant.as_str().to_string(),
            version: CURRENT_VERSION,
        }
    }
}

type Step = fn(PersistedPreferences) -> PersistedPreferences;

/// Upgrade steps indexed by the version they upgrade from.
const STEPS: [Step; CURRENT_VERSION as usize] = [rename_blackwhite];

// v0 -> v1: the monochrome variant was dropped in favour of teal.
fn rename_blackwhite(mut record: PersistedPreferences) -> PersistedPreferences {
    if record.theme_variant == "blackwhite" {
        record.theme_variant = ThemeVariant::Teal.as_str().to_string();
    }
    record.version = 1;
    record
}

/// Upgrades `record` to [`CURRENT_VERSION`] and converts it to live preferences.
///
/// Variant names that are unknown, or that belong to an internal section
/// palette, fall back to the default variant.
pub fn migrate(mut record: PersistedPreferences) -> Preferences {
    let from = record.version;
    while (record.version as usize) < STEPS.len() {
        record = STEPS[record.version as usize](record);
    }
    if from != record.version {
        log::info!("Migrated preferences from v{} to v{}", from, record.version);
    }

    let theme_variant = match record.theme_variant.parse::<ThemeVariant>() {
        Ok(variant) if variant.is_user_selectable() => variant,
        Ok(variant) => {
            log::warn!("Persisted variant '{}' is not selectable, using default", variant);
            ThemeVariant::default()
        }
        Err(e) => {
            log::warn!("{}, using default", e);
            ThemeVariant::default()
        }
    };

    Preferences {
        is_dark_mode: record.is_dark_mode,
        theme_variant,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(variant: &str, version: u32) -> PersistedPreferences {
        PersistedPreferences {
            is_dark_mode: true,
            theme_variant: variant.to_string(),
            version,
        }
    }

    #[test]
    fn test_blackwhite_becomes_teal() {
        let prefs = migrate(record("blackwhite", 0));
        assert_eq!(prefs.theme_variant, ThemeVariant::Teal);
        assert!(prefs.is_dark_mode);
    }

    #[test]
    fn test_current_record_passes_through() {
        let prefs = migrate(record("crimsonNight", CURRENT_VERSION));
        assert_eq!(prefs.theme_variant, ThemeVariant::CrimsonNight);
    }

    #[test]
    fn test_unknown_variant_falls_back() {
        let prefs = migrate(record("ocean", CURRENT_VERSION));
        assert_eq!(prefs.theme_variant, ThemeVariant::Teal);
        assert!(prefs.is_dark_mode);
    }

    #[test]
    fn test_internal_variant_not_restored() {
        let prefs = migrate(record("verbs", CURRENT_VERSION));
        assert_eq!(prefs.theme_variant, ThemeVariant::Teal);
    }

    #[test]
    fn test_future_version_left_alone() {
        let prefs = migrate(record("green", CURRENT_VERSION + 3));
        assert_eq!(prefs.theme_variant, ThemeVariant::Green);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let parsed: PersistedPreferences = serde_json::from_str("{\"themeVariant\":\"blackwhite\"}").unwrap();
        assert_eq!(parsed.version, 0);
        assert!(!parsed.is_dark_mode);
        assert_eq!(migrate(parsed).theme_variant, ThemeVariant::Teal);
    }

    #[test]
    fn test_persisted_shape() {
        let persisted = PersistedPreferences::from(Preferences {
            is_dark_mode: true,
            theme_variant: ThemeVariant::SunsetCrimson,
        });
        let json = serde_json::to_value(&persisted).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"isDarkMode": true, "themeVariant": "sunsetCrimson", "version": 1})
        );
    }
}
