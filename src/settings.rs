//! Game settings and balance
//!
//! Every tuning constant lives here so a run can be reproduced from its
//! settings and seed. Loaded from an optional JSON file on native.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors loading or validating settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid settings: {0}")]
    Invalid(String),
}

/// Game tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Viewport ===
    pub viewport_width: f64,
    pub viewport_height: f64,

    // === Fleet ===
    /// Maximum invaders on screen (slot count)
    pub maximum_attack: usize,
    /// Invader diameter range
    pub min_hull_size: f64,
    pub max_hull_size: f64,

    // === Physics ===
    /// Fall speed range (pixels per millisecond)
    pub min_speed: f64,
    pub max_speed: f64,
    /// Global speed multiplier (difficulty)
    pub attack_speed: f64,

    // === Input ===
    /// Pointer diameter for hit testing
    pub pointer_hull_size: f64,

    // === Timing / scoring ===
    /// Teleport timer period (ms)
    pub spawn_interval_ms: u64,
    /// Score wraps around at this value
    pub score_modulus: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,

            maximum_attack: MAXIMUM_ATTACK,
            min_hull_size: MIN_HULL_SIZE,
            max_hull_size: MAX_HULL_SIZE,

            min_speed: MIN_SPEED,
            max_speed: MAX_SPEED,
            attack_speed: ATTACK_SPEED,

            pointer_hull_size: POINTER_HULL_SIZE,

            spawn_interval_ms: SPAWN_INTERVAL_MS,
            score_modulus: SCORE_MODULUS,
        }
    }
}

impl Settings {
    /// Environment variable naming a settings file for the native binary
    pub const ENV_VAR: &'static str = "HOLO_INVADERS_SETTINGS";

    /// Check the tuning is usable. Equal min/max hull sizes are allowed.
    pub fn validate(&self) -> Result<(), SettingsError> {
        fn invalid(msg: impl Into<String>) -> Result<(), SettingsError> {
            Err(SettingsError::Invalid(msg.into()))
        }

        if !(self.viewport_width > 0.0 && self.viewport_height > 0.0) {
            return invalid("viewport must be positive");
        }
        if self.maximum_attack == 0 {
            return invalid("maximum_attack must be at least 1");
        }
        if !(self.min_hull_size > 0.0)
            || !self.max_hull_size.is_finite()
            || self.min_hull_size > self.max_hull_size
        {
            return invalid(format!(
                "hull size range [{}, {}] is empty or non-positive",
                self.min_hull_size, self.max_hull_size
            ));
        }
        if self.max_hull_size > self.viewport_width || self.max_hull_size > self.viewport_height {
            return invalid("max_hull_size does not fit in the viewport");
        }
        if !(self.min_speed >= 0.0 && self.max_speed >= 0.0 && self.attack_speed >= 0.0) {
            return invalid("speeds must be non-negative");
        }
        if !(self.pointer_hull_size >= 0.0) {
            return invalid("pointer_hull_size must be non-negative");
        }
        if self.spawn_interval_ms == 0 {
            return invalid("spawn_interval_ms must be at least 1");
        }
        if self.score_modulus == 0 {
            return invalid("score_modulus must be at least 1");
        }
        Ok(())
    }

    /// Parse and validate JSON settings (missing fields take defaults)
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings, falling back to defaults on any failure
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Settings at {} unusable ({}), using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.maximum_attack, 10);
        assert_eq!(settings.viewport_width, 800.0);
        assert_eq!(settings.viewport_height, 600.0);
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let settings = Settings::from_json(r#"{ "maximum_attack": 4, "attack_speed": 2.0 }"#)
            .expect("valid settings");
        assert_eq!(settings.maximum_attack, 4);
        assert_eq!(settings.attack_speed, 2.0);
        assert_eq!(settings.min_hull_size, MIN_HULL_SIZE);
    }

    #[test]
    fn test_json_roundtrip() {
        let settings = Settings {
            spawn_interval_ms: 250,
            ..Settings::default()
        };
        let json = settings.to_json().expect("serialize");
        let restored = Settings::from_json(&json).expect("deserialize");
        assert_eq!(restored, settings);
    }

    #[test]
    fn test_rejects_bad_values() {
        let bad = [
            Settings {
                maximum_attack: 0,
                ..Settings::default()
            },
            Settings {
                min_hull_size: 120.0,
                max_hull_size: 100.0,
                ..Settings::default()
            },
            Settings {
                max_hull_size: 900.0,
                ..Settings::default()
            },
            Settings {
                min_speed: -1.0,
                ..Settings::default()
            },
            Settings {
                spawn_interval_ms: 0,
                ..Settings::default()
            },
            Settings {
                score_modulus: 0,
                ..Settings::default()
            },
            Settings {
                viewport_width: f64::NAN,
                ..Settings::default()
            },
            Settings {
                max_hull_size: f64::NAN,
                ..Settings::default()
            },
            Settings {
                max_hull_size: f64::INFINITY,
                ..Settings::default()
            },
        ];
        for settings in bad {
            assert!(matches!(settings.validate(), Err(SettingsError::Invalid(_))));
        }
    }

    #[test]
    fn test_equal_hull_sizes_allowed() {
        let settings = Settings {
            min_hull_size: 50.0,
            max_hull_size: 50.0,
            ..Settings::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = Path::new("/nonexistent/holo-invaders-settings.json");
        assert!(matches!(Settings::load(path), Err(SettingsError::Io(_))));
        assert_eq!(Settings::load_or_default(Some(path)), Settings::default());
    }
}
