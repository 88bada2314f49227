// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read once at startup
//! from a user-edited `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[picker]` - Wheel geometry, highlight band and settle timing
//! - `[calendar]` - Year range offered by the year wheel
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with explicit path
//! 2. Set `DOB_PICKER_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use dob_picker::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, warning) = config::load();
//!
//! if let Some(key) = warning {
//!     eprintln!("config ignored: {key}");
//! }
//! let language = config.general.language.as_deref().unwrap_or("en-US");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Scroll picker appearance and behavior.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PickerConfig {
    /// Height of a single wheel row.
    #[serde(default = "default_item_height")]
    pub item_height: Option<f32>,

    /// Explicit viewport height of a wheel. When neither this nor
    /// `style_height` is set, the wheels are `DEFAULT_WRAPPER_HEIGHT` tall.
    #[serde(default)]
    pub wrapper_height: Option<f32>,

    /// Viewport height as written in a style sheet (e.g. `"180"`). Only used
    /// when `wrapper_height` is absent and the string is fully numeric.
    #[serde(default)]
    pub style_height: Option<String>,

    /// Highlight band color as a hex string.
    #[serde(default = "default_highlight_color")]
    pub highlight_color: Option<String>,

    /// Highlight band border width.
    #[serde(default = "default_highlight_border_width")]
    pub highlight_border_width: Option<f32>,

    /// Settle debounce after a drag ends, in milliseconds.
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: Option<u64>,

    /// Quiet period that ends wheel/trackpad momentum, in milliseconds.
    #[serde(default = "default_wheel_idle_ms")]
    pub wheel_idle_ms: Option<u64>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            item_height: default_item_height(),
            wrapper_height: None,
            style_height: None,
            highlight_color: default_highlight_color(),
            highlight_border_width: default_highlight_border_width(),
            settle_delay_ms: default_settle_delay_ms(),
            wheel_idle_ms: default_wheel_idle_ms(),
        }
    }
}

/// Calendar settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CalendarConfig {
    /// First year offered by the year wheel.
    #[serde(default = "default_first_year")]
    pub first_year: Option<i32>,

    /// Last year offered by the year wheel.
    #[serde(default = "default_last_year")]
    pub last_year: Option<i32>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            first_year: default_first_year(),
            last_year: default_last_year(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Scroll picker settings.
    #[serde(default)]
    pub picker: PickerConfig,

    /// Calendar settings.
    #[serde(default)]
    pub calendar: CalendarConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_item_height() -> Option<f32> {
    Some(DEFAULT_ITEM_HEIGHT)
}

fn default_highlight_color() -> Option<String> {
    Some(DEFAULT_HIGHLIGHT_COLOR.to_string())
}

fn default_highlight_border_width() -> Option<f32> {
    Some(DEFAULT_HIGHLIGHT_BORDER_WIDTH)
}

fn default_settle_delay_ms() -> Option<u64> {
    Some(DEFAULT_SETTLE_DELAY_MS)
}

fn default_wheel_idle_ms() -> Option<u64> {
    Some(DEFAULT_WHEEL_IDLE_MS)
}

fn default_first_year() -> Option<i32> {
    Some(DEFAULT_FIRST_YEAR)
}

fn default_last_year() -> Option<i32> {
    Some(DEFAULT_LAST_YEAR)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    eprintln!("Failed to load config from {:?}: {}", path, err);
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn load_from_path_reads_every_section() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            r##"
[general]
language = "fr"
theme_mode = "light"

[picker]
item_height = 24.0
wrapper_height = 240.0
highlight_color = "#ff000080"
highlight_border_width = 2.0
settle_delay_ms = 80
wheel_idle_ms = 150

[calendar]
first_year = 1900
last_year = 2030
"##,
        )
        .expect("write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        let expected = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            picker: PickerConfig {
                item_height: Some(24.0),
                wrapper_height: Some(240.0),
                style_height: None,
                highlight_color: Some("#ff000080".to_string()),
                highlight_border_width: Some(2.0),
                settle_delay_ms: Some(80),
                wheel_idle_ms: Some(150),
            },
            calendar: CalendarConfig {
                first_year: Some(1900),
                last_year: Some(2030),
            },
        };
        assert_eq!(loaded, expected);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.picker.item_height, Some(DEFAULT_ITEM_HEIGHT));
        assert_eq!(config.picker.wrapper_height, None);
        assert_eq!(config.picker.settle_delay_ms, Some(DEFAULT_SETTLE_DELAY_MS));
        assert_eq!(config.calendar.first_year, Some(1950));
        assert_eq!(config.calendar.last_year, Some(2050));
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            r#"
[picker]
style_height = "180"
"#,
        )
        .expect("write partial config");

        let loaded = load_from_path(&config_path).expect("partial config should load");

        assert_eq!(loaded.picker.style_height.as_deref(), Some("180"));
        assert_eq!(loaded.picker.item_height, Some(DEFAULT_ITEM_HEIGHT));
        assert_eq!(loaded.calendar, CalendarConfig::default());
        assert_eq!(loaded.general, GeneralConfig::default());
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"sepia\"\n").expect("write config");

        assert!(load_from_path(&config_path).is_err());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"DARK\"\n").expect("write config");

        let loaded = load_from_path(&config_path).expect("config should load");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn load_with_override_reads_settings_from_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(
            base_dir.join("settings.toml"),
            "[general]\nlanguage = \"vi\"\ntheme_mode = \"dark\"\n",
        )
        .expect("write config");

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert_eq!(loaded.general.language, Some("vi".to_string()));
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
        assert_eq!(loaded.picker, PickerConfig::default());
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn flat_file_without_sections_is_ignored() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "language = \"fr\"\nitem_height = 30.0\n")
            .expect("write config");

        let loaded = load_from_path(&config_path).expect("unknown keys are tolerated");
        assert_eq!(loaded, Config::default());
    }
}
