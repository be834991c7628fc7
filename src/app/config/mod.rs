// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[scan]` - Scan flow timings (processing delay, success screen)
//! - `[camera]` - Capture device, flash mode, image format, save directory
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `EXPENSE_SNAP_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use expense_snap::app::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::camera::{CameraConfiguration, FlashMode, ImageFormat};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
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

/// Scan flow timings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanConfig {
    /// Simulated processing time before a receipt id is reported.
    #[serde(
        default = "default_processing_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub processing_delay_ms: Option<u64>,

    /// Time the success screen stays up before the detail screen opens.
    #[serde(
        default = "default_success_display_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub success_display_ms: Option<u64>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            processing_delay_ms: default_processing_delay_ms(),
            success_display_ms: default_success_display_ms(),
        }
    }
}

impl ScanConfig {
    /// Processing delay, clamped to the supported range.
    pub fn processing_delay(&self) -> Duration {
        let ms = self
            .processing_delay_ms
            .unwrap_or(DEFAULT_PROCESSING_DELAY_MS)
            .clamp(MIN_PROCESSING_DELAY_MS, MAX_PROCESSING_DELAY_MS);
        Duration::from_millis(ms)
    }

    /// Success screen duration, clamped to the supported range.
    pub fn success_display(&self) -> Duration {
        let ms = self
            .success_display_ms
            .unwrap_or(DEFAULT_SUCCESS_DISPLAY_MS)
            .clamp(MIN_SUCCESS_DISPLAY_MS, MAX_SUCCESS_DISPLAY_MS);
        Duration::from_millis(ms)
    }
}

/// Camera capture settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CameraConfig {
    /// Video4Linux device index (`/dev/video<N>`).
    #[serde(
        default = "default_device_index",
        skip_serializing_if = "Option::is_none"
    )]
    pub device_index: Option<usize>,

    /// Flash mode the camera preview starts with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flash_mode: Option<FlashMode>,

    /// Encoding used for captured photos.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_format: Option<ImageFormat>,

    /// When set, each capture is also written to this directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save_directory: Option<PathBuf>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            device_index: default_device_index(),
            flash_mode: Some(FlashMode::default()),
            image_format: Some(ImageFormat::default()),
            save_directory: None,
        }
    }
}

impl CameraConfig {
    /// Resolves the section into the camera adapter's configuration.
    pub fn to_camera_configuration(&self) -> CameraConfiguration {
        CameraConfiguration {
            device_index: self.device_index.unwrap_or(DEFAULT_CAMERA_DEVICE_INDEX),
            flash_mode: self.flash_mode.unwrap_or_default(),
            image_format: self.image_format.unwrap_or_default(),
            save_directory: self.save_directory.clone(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Scan flow timings.
    #[serde(default)]
    pub scan: ScanConfig,

    /// Camera capture settings.
    #[serde(default)]
    pub camera: CameraConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_processing_delay_ms() -> Option<u64> {
    Some(DEFAULT_PROCESSING_DELAY_MS)
}

fn default_success_display_ms() -> Option<u64> {
    Some(DEFAULT_SUCCESS_DISPLAY_MS)
}

fn default_device_index() -> Option<usize> {
    Some(DEFAULT_CAMERA_DEVICE_INDEX)
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
/// default config with a warning message explaining what went wrong.
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
                    tracing::warn!(path = %path.display(), error = %err, "failed to load config");
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
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
