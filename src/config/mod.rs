//! Configuration file support for smoothdraw.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/smoothdraw/config.toml`. Settings include canvas resolution,
//! initial toolbar values, history depth, and export location.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod types;

// Re-export commonly used types at module level
pub use types::{BackgroundConfig, CanvasConfig, DrawingConfig, ExportConfig, HistoryConfig};

use crate::draw::Color;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 1000
/// height = 1000
///
/// [drawing]
/// color = "#202020"
/// transparency = 80
/// brush_size = 4
///
/// [background]
/// color = "#fff8e7"
///
/// [history]
/// capacity = 10
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Canvas resolution and display mapping
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Initial stroke settings
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Initial background settings
    #[serde(default)]
    pub background: BackgroundConfig,

    /// Undo history depth
    #[serde(default)]
    pub history: HistoryConfig,

    /// Export destination
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or reset to the
    /// default for unparsable colors) and a warning is logged.
    fn validate_and_clamp(&mut self) {
        for (name, value) in [
            ("canvas.width", &mut self.canvas.width),
            ("canvas.height", &mut self.canvas.height),
        ] {
            if !(1..=8192).contains(value) {
                warn!("Invalid {name} {value}, clamping to 1-8192 range");
                *value = (*value).clamp(1, 8192);
            }
        }

        for (name, value) in [
            ("canvas.display_width", &mut self.canvas.display_width),
            ("canvas.display_height", &mut self.canvas.display_height),
        ] {
            if !value.is_finite() || *value <= 0.0 {
                warn!("Invalid {name} {value}, falling back to 500");
                *value = 500.0;
            }
        }

        for (name, value) in [
            ("drawing.transparency", &mut self.drawing.transparency),
            ("background.transparency", &mut self.background.transparency),
        ] {
            if *value > 100 {
                warn!("Invalid {name} {value}, clamping to 0-100 range");
                *value = 100;
            }
        }

        if !(1..=200).contains(&self.drawing.brush_size) {
            warn!(
                "Invalid brush_size {}, clamping to 1-200 range",
                self.drawing.brush_size
            );
            self.drawing.brush_size = self.drawing.brush_size.clamp(1, 200);
        }

        if !(1..=32).contains(&self.drawing.smoothing_window) {
            warn!(
                "Invalid smoothing_window {}, clamping to 1-32 range",
                self.drawing.smoothing_window
            );
            self.drawing.smoothing_window = self.drawing.smoothing_window.clamp(1, 32);
        }

        if !(1..=100).contains(&self.history.capacity) {
            warn!(
                "Invalid history capacity {}, clamping to 1-100 range",
                self.history.capacity
            );
            self.history.capacity = self.history.capacity.clamp(1, 100);
        }

        if Color::from_hex(&self.drawing.color).is_none() {
            warn!(
                "Invalid drawing color '{}', falling back to '#000000'",
                self.drawing.color
            );
            self.drawing.color = "#000000".to_string();
        }

        if Color::from_hex(&self.background.color).is_none() {
            warn!(
                "Invalid background color '{}', falling back to '#ffffff'",
                self.background.color
            );
            self.background.color = "#ffffff".to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("smoothdraw");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if the file is absent.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or is not valid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        // Values are validated and clamped while parsing
        let config = Self::parse(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses TOML text without touching the filesystem.
    pub fn parse(text: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(text)?;
        config.validate_and_clamp();
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.canvas.width, 1000);
        assert_eq!(config.canvas.display_width, 500.0);
        assert_eq!(config.drawing.color, "#000000");
        assert_eq!(config.drawing.smoothing_window, 5);
        assert_eq!(config.history.capacity, 10);
        assert_eq!(config.background.transparency, 100);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config::parse(
            r##"
            [canvas]
            width = 0
            display_width = -3.0

            [drawing]
            color = "red"
            transparency = 180
            brush_size = 900
            smoothing_window = 0

            [history]
            capacity = 1000
            "##,
        )
        .unwrap();

        assert_eq!(config.canvas.width, 1);
        assert_eq!(config.canvas.display_width, 500.0);
        assert_eq!(config.drawing.color, "#000000");
        assert_eq!(config.drawing.transparency, 100);
        assert_eq!(config.drawing.brush_size, 200);
        assert_eq!(config.drawing.smoothing_window, 1);
        assert_eq!(config.history.capacity, 100);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(Config::parse("[canvas\nwidth = ").is_err());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.export.filename_template, "drawing_%Y-%m-%d_%H%M%S");
    }

    #[test]
    fn file_values_are_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[background]\ncolor = \"#102030\"\ntransparency = 25\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.background.color, "#102030");
        assert_eq!(config.background.transparency, 25);
    }
}
