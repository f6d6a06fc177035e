//! Configuration type definitions.

use serde::{Deserialize, Serialize};

/// Canvas resolution and the logical display box pointer coordinates refer to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Backing-store width in pixels (valid range: 1 - 8192)
    #[serde(default = "default_canvas_size")]
    pub width: i32,

    /// Backing-store height in pixels (valid range: 1 - 8192)
    #[serde(default = "default_canvas_size")]
    pub height: i32,

    /// Width of the on-screen element that reports pointer positions
    #[serde(default = "default_display_size")]
    pub display_width: f64,

    /// Height of the on-screen element that reports pointer positions
    #[serde(default = "default_display_size")]
    pub display_height: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_size(),
            height: default_canvas_size(),
            display_width: default_display_size(),
            display_height: default_display_size(),
        }
    }
}

/// Initial stroke settings shown on the toolbar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Stroke color as `#rrggbb`
    #[serde(default = "default_stroke_color")]
    pub color: String,

    /// Stroke opacity percent (valid range: 0 - 100)
    #[serde(default = "default_percent")]
    pub transparency: u8,

    /// Brush width in pixels (valid range: 1 - 200)
    #[serde(default = "default_brush_size")]
    pub brush_size: u32,

    /// Number of pointer samples averaged per smoothed point (valid range: 1 - 32)
    #[serde(default = "default_smoothing_window")]
    pub smoothing_window: usize,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            color: default_stroke_color(),
            transparency: default_percent(),
            brush_size: default_brush_size(),
            smoothing_window: default_smoothing_window(),
        }
    }
}

/// Initial background settings shown on the toolbar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackgroundConfig {
    /// Background color as `#rrggbb`
    #[serde(default = "default_background_color")]
    pub color: String,

    /// Background opacity percent (valid range: 0 - 100)
    #[serde(default = "default_percent")]
    pub transparency: u8,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            color: default_background_color(),
            transparency: default_percent(),
        }
    }
}

/// Undo history settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum number of snapshots kept (valid range: 1 - 100)
    #[serde(default = "default_history_capacity")]
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: default_history_capacity(),
        }
    }
}

/// Where exported drawings go.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory for exported PNGs (`~/` is expanded)
    #[serde(default = "default_export_directory")]
    pub directory: String,

    /// Filename template with chrono format specifiers (extension added automatically)
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
            filename_template: default_filename_template(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_canvas_size() -> i32 {
    1000
}

fn default_display_size() -> f64 {
    500.0
}

fn default_stroke_color() -> String {
    "#000000".to_string()
}

fn default_percent() -> u8 {
    100
}

fn default_brush_size() -> u32 {
    5
}

fn default_smoothing_window() -> usize {
    crate::input::smoother::DEFAULT_WINDOW
}

fn default_background_color() -> String {
    "#ffffff".to_string()
}

fn default_history_capacity() -> usize {
    crate::history::DEFAULT_CAPACITY
}

fn default_export_directory() -> String {
    "~/Pictures/Smoothdraw".to_string()
}

fn default_filename_template() -> String {
    "drawing_%Y-%m-%d_%H%M%S".to_string()
}
