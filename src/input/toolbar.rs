//! Toolbar control values.

use crate::config::{BackgroundConfig, DrawingConfig};
use crate::draw::{
    BackgroundState, Color,
    color::{BLACK, WHITE},
};

/// Raw values of the toolbar inputs.
///
/// Stored the way the controls report them (hex strings and 0-100 percentages)
/// and converted each time they are read, so a change is picked up by the very
/// next stroke or repaint.
#[derive(Debug, Clone, PartialEq)]
pub struct Toolbar {
    /// Stroke color picker value (`#rrggbb`)
    pub color: String,
    /// Stroke opacity percent (0-100)
    pub stroke_transparency: u8,
    /// Brush width in pixels
    pub brush_size: u32,
    /// Background color picker value (`#rrggbb`)
    pub background_color: String,
    /// Background opacity percent (0-100)
    pub background_transparency: u8,
}

impl Default for Toolbar {
    fn default() -> Self {
        Self {
            color: "#000000".to_string(),
            stroke_transparency: 100,
            brush_size: 5,
            background_color: "#ffffff".to_string(),
            background_transparency: 100,
        }
    }
}

impl Toolbar {
    /// Builds the initial control values from configuration.
    pub fn from_config(drawing: &DrawingConfig, background: &BackgroundConfig) -> Self {
        Self {
            color: drawing.color.clone(),
            stroke_transparency: drawing.transparency,
            brush_size: drawing.brush_size,
            background_color: background.color.clone(),
            background_transparency: background.transparency,
        }
    }

    /// Stroke color with alpha taken from the transparency slider.
    pub fn stroke_color(&self) -> Color {
        Color::from_hex_or(&self.color, BLACK).with_alpha(percent(self.stroke_transparency))
    }

    /// Brush width, never below one pixel.
    pub fn brush_size(&self) -> u32 {
        self.brush_size.max(1)
    }

    /// Background settings as currently shown on the toolbar.
    pub fn background(&self) -> BackgroundState {
        BackgroundState::new(
            Color::from_hex_or(&self.background_color, WHITE),
            percent(self.background_transparency),
        )
    }
}

fn percent(value: u8) -> f64 {
    f64::from(value.min(100)) / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stroke_color_uses_transparency() {
        let toolbar = Toolbar {
            color: "#ff0000".to_string(),
            stroke_transparency: 50,
            ..Toolbar::default()
        };
        assert_eq!(toolbar.stroke_color(), Color::new(1.0, 0.0, 0.0, 0.5));
    }

    #[test]
    fn out_of_range_values_are_bounded() {
        let toolbar = Toolbar {
            stroke_transparency: 250,
            brush_size: 0,
            ..Toolbar::default()
        };
        assert_eq!(toolbar.stroke_color().a, 1.0);
        assert_eq!(toolbar.brush_size(), 1);
    }

    #[test]
    fn bad_background_hex_falls_back_to_white() {
        let toolbar = Toolbar {
            background_color: "blue".to_string(),
            background_transparency: 40,
            ..Toolbar::default()
        };
        let background = toolbar.background();
        assert_eq!(background.color, WHITE);
        assert_eq!(background.transparency, 0.4);
    }
}
