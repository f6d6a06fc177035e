//! Background fill settings.

use super::color::{Color, WHITE};

/// Background color and how opaque its fill is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackgroundState {
    /// Fill color; only the RGB components are used.
    pub color: Color,
    /// Fill opacity in `0.0..=1.0`.
    pub transparency: f64,
}

impl BackgroundState {
    pub fn new(color: Color, transparency: f64) -> Self {
        Self {
            color,
            transparency: transparency.clamp(0.0, 1.0),
        }
    }

    /// The color actually painted: RGB from `color`, alpha from `transparency`.
    pub fn fill_color(&self) -> Color {
        self.color.with_alpha(self.transparency)
    }
}

impl Default for BackgroundState {
    fn default() -> Self {
        Self::new(WHITE, 1.0)
    }
}
