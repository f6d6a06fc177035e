//! Rendering primitives and drawing content (Cairo-based).
//!
//! This module defines the core drawing types:
//! - [`Color`]: RGBA color representation with hex parsing
//! - [`Stroke`]: A single smoothed line segment
//! - [`StrokeLog`]: All strokes currently on the canvas
//! - [`Canvas`]: The raster surface everything is painted onto
//! - Rendering functions for Cairo-based output

pub mod background;
pub mod canvas;
pub mod color;
pub mod render;
pub mod stroke;
pub mod stroke_log;

// Re-export commonly used types at module level
pub use background::BackgroundState;
pub use canvas::{Canvas, SurfaceError};
pub use color::Color;
pub use render::{redraw, render_background, render_strokes};
pub use stroke::{Point, Stroke};
pub use stroke_log::StrokeLog;
