//! Error types for image import and export.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while importing a background image.
///
/// Every variant leaves the canvas untouched.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Image file not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("Not an image file: {}", .0.display())]
    NotAnImage(PathBuf),

    #[error("Failed to read image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Image too large: {width}x{height}")]
    TooLarge { width: u32, height: u32 },

    #[error("Failed to upload image to the canvas: {0}")]
    Surface(#[from] cairo::Error),
}

/// Errors that can occur while exporting the drawing.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to encode PNG: {0}")]
    Encode(#[from] cairo::IoError),

    #[error("Failed to save drawing: {0}")]
    Save(#[from] std::io::Error),
}
