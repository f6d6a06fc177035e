//! Background image import and PNG export.

pub mod export;
pub mod import;
pub mod types;

pub use export::{expand_tilde, generate_filename, save_png, save_to_directory};
pub use import::{decode_image, load_image};
pub use types::{ExportError, ImportError};
