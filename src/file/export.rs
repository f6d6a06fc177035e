//! Writing exported drawings to disk.

use super::types::ExportError;
use crate::config::ExportConfig;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Generate a filename based on the template and current time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
/// * `format` - File extension (e.g., "png")
pub fn generate_filename(template: &str, format: &str) -> String {
    let now = Local::now();
    let filename = now.format(template).to_string();
    format!("{}.{}", filename, format)
}

/// Ensure the export directory exists, creating it if necessary.
///
/// Returns the canonicalized path when it can be resolved.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Writes PNG bytes to `path`, creating parent directories as needed.
pub fn save_png(image_data: &[u8], path: &Path) -> Result<PathBuf, ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_directory_exists(parent)?;
    }

    log::info!(
        "Saving drawing to: {} ({} bytes)",
        path.display(),
        image_data.len()
    );
    fs::write(path, image_data)?;

    let written_size = fs::metadata(path)?.len();
    log::debug!("File written: {} bytes", written_size);

    // User read/write only
    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, Permissions::from_mode(0o600))?;
    }

    Ok(path.to_path_buf())
}

/// Saves PNG bytes into the configured export directory under a generated name.
pub fn save_to_directory(image_data: &[u8], config: &ExportConfig) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(&expand_tilde(&config.directory))?;
    let filename = generate_filename(&config.filename_template, "png");
    save_png(image_data, &directory.join(filename))
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
