//! Decoding image files into cairo surfaces.

use super::types::ImportError;
use std::path::Path;

/// Loads and decodes an image file.
///
/// The format is sniffed from the content, not the extension; anything the
/// decoder does not recognize is rejected as [`ImportError::NotAnImage`].
pub fn load_image(path: &Path) -> Result<cairo::ImageSurface, ImportError> {
    if !path.is_file() {
        return Err(ImportError::Missing(path.to_path_buf()));
    }

    let reader = image::ImageReader::open(path)?.with_guessed_format()?;
    if reader.format().is_none() {
        return Err(ImportError::NotAnImage(path.to_path_buf()));
    }

    let decoded = reader.decode()?;
    log::debug!(
        "Decoded {} ({}x{})",
        path.display(),
        decoded.width(),
        decoded.height()
    );
    to_surface(&decoded.to_rgba8())
}

/// Decodes an in-memory image.
pub fn decode_image(bytes: &[u8]) -> Result<cairo::ImageSurface, ImportError> {
    let decoded = image::load_from_memory(bytes)?;
    to_surface(&decoded.to_rgba8())
}

/// Copies straight-alpha RGBA pixels into a premultiplied ARGB32 surface.
fn to_surface(rgba: &image::RgbaImage) -> Result<cairo::ImageSurface, ImportError> {
    let (width, height) = rgba.dimensions();
    let too_large = || ImportError::TooLarge { width, height };
    let surface_w = i32::try_from(width).map_err(|_| too_large())?;
    let surface_h = i32::try_from(height).map_err(|_| too_large())?;

    let stride = cairo::Format::ARgb32.stride_for_width(width)?;
    let row_bytes = usize::try_from(stride).map_err(|_| too_large())?;
    let mut data = vec![0u8; row_bytes * height as usize];

    for (x, y, pixel) in rgba.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        let premultiply = |c: u8| ((u16::from(c) * u16::from(a) + 127) / 255) as u32;
        let argb = (u32::from(a) << 24)
            | (premultiply(r) << 16)
            | (premultiply(g) << 8)
            | premultiply(b);

        let offset = y as usize * row_bytes + x as usize * 4;
        data[offset..offset + 4].copy_from_slice(&argb.to_ne_bytes());
    }

    Ok(cairo::ImageSurface::create_for_data(
        data,
        cairo::Format::ARgb32,
        surface_w,
        surface_h,
        stride,
    )?)
}
