//! Fixed-resolution raster surface the drawing is painted onto.

use super::background::BackgroundState;
use super::render;
use super::stroke::Stroke;
use thiserror::Error;

/// Failure to acquire a drawing surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Invalid canvas size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },

    #[error("Failed to create drawing surface: {0}")]
    Cairo(#[from] cairo::Error),
}

/// An ARGB32 image surface with its drawing context.
///
/// The canvas owns the backing pixels; the session draws through [`Canvas::context`].
pub struct Canvas {
    surface: cairo::ImageSurface,
    ctx: cairo::Context,
    width: i32,
    height: i32,
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl Canvas {
    /// Allocates a transparent canvas of `width` x `height` pixels.
    pub fn new(width: i32, height: i32) -> Result<Self, SurfaceError> {
        if width <= 0 || height <= 0 {
            return Err(SurfaceError::InvalidSize { width, height });
        }
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        let ctx = cairo::Context::new(&surface)?;
        ctx.set_antialias(cairo::Antialias::Best);
        Ok(Self {
            surface,
            ctx,
            width,
            height,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn context(&self) -> &cairo::Context {
        &self.ctx
    }

    /// Wipes every pixel to transparent.
    pub fn clear(&self) {
        render::clear_surface(&self.ctx);
    }

    /// Paints the background over the current content.
    pub fn fill_background(&self, background: &BackgroundState) {
        render::render_background(&self.ctx, background);
    }

    /// Repaints from scratch: clear, background, strokes.
    pub fn redraw(&self, background: &BackgroundState, strokes: &[Stroke]) {
        render::redraw(&self.ctx, background, strokes);
    }

    /// Renders `image` scaled to cover the whole canvas onto a separate layer.
    ///
    /// Edge pixels are padded outward so the image reaches every border at full
    /// color. The canvas itself is not touched.
    pub fn stretch_image(
        &self,
        image: &cairo::ImageSurface,
    ) -> Result<cairo::ImageSurface, cairo::Error> {
        let layer = cairo::ImageSurface::create(cairo::Format::ARgb32, self.width, self.height)?;
        let (image_w, image_h) = (image.width(), image.height());
        if image_w > 0 && image_h > 0 {
            let ctx = cairo::Context::new(&layer)?;
            ctx.scale(
                self.width as f64 / image_w as f64,
                self.height as f64 / image_h as f64,
            );
            ctx.set_source_surface(image, 0.0, 0.0)?;
            ctx.source().set_extend(cairo::Extend::Pad);
            ctx.paint()?;
        }
        layer.flush();
        Ok(layer)
    }

    /// Composites a canvas-sized layer over the current pixels.
    pub fn paint_layer(&self, layer: &cairo::ImageSurface) -> Result<(), cairo::Error> {
        self.ctx.save()?;
        self.ctx.set_source_surface(layer, 0.0, 0.0)?;
        let painted = self.ctx.paint();
        self.ctx.restore()?;
        painted
    }

    /// Encodes the current pixels as PNG.
    pub fn to_png(&self) -> Result<Vec<u8>, cairo::IoError> {
        self.surface.flush();
        let mut buffer = Vec::new();
        self.surface.write_to_png(&mut buffer)?;
        Ok(buffer)
    }

    /// Reads one pixel as premultiplied `[r, g, b, a]`.
    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        let stride = self.surface.stride() as usize;
        let offset = y as usize * stride + x as usize * 4;

        let mut pixel = None;
        self.surface
            .with_data(|data| {
                let raw = u32::from_ne_bytes([
                    data[offset],
                    data[offset + 1],
                    data[offset + 2],
                    data[offset + 3],
                ]);
                pixel = Some([
                    (raw >> 16) as u8,
                    (raw >> 8) as u8,
                    raw as u8,
                    (raw >> 24) as u8,
                ]);
            })
            .ok()?;
        pixel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Color;

    #[test]
    fn rejects_empty_size() {
        assert!(matches!(
            Canvas::new(0, 10),
            Err(SurfaceError::InvalidSize { width: 0, height: 10 })
        ));
    }

    #[test]
    fn background_fill_then_clear() {
        let canvas = Canvas::new(8, 8).unwrap();
        canvas.fill_background(&BackgroundState::new(Color::new(1.0, 0.0, 0.0, 1.0), 1.0));
        assert_eq!(canvas.pixel(3, 3), Some([255, 0, 0, 255]));

        canvas.clear();
        assert_eq!(canvas.pixel(3, 3), Some([0, 0, 0, 0]));
        assert_eq!(canvas.pixel(8, 0), None);
    }

    fn solid_image(width: i32, height: i32, color: Color) -> cairo::ImageSurface {
        let image = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
        {
            let ctx = cairo::Context::new(&image).unwrap();
            ctx.set_source_rgba(color.r, color.g, color.b, color.a);
            ctx.paint().unwrap();
        }
        image
    }

    #[test]
    fn stretched_image_covers_canvas() {
        let canvas = Canvas::new(10, 10).unwrap();
        canvas.fill_background(&BackgroundState::default());
        let image = solid_image(2, 2, Color::new(0.0, 0.0, 1.0, 1.0));

        let layer = canvas.stretch_image(&image).unwrap();
        canvas.paint_layer(&layer).unwrap();

        for (x, y) in [(0, 0), (5, 5), (9, 0), (0, 9), (9, 9)] {
            assert_eq!(canvas.pixel(x, y), Some([0, 0, 255, 255]), "pixel ({x}, {y})");
        }
    }

    #[test]
    fn stretching_leaves_canvas_untouched() {
        let canvas = Canvas::new(10, 10).unwrap();
        canvas.fill_background(&BackgroundState::default());

        let finished = solid_image(2, 2, Color::new(0.0, 0.0, 1.0, 1.0));
        finished.finish();
        assert!(canvas.stretch_image(&finished).is_err());

        canvas.stretch_image(&solid_image(2, 2, Color::new(0.0, 0.0, 1.0, 1.0))).unwrap();
        assert_eq!(canvas.pixel(5, 5), Some([255, 255, 255, 255]));
    }

    #[test]
    fn png_export_has_signature() {
        let canvas = Canvas::new(4, 4).unwrap();
        let png = canvas.to_png().unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }
}
