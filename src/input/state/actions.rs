use crate::config::ExportConfig;
use crate::file::{self, ExportError, ImportError};
use crate::input::events::Command;
use log::{debug, info};
use std::path::{Path, PathBuf};

use super::DrawingSession;

impl DrawingSession {
    /// Handles a toolbar button.
    pub fn handle_command(&mut self, command: Command) {
        match command {
            Command::Clear => self.clear(),
            Command::Undo => {
                self.undo();
            }
            Command::Redo => {
                self.redo();
            }
        }
    }

    /// Wipes strokes and history and repaints the background.
    pub fn clear(&mut self) {
        self.canvas.clear();
        self.history.clear();
        self.strokes.clear();
        self.canvas.fill_background(&self.background);
        info!("Canvas cleared");
    }

    /// Restores the previous snapshot. Returns `false` when there is none.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.restore(snapshot);
                debug!("Undo -> history index {:?}", self.history.cursor());
                true
            }
            None => false,
        }
    }

    /// Re-applies the next snapshot. Returns `false` when there is none.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.restore(snapshot);
                debug!("Redo -> history index {:?}", self.history.cursor());
                true
            }
            None => false,
        }
    }

    /// Reads the background controls and repaints with them.
    ///
    /// Does not record history.
    pub fn apply_background(&mut self) {
        self.background = self.toolbar.background();
        self.redraw();
    }

    /// Replaces the drawing with an image file stretched over the canvas.
    ///
    /// Strokes are discarded and the background is refilled beneath the image;
    /// history is left as is. On error the canvas is unchanged.
    pub fn import_image(&mut self, path: &Path) -> Result<(), ImportError> {
        let image = file::load_image(path)?;
        self.place_image(&image)?;
        info!("Imported background image {}", path.display());
        Ok(())
    }

    /// Like [`DrawingSession::import_image`], for already-read file contents.
    pub fn import_image_bytes(&mut self, bytes: &[u8]) -> Result<(), ImportError> {
        let image = file::decode_image(bytes)?;
        self.place_image(&image)?;
        info!("Imported background image ({} bytes)", bytes.len());
        Ok(())
    }

    /// Stretches `image` over a fresh background, discarding strokes.
    ///
    /// The image is scaled before anything is wiped, so a failure here keeps
    /// the current drawing.
    pub(super) fn place_image(&mut self, image: &cairo::ImageSurface) -> Result<(), ImportError> {
        let layer = self.canvas.stretch_image(image)?;
        self.canvas.clear();
        self.canvas.fill_background(&self.background);
        if let Err(err) = self.canvas.paint_layer(&layer) {
            self.redraw();
            return Err(err.into());
        }
        self.strokes.clear();
        Ok(())
    }

    /// Encodes the current canvas as PNG.
    pub fn export_png(&self) -> Result<Vec<u8>, ExportError> {
        Ok(self.canvas.to_png()?)
    }

    /// Exports the canvas to `path`.
    pub fn save_to(&self, path: &Path) -> Result<PathBuf, ExportError> {
        let saved = file::save_png(&self.export_png()?, path)?;
        info!("Drawing exported to {}", saved.display());
        Ok(saved)
    }

    /// Exports the canvas into the configured directory with a generated name.
    pub fn save(&self, config: &ExportConfig) -> Result<PathBuf, ExportError> {
        let saved = file::save_to_directory(&self.export_png()?, config)?;
        info!("Drawing exported to {}", saved.display());
        Ok(saved)
    }
}
