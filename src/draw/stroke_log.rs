//! Ordered container for the strokes currently on the canvas.

use super::stroke::Stroke;

/// All strokes of the current drawing, in draw order.
///
/// First = bottom, last = top. The log is append-only during drawing; it is
/// wiped wholesale by Clear, image import, and history restores.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrokeLog {
    strokes: Vec<Stroke>,
}

impl StrokeLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self {
            strokes: Vec::new(),
        }
    }

    /// Adds a stroke on top of the existing ones.
    pub fn append(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    /// Removes every stroke.
    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    /// Replaces the whole content with `strokes`.
    pub fn replace(&mut self, strokes: Vec<Stroke>) {
        self.strokes = strokes;
    }

    /// Read-only view in draw order.
    pub fn as_slice(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}
