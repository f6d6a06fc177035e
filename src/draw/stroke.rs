//! Stroke segments and the points they connect.

use super::color::Color;

/// A position in canvas (backing-store) coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A single rendered line segment.
///
/// Freehand curves are built from many short strokes, each one running from the
/// previous smoothed position to the next. Fields are fixed at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    start: Point,
    end: Point,
    color: Color,
    width: u32,
}

impl Stroke {
    /// Creates a stroke. A zero width is raised to one pixel.
    pub fn new(start: Point, end: Point, color: Color, width: u32) -> Self {
        Self {
            start,
            end,
            color,
            width: width.max(1),
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Line width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Draws the segment with round caps and joins so consecutive segments fuse
    /// into one continuous curve.
    pub fn render(&self, ctx: &cairo::Context) {
        let color = self.color;
        ctx.set_source_rgba(color.r, color.g, color.b, color.a);
        ctx.set_line_width(self.width as f64);
        ctx.set_line_cap(cairo::LineCap::Round);
        ctx.set_line_join(cairo::LineJoin::Round);

        ctx.move_to(self.start.x, self.start.y);
        ctx.line_to(self.end.x, self.end.y);
        let _ = ctx.stroke();
    }
}
