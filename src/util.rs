//! Coordinate mapping helpers.

use crate::draw::Point;

/// Maps an element-relative display position onto the canvas backing store.
///
/// The display box has a fixed logical size regardless of the canvas
/// resolution, so each axis is scaled by `canvas / display`.
///
/// # Arguments
/// * `x`, `y` - Position relative to the element's top-left corner
/// * `display` - Logical element size `(width, height)`
/// * `canvas` - Backing-store size `(width, height)` in pixels
pub fn display_to_canvas(x: f64, y: f64, display: (f64, f64), canvas: (i32, i32)) -> Point {
    let (display_w, display_h) = display;
    let (canvas_w, canvas_h) = canvas;
    Point::new(
        x * (canvas_w as f64 / display_w),
        y * (canvas_h as f64 / display_h),
    )
}
