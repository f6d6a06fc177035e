//! Cairo-based repaint of the whole drawing.

use super::background::BackgroundState;
use super::stroke::Stroke;

/// Wipes the surface to fully transparent pixels.
pub fn clear_surface(ctx: &cairo::Context) {
    let _ = ctx.save();
    ctx.set_operator(cairo::Operator::Clear);
    let _ = ctx.paint();
    let _ = ctx.restore();
}

/// Fills the whole surface with the background color at its transparency.
///
/// Composites over whatever is already there; callers clear first, so the
/// result is a plain replacement.
pub fn render_background(ctx: &cairo::Context, background: &BackgroundState) {
    let fill = background.fill_color();
    ctx.set_source_rgba(fill.r, fill.g, fill.b, fill.a);
    let _ = ctx.paint();
}

/// Renders strokes in order; later strokes land on top.
pub fn render_strokes(ctx: &cairo::Context, strokes: &[Stroke]) {
    for stroke in strokes {
        stroke.render(ctx);
    }
}

/// Full repaint: clear, background fill, then every stroke.
pub fn redraw(ctx: &cairo::Context, background: &BackgroundState, strokes: &[Stroke]) {
    clear_surface(ctx);
    render_background(ctx, background);
    render_strokes(ctx, strokes);
}
