//! Generic input event types delivered by the host.

/// Pointer or touch event in element-relative display coordinates.
///
/// Mouse and touch sources map onto the same variants: touchstart is `Down`,
/// touchmove is `Move`, touchend is `Up` and touchcancel is `Cancel`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Button pressed or finger placed
    Down { x: f64, y: f64 },
    /// Pointer moved (ignored unless a gesture is in progress)
    Move { x: f64, y: f64 },
    /// Button released or finger lifted
    Up,
    /// Pointer left the drawing element
    Leave,
    /// Host aborted the gesture
    Cancel,
}

/// Toolbar buttons that take no arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Wipe strokes and history, refill the background
    Clear,
    /// Step back one history entry
    Undo,
    /// Step forward one history entry
    Redo,
}
