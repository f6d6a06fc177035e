//! Input handling and the drawing state machine.
//!
//! This module translates host pointer events and toolbar activity into
//! drawing actions. It smooths raw samples, emits strokes, and records a
//! history snapshot at the end of every gesture.

pub mod events;
pub mod smoother;
pub mod state;
pub mod toolbar;

// Re-export commonly used types at module level
pub use events::{Command, PointerEvent};
pub use smoother::Smoother;
pub use state::{DrawingSession, DrawingState, SessionSettings};
pub use toolbar::Toolbar;
