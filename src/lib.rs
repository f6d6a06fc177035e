//! Freehand drawing surface with smoothed strokes and a bounded undo history.
//!
//! [`input::DrawingSession`] is the entry point: feed it pointer events and
//! toolbar changes, and it paints onto a [`draw::Canvas`] while recording a
//! snapshot in its [`history::HistoryStack`] at the end of every gesture.

pub mod config;
pub mod draw;
pub mod file;
pub mod history;
pub mod input;
pub mod script;
pub mod util;

pub use config::Config;
pub use input::DrawingSession;
