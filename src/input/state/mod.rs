mod actions;
mod pointer;
mod session;

pub use session::{DrawingSession, DrawingState, SessionSettings};
