//! Drawing state machine and session state.

use crate::config::Config;
use crate::draw::{BackgroundState, Canvas, Point, StrokeLog, SurfaceError};
use crate::history::{DEFAULT_CAPACITY, HistoryStack, Snapshot};
use crate::input::smoother::{DEFAULT_WINDOW, Smoother};
use crate::input::toolbar::Toolbar;
use crate::util;

/// Whether a gesture is in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawingState {
    /// Waiting for a pointer-down
    Idle,
    /// Pointer held down; strokes are being emitted
    Drawing {
        /// End of the most recent stroke (the next stroke starts here)
        last: Point,
    },
}

/// Tunables that stay fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSettings {
    /// Logical width of the element reporting pointer positions
    pub display_width: f64,
    /// Logical height of the element reporting pointer positions
    pub display_height: f64,
    /// Maximum number of history snapshots
    pub history_capacity: usize,
    /// Number of samples averaged by the smoother
    pub smoothing_window: usize,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            display_width: 500.0,
            display_height: 500.0,
            history_capacity: DEFAULT_CAPACITY,
            smoothing_window: DEFAULT_WINDOW,
        }
    }
}

impl SessionSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            display_width: config.canvas.display_width,
            display_height: config.canvas.display_height,
            history_capacity: config.history.capacity,
            smoothing_window: config.drawing.smoothing_window,
        }
    }
}

/// All state of one drawing session.
///
/// Owns the canvas, the strokes on it, the undo history and the smoother, and
/// reads the [`Toolbar`] whenever a stroke is built or the background repainted.
/// Every handler runs to completion on the caller's thread.
#[derive(Debug)]
pub struct DrawingSession {
    pub(super) canvas: Canvas,
    /// Current toolbar values; changes take effect on the next read
    pub toolbar: Toolbar,
    pub(super) strokes: StrokeLog,
    pub(super) history: HistoryStack,
    pub(super) background: BackgroundState,
    pub(super) smoother: Smoother,
    pub(super) state: DrawingState,
    display_size: (f64, f64),
}

impl DrawingSession {
    /// Starts a session on `canvas` and paints the toolbar's background.
    pub fn new(canvas: Canvas, toolbar: Toolbar, settings: SessionSettings) -> Self {
        let background = toolbar.background();
        let mut session = Self {
            canvas,
            toolbar,
            strokes: StrokeLog::new(),
            history: HistoryStack::with_capacity(settings.history_capacity),
            background,
            smoother: Smoother::with_window(settings.smoothing_window),
            state: DrawingState::Idle,
            display_size: (settings.display_width, settings.display_height),
        };
        session.apply_background();
        session
    }

    /// Allocates the canvas described by `config` and starts a session on it.
    ///
    /// # Errors
    /// Returns [`SurfaceError`] when the canvas cannot be created; nothing is
    /// activated in that case.
    pub fn from_config(config: &Config) -> Result<Self, SurfaceError> {
        let canvas = Canvas::new(config.canvas.width, config.canvas.height)?;
        let toolbar = Toolbar::from_config(&config.drawing, &config.background);
        log::info!(
            "Canvas ready: {}x{} (display {}x{})",
            canvas.width(),
            canvas.height(),
            config.canvas.display_width,
            config.canvas.display_height
        );
        Ok(Self::new(canvas, toolbar, SessionSettings::from_config(config)))
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn strokes(&self) -> &StrokeLog {
        &self.strokes
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn background(&self) -> BackgroundState {
        self.background
    }

    pub fn state(&self) -> DrawingState {
        self.state
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawingState::Drawing { .. })
    }

    /// Maps an element-relative position to canvas coordinates.
    pub fn to_canvas_coords(&self, x: f64, y: f64) -> Point {
        util::display_to_canvas(
            x,
            y,
            self.display_size,
            (self.canvas.width(), self.canvas.height()),
        )
    }

    /// Copies the current strokes and background.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            strokes: self.strokes.as_slice().to_vec(),
            background: self.background,
        }
    }

    /// Replaces live state with `snapshot` and repaints.
    pub(super) fn restore(&mut self, snapshot: Snapshot) {
        self.strokes.replace(snapshot.strokes);
        self.background = snapshot.background;
        self.redraw();
    }

    /// Full repaint from background and strokes.
    pub fn redraw(&self) {
        self.canvas.redraw(&self.background, self.strokes.as_slice());
    }
}
