use crate::draw::Stroke;
use crate::input::events::PointerEvent;
use log::debug;

use super::{DrawingSession, DrawingState};

impl DrawingSession {
    /// Dispatches a pointer or touch event.
    pub fn on_pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { x, y } => self.on_pointer_down(x, y),
            PointerEvent::Move { x, y } => self.on_pointer_move(x, y),
            PointerEvent::Up | PointerEvent::Leave | PointerEvent::Cancel => self.end_gesture(),
        }
    }

    /// Starts a gesture anchored at the given display position.
    ///
    /// A second pointer-down mid-gesture re-anchors without ending the gesture.
    pub fn on_pointer_down(&mut self, x: f64, y: f64) {
        let anchor = self.to_canvas_coords(x, y);
        self.smoother.reset();
        self.state = DrawingState::Drawing { last: anchor };
    }

    /// Feeds a sample to the smoother and draws a stroke to the smoothed point.
    ///
    /// Ignored while idle.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        let DrawingState::Drawing { last } = self.state else {
            return;
        };

        let target = self.smoother.add_sample(self.to_canvas_coords(x, y));
        let stroke = Stroke::new(
            last,
            target,
            self.toolbar.stroke_color(),
            self.toolbar.brush_size(),
        );

        stroke.render(self.canvas.context());
        self.strokes.append(stroke);
        self.state = DrawingState::Drawing { last: target };
    }

    /// Finishes the gesture (pointer-up, leave or cancel) and records history.
    ///
    /// Ignored while idle.
    pub fn end_gesture(&mut self) {
        if !self.is_drawing() {
            return;
        }

        self.history.push(self.snapshot());
        self.state = DrawingState::Idle;
        self.smoother.reset();
        debug!(
            "Gesture finished: {} strokes, history {}/{}",
            self.strokes.len(),
            self.history.len(),
            self.history.capacity()
        );
    }
}
