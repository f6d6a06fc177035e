//! Moving-average smoothing of raw pointer samples.

use crate::draw::Point;
use std::collections::VecDeque;

/// Number of samples averaged when no window is configured.
pub const DEFAULT_WINDOW: usize = 5;

/// Rolling window over the most recent pointer samples.
///
/// Each new sample evicts the oldest once the window is full; the smoothed
/// position is the plain mean of what remains.
#[derive(Debug, Clone)]
pub struct Smoother {
    samples: VecDeque<Point>,
    window: usize,
}

impl Default for Smoother {
    fn default() -> Self {
        Self::new()
    }
}

impl Smoother {
    pub fn new() -> Self {
        Self::with_window(DEFAULT_WINDOW)
    }

    /// A smoother averaging up to `window` samples (at least one).
    pub fn with_window(window: usize) -> Self {
        let window = window.max(1);
        Self {
            samples: VecDeque::with_capacity(window + 1),
            window,
        }
    }

    /// Adds a sample and returns the mean of the current window.
    pub fn add_sample(&mut self, point: Point) -> Point {
        self.samples.push_back(point);
        if self.samples.len() > self.window {
            self.samples.pop_front();
        }

        let count = self.samples.len() as f64;
        let (sum_x, sum_y) = self
            .samples
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Point::new(sum_x / count, sum_y / count)
    }

    /// Forgets every sample.
    pub fn reset(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn window(&self) -> usize {
        self.window
    }
}
