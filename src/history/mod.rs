//! Bounded undo/redo timeline over drawing snapshots.
//!
//! The history is linear: making a new edit after undoing discards the redo
//! branch. Only the most recent [`DEFAULT_CAPACITY`] snapshots are kept; the
//! oldest is evicted when a push would exceed the capacity.

#[cfg(test)]
mod tests;

use crate::draw::{BackgroundState, Stroke};
use log::debug;
use std::collections::VecDeque;

/// Number of snapshots kept when no capacity is configured.
pub const DEFAULT_CAPACITY: usize = 10;

/// Independent copy of the drawing state at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub strokes: Vec<Stroke>,
    pub background: BackgroundState,
}

/// Linear, capacity-bounded undo/redo stack.
///
/// `cursor` is `None` exactly when `entries` is empty; otherwise it indexes the
/// snapshot that matches what is on screen.
#[derive(Debug, Clone)]
pub struct HistoryStack {
    entries: VecDeque<Snapshot>,
    cursor: Option<usize>,
    capacity: usize,
}

impl Default for HistoryStack {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStack {
    /// Creates an empty stack holding up to [`DEFAULT_CAPACITY`] snapshots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty stack holding up to `capacity` snapshots (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            cursor: None,
            capacity,
        }
    }

    /// Records a new state after the cursor, dropping any redo branch.
    pub fn push(&mut self, snapshot: Snapshot) {
        match self.cursor {
            Some(cursor) => self.entries.truncate(cursor + 1),
            None => self.entries.clear(),
        }

        self.entries.push_back(snapshot);
        if self.entries.len() > self.capacity {
            self.entries.pop_front();
            debug!("History full; evicted oldest snapshot");
        }
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Steps back one state. Returns `None` at the oldest entry or when empty.
    pub fn undo(&mut self) -> Option<Snapshot> {
        let cursor = self.cursor.filter(|&c| c > 0)? - 1;
        self.cursor = Some(cursor);
        self.entries.get(cursor).cloned()
    }

    /// Steps forward one state. Returns `None` at the newest entry or when empty.
    pub fn redo(&mut self) -> Option<Snapshot> {
        let cursor = self.cursor.filter(|&c| c + 1 < self.entries.len())? + 1;
        self.cursor = Some(cursor);
        self.entries.get(cursor).cloned()
    }

    /// Forgets every snapshot.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    pub fn can_redo(&self) -> bool {
        self.cursor.is_some_and(|c| c + 1 < self.entries.len())
    }

    /// Index of the current snapshot, `None` when nothing has been recorded.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// The snapshot at the cursor.
    pub fn current(&self) -> Option<&Snapshot> {
        self.cursor.and_then(|c| self.entries.get(c))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
