use super::*;
use crate::draw::{BackgroundState, Color, Point, Stroke};

/// Snapshot whose single stroke starts at `x`, so entries are easy to tell apart.
fn snapshot(x: f64) -> Snapshot {
    Snapshot {
        strokes: vec![Stroke::new(
            Point::new(x, 0.0),
            Point::new(x, 1.0),
            Color::new(0.0, 0.0, 0.0, 1.0),
            2,
        )],
        background: BackgroundState::default(),
    }
}

fn marker(snapshot: &Snapshot) -> f64 {
    snapshot.strokes[0].start().x
}

#[test]
fn empty_stack_has_no_cursor() {
    let mut history = HistoryStack::new();
    assert_eq!(history.cursor(), None);
    assert!(history.undo().is_none());
    assert!(history.redo().is_none());
    assert_eq!(history.cursor(), None);
}

#[test]
fn push_advances_cursor() {
    let mut history = HistoryStack::new();
    history.push(snapshot(0.0));
    assert_eq!(history.cursor(), Some(0));
    history.push(snapshot(1.0));
    assert_eq!(history.cursor(), Some(1));
    assert_eq!(history.len(), 2);
}

#[test]
fn cannot_undo_past_first_entry() {
    let mut history = HistoryStack::new();
    history.push(snapshot(0.0));
    assert!(!history.can_undo());
    assert!(history.undo().is_none());
    assert_eq!(history.cursor(), Some(0));
}

#[test]
fn undo_then_redo_restores_same_snapshot() {
    let mut history = HistoryStack::new();
    for i in 0..4 {
        history.push(snapshot(i as f64));
    }
    let before = history.current().cloned().unwrap();

    let undone = history.undo().unwrap();
    assert_eq!(marker(&undone), 2.0);

    let redone = history.redo().unwrap();
    assert_eq!(redone, before);
    assert!(history.redo().is_none());
}

#[test]
fn capacity_is_never_exceeded() {
    let mut history = HistoryStack::new();
    for i in 0..25 {
        history.push(snapshot(i as f64));
        assert!(history.len() <= DEFAULT_CAPACITY);
        assert_eq!(history.cursor(), Some(history.len() - 1));
    }

    assert_eq!(history.len(), 10);
    assert_eq!(marker(history.current().unwrap()), 24.0);

    // Oldest surviving entry is push #15.
    let mut oldest = None;
    while let Some(s) = history.undo() {
        oldest = Some(marker(&s));
    }
    assert_eq!(oldest, Some(15.0));
    assert_eq!(history.cursor(), Some(0));
}

#[test]
fn push_after_undo_discards_redo_branch() {
    let mut history = HistoryStack::new();
    for i in 0..5 {
        history.push(snapshot(i as f64));
    }
    history.undo();
    history.undo();
    let cursor_before = history.cursor().unwrap();
    assert_eq!(cursor_before, 2);

    history.push(snapshot(99.0));
    assert_eq!(history.len(), cursor_before + 2);
    assert_eq!(history.cursor(), Some(cursor_before + 1));
    assert!(history.redo().is_none());
    assert_eq!(marker(&history.undo().unwrap()), 2.0);
}

#[test]
fn branch_discard_at_capacity_still_caps() {
    let mut history = HistoryStack::new();
    for i in 0..10 {
        history.push(snapshot(i as f64));
    }
    history.undo();
    history.push(snapshot(50.0));
    assert_eq!(history.len(), 10);
    assert_eq!(history.cursor(), Some(9));
    assert_eq!(marker(history.current().unwrap()), 50.0);
}

#[test]
fn clear_resets_everything() {
    let mut history = HistoryStack::new();
    history.push(snapshot(0.0));
    history.push(snapshot(1.0));
    history.clear();
    assert!(history.is_empty());
    assert_eq!(history.cursor(), None);
    assert!(!history.can_redo());
}

#[test]
fn custom_capacity_is_respected() {
    let mut history = HistoryStack::with_capacity(3);
    for i in 0..5 {
        history.push(snapshot(i as f64));
    }
    assert_eq!(history.len(), 3);
    assert_eq!(history.capacity(), 3);
    assert_eq!(HistoryStack::with_capacity(0).capacity(), 1);
}

#[test]
fn returned_snapshots_do_not_alias_entries() {
    let mut history = HistoryStack::new();
    history.push(snapshot(0.0));
    history.push(snapshot(1.0));

    let mut undone = history.undo().unwrap();
    undone.strokes.clear();

    assert_eq!(history.current().unwrap().strokes.len(), 1);
}
