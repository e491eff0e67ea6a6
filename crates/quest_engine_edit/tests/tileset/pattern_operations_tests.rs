//! Tests for pattern create/delete/rename and attribute edits

use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use quest_engine_edit::tileset::PatternProperty;
use quest_engine_edit::{Color, EditorError, EngineError, Ground, PatternData, Rectangle, TilesetData, TilesetEditState, TilesetEvent};

fn frame() -> Rectangle {
    Rectangle::from(0, 0, 16, 16)
}

/// Helper to create a tileset state with patterns and a recorder of its events
fn create_test_state(ids: &[&str]) -> (TilesetEditState, Rc<RefCell<Vec<TilesetEvent>>>) {
    let mut tileset = TilesetData::new(Color::BLACK);
    for id in ids {
        tileset.add_pattern(id, PatternData::new(frame())).unwrap();
    }
    let mut state = TilesetEditState::new(tileset);
    let events = Rc::new(RefCell::new(Vec::new()));
    let recorder = events.clone();
    state.subscribe(move |event| recorder.borrow_mut().push(event.clone()));
    (state, events)
}

fn ids(state: &TilesetEditState) -> Vec<String> {
    state.pattern_ids().map(str::to_string).collect()
}

fn created(index: usize, id: &str) -> TilesetEvent {
    TilesetEvent::PatternCreated { index, id: id.to_string() }
}

fn deleted(index: usize, id: &str) -> TilesetEvent {
    TilesetEvent::PatternDeleted { index, id: id.to_string() }
}

// ============================================================================
// Create / Delete
// ============================================================================

#[test]
fn test_create_inserts_at_sorted_rank() {
    let (mut state, events) = create_test_state(&["a", "c", "d"]);

    let event = state.create_pattern("b", frame()).unwrap();

    assert_eq!(event, created(1, "b"));
    assert_eq!(*events.borrow(), vec![created(1, "b")]);
    assert_eq!(ids(&state), vec!["a", "b", "c", "d"]);
    assert_eq!(state.pattern_index("c"), Some(2));
    assert_eq!(state.pattern_index("d"), Some(3));
}

#[test]
fn test_delete_is_inverse_of_create() {
    let (mut state, events) = create_test_state(&["a", "c", "d"]);
    state.create_pattern("b", frame()).unwrap();

    let event = state.delete_pattern("b").unwrap();

    assert_eq!(event, deleted(1, "b"));
    assert_eq!(ids(&state), vec!["a", "c", "d"]);
    assert_eq!(events.borrow().len(), 2);
}

#[test]
fn test_create_duplicate_fails_without_event() {
    let (mut state, events) = create_test_state(&["a"]);
    let result = state.create_pattern("a", frame());
    assert!(matches!(result, Err(EditorError::Engine(EngineError::DuplicatePatternId { .. }))));
    assert!(events.borrow().is_empty());
    assert_eq!(state.undo_stack().undo_len(), 0);
}

#[test]
fn test_delete_unknown_fails_without_event() {
    let (mut state, events) = create_test_state(&["a"]);
    assert!(matches!(state.delete_pattern("b"), Err(EditorError::Engine(EngineError::UnknownPatternId { .. }))));
    assert!(matches!(
        state.delete_pattern_at(1),
        Err(EditorError::Engine(EngineError::PatternIndexOutOfRange { index: 1, count: 1 }))
    ));
    assert!(events.borrow().is_empty());
    assert_eq!(state.pattern_count(), 1);
}

#[test]
fn test_delete_pattern_at_index() {
    let (mut state, _events) = create_test_state(&["a", "b", "c"]);
    assert_eq!(state.delete_pattern_at(2).unwrap(), deleted(2, "c"));
}

#[test]
fn test_delete_many_reports_descending_indices() {
    let (mut state, events) = create_test_state(&["a", "b", "c", "d", "e"]);

    let result = state.delete_patterns(&["b", "e", "c"]).unwrap();

    let expected = vec![deleted(4, "e"), deleted(2, "c"), deleted(1, "b")];
    assert_eq!(result, expected);
    assert_eq!(*events.borrow(), expected);
    assert_eq!(ids(&state), vec!["a", "d"]);
}

#[test]
fn test_delete_many_with_unknown_id_changes_nothing() {
    let (mut state, events) = create_test_state(&["a", "b"]);
    assert!(state.delete_patterns(&["a", "x"]).is_err());
    assert_eq!(ids(&state), vec!["a", "b"]);
    assert!(events.borrow().is_empty());
}

// ============================================================================
// Rename
// ============================================================================

#[test]
fn test_rename_reports_both_indices() {
    let (mut state, events) = create_test_state(&["a", "b", "c"]);

    let event = state.rename_pattern("a", "z").unwrap();

    let expected = TilesetEvent::PatternRenamed {
        old_index: 0,
        old_id: "a".to_string(),
        new_index: 2,
        new_id: "z".to_string(),
    };
    assert_eq!(event, Some(expected.clone()));
    assert_eq!(*events.borrow(), vec![expected]);
    assert_eq!(ids(&state), vec!["b", "c", "z"]);
}

#[test]
fn test_rename_to_same_id_is_no_change() {
    let (mut state, events) = create_test_state(&["a"]);
    assert_eq!(state.rename_pattern("a", "a").unwrap(), None);
    assert!(events.borrow().is_empty());
    assert!(state.rename_pattern("x", "x").is_err());
}

#[test]
fn test_rename_errors() {
    let (mut state, events) = create_test_state(&["a", "b"]);
    assert!(matches!(
        state.rename_pattern("a", "b"),
        Err(EditorError::Engine(EngineError::DuplicatePatternId { .. }))
    ));
    assert!(matches!(
        state.rename_pattern("x", "y"),
        Err(EditorError::Engine(EngineError::UnknownPatternId { .. }))
    ));
    assert!(matches!(state.rename_pattern("a", ""), Err(EditorError::Engine(EngineError::InvalidPatternId { .. }))));
    assert!(events.borrow().is_empty());
    assert_eq!(ids(&state), vec!["a", "b"]);
}

// ============================================================================
// Attributes
// ============================================================================

#[test]
fn test_set_ground_reports_change() {
    let (mut state, events) = create_test_state(&["a", "wall"]);

    let event = state.set_pattern_ground("wall", Ground::Wall).unwrap();

    let expected = TilesetEvent::PatternChanged {
        index: 1,
        id: "wall".to_string(),
        property: PatternProperty::Ground,
    };
    assert_eq!(event, Some(expected.clone()));
    assert_eq!(*events.borrow(), vec![expected]);
    assert_eq!(state.pattern("wall").unwrap().ground, Ground::Wall);

    assert_eq!(state.set_pattern_ground("wall", Ground::Wall).unwrap(), None);
    assert_eq!(events.borrow().len(), 1);
}

#[test]
fn test_set_frames_requires_a_frame() {
    let (mut state, _events) = create_test_state(&["water"]);
    assert!(state.set_pattern_frames("water", Vec::new(), 100).is_err());

    let frames = vec![Rectangle::from(0, 0, 16, 16), Rectangle::from(16, 0, 16, 16), Rectangle::from(32, 0, 16, 16)];
    state.set_pattern_frames("water", frames, 100).unwrap();
    let pattern = state.pattern("water").unwrap();
    assert!(pattern.is_animated());
    assert_eq!(pattern.frame_delay, 100);
}

#[test]
fn test_set_background_color() {
    let (mut state, events) = create_test_state(&[]);
    let color = Color::new(10, 20, 30);
    assert_eq!(state.set_background_color(color), Some(TilesetEvent::BackgroundColorChanged { color }));
    assert_eq!(state.set_background_color(color), None);
    assert_eq!(state.background_color(), color);
    assert_eq!(events.borrow().len(), 1);
}

#[test]
fn test_unsubscribed_listener_is_not_called() {
    let (mut state, events) = create_test_state(&[]);
    let other = Rc::new(RefCell::new(0));
    let counter = other.clone();
    let id = state.subscribe(move |_| *counter.borrow_mut() += 1);

    state.create_pattern("a", frame()).unwrap();
    assert!(state.unsubscribe(id));
    assert!(!state.unsubscribe(id));
    state.create_pattern("b", frame()).unwrap();

    assert_eq!(*other.borrow(), 1);
    assert_eq!(events.borrow().len(), 2);
}
