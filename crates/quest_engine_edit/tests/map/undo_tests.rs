//! Undo/redo of map operations

use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use quest_engine_edit::map::EntityProperty;
use quest_engine_edit::{EntityIndex, EntityModel, EntityType, MapData, MapEditState, MapEvent, MapProperties, Position, Size, UndoState};

fn create_test_state() -> MapEditState {
    let entity = |entity_type: EntityType, position: Position| {
        let mut model = EntityModel::create(EntityIndex::new(0, 0), entity_type);
        model.set_position(position);
        model.into_data()
    };
    let map = MapData::from_parts(
        MapProperties::new((320, 240), "main"),
        [entity(EntityType::Wall, Position::new(0, 0)), entity(EntityType::Pickable, Position::new(32, 32))],
    )
    .unwrap();
    MapEditState::from_map_data(map).unwrap()
}

fn record(state: &mut MapEditState) -> Rc<RefCell<Vec<MapEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let recorder = events.clone();
    state.subscribe(move |event| recorder.borrow_mut().push(event.clone()));
    events
}

#[test]
fn test_every_operation_pushes_one_undo() {
    let mut state = create_test_state();
    let wall = EntityIndex::new(0, 0);
    assert!(!state.can_undo());

    state.add_entity(1, EntityType::Block, Position::new(8, 8)).unwrap();
    state.set_entity_position(wall, Position::new(8, 0)).unwrap();
    state.set_entity_size(wall, Size::new(32, 16)).unwrap();
    state.set_entity_field(wall, "stops_hero", false.into()).unwrap();
    state.set_entity_name(wall, Some("w".to_string())).unwrap();
    state.set_entity_direction(EntityIndex::new(1, 0), Some(2)).unwrap();
    state.remove_entity(EntityIndex::new(0, 1)).unwrap();

    assert_eq!(state.undo_stack().undo_len(), 7);
}

#[test]
fn test_undo_all_restores_map() {
    let mut state = create_test_state();
    let before = state.to_map_data().unwrap();
    let wall = EntityIndex::new(0, 0);

    state.add_entity(0, EntityType::Chest, Position::new(64, 64)).unwrap();
    state.set_entity_field(EntityIndex::new(0, 1), "treasure_name", "heart".into()).unwrap();
    state.set_entity_size(wall, Size::new(48, 16)).unwrap();
    state.remove_entity(wall).unwrap();
    let after = state.to_map_data().unwrap();

    while state.can_undo() {
        state.undo().unwrap();
    }
    assert_eq!(state.to_map_data().unwrap(), before);
    assert!(!state.is_dirty());

    while state.can_redo() {
        state.redo().unwrap();
    }
    assert_eq!(state.to_map_data().unwrap(), after);
    assert!(state.is_dirty());
}

#[test]
fn test_undo_emits_inverse_events() {
    let mut state = create_test_state();
    let index = state.add_entity(0, EntityType::Chest, Position::new(64, 64)).unwrap();
    state.remove_entity(EntityIndex::new(0, 0)).unwrap();
    let events = record(&mut state);

    state.undo().unwrap();
    state.undo().unwrap();

    assert_eq!(
        *events.borrow(),
        vec![
            MapEvent::EntityAdded { index: EntityIndex::new(0, 0) },
            MapEvent::EntityRemoved { index },
        ]
    );
}

#[test]
fn test_undo_field_restores_presentation() {
    let mut state = create_test_state();
    let pickable = EntityIndex::new(0, 1);
    state.set_entity_field(pickable, "treasure_name", "bomb".into()).unwrap();
    assert!(state.get_entity(pickable).unwrap().draw_info().is_some());
    let events = record(&mut state);

    state.undo().unwrap();

    assert!(state.get_entity(pickable).unwrap().draw_info().is_none());
    assert_eq!(
        *events.borrow(),
        vec![MapEvent::EntityChanged {
            index: pickable,
            property: EntityProperty::Field("treasure_name".to_string())
        }]
    );
    assert_eq!(state.redo_description(), Some("Change treasure_name".to_string()));
}

#[test]
fn test_turning_jumper_resizes_in_one_step() {
    let mut state = create_test_state();
    let jumper = state.add_entity(0, EntityType::Jumper, Position::new(64, 64)).unwrap();
    state.set_entity_size(jumper, Size::new(64, 16)).unwrap();
    let events = record(&mut state);

    state.set_entity_direction(jumper, Some(0)).unwrap();
    assert_eq!(state.get_entity(jumper).unwrap().size(), Size::new(16, 64));
    assert_eq!(state.undo_stack().undo_len(), 3);

    state.undo().unwrap();
    let model = state.get_entity(jumper).unwrap();
    assert_eq!(model.direction(), Some(6));
    assert_eq!(model.size(), Size::new(64, 16));

    state.redo().unwrap();
    assert_eq!(state.get_entity(jumper).unwrap().size(), Size::new(16, 64));

    let changed = |property| MapEvent::EntityChanged { index: jumper, property };
    assert_eq!(
        *events.borrow(),
        vec![
            changed(EntityProperty::Direction),
            changed(EntityProperty::Size),
            changed(EntityProperty::Direction),
            changed(EntityProperty::Size),
            changed(EntityProperty::Direction),
            changed(EntityProperty::Size),
        ]
    );
}
