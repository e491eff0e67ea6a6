//! Creation, loading and geometry edits of entity models.

use pretty_assertions::assert_eq;
use quest_engine_edit::entity::ResizeMode;
use quest_engine_edit::{EditorError, EntityData, EntityIndex, EntityModel, EntityType, FieldValue, Size};

#[test]
fn test_new_shop_treasure_costs_ten() {
    let model = EntityModel::create(EntityIndex::new(0, 0), EntityType::ShopTreasure);
    assert_eq!(model.get_field("price"), Some(&FieldValue::Integer(10)));
}

#[test]
fn test_loaded_shop_treasure_keeps_its_price() {
    let data = EntityData::new(EntityType::ShopTreasure);
    let model = EntityModel::from_data(EntityIndex::new(0, 0), data);
    assert_eq!(model.get_field("price"), Some(&FieldValue::Integer(0)));
}

#[test]
fn test_loaded_treasure_variant_is_repaired() {
    let mut data = EntityData::new(EntityType::Pickable);
    data.set_field("treasure_name", "bomb".into()).unwrap();
    data.set_field("treasure_variant", 0.into()).unwrap();

    let model = EntityModel::from_data(EntityIndex::new(0, 0), data);

    assert_eq!(model.get_field("treasure_variant"), Some(&FieldValue::Integer(1)));
    assert_eq!(model.draw_info().and_then(|info| info.as_sprite()).unwrap().direction, 0);
}

#[test]
fn test_create_uses_index_layer() {
    let model = EntityModel::create(EntityIndex::new(2, 5), EntityType::Chest);
    assert_eq!(model.index(), EntityIndex::new(2, 5));
    assert_eq!(model.data().layer, 2);
}

#[test]
fn test_from_data_repairs_size_and_direction() {
    let mut data = EntityData::new(EntityType::Stream);
    data.direction = Some(12);
    let model = EntityModel::from_data(EntityIndex::new(0, 0), data);
    assert_eq!(model.size(), Size::new(16, 16));
    assert_eq!(model.direction(), Some(6));
}

#[test]
fn test_from_data_keeps_stored_values() {
    let mut data = EntityData::new(EntityType::Wall);
    data.size = Size::new(64, 24);
    data.set_field("stops_hero", false.into()).unwrap();
    let model = EntityModel::from_data(EntityIndex::new(0, 0), data);
    assert_eq!(model.size(), Size::new(64, 24));
    assert!(model.is_traversable());
}

#[test]
fn test_resize_rules() {
    let mut wall = EntityModel::create(EntityIndex::new(0, 0), EntityType::Wall);
    wall.set_size(Size::new(48, 8)).unwrap();
    assert_eq!(wall.size(), Size::new(48, 8));
    assert!(matches!(wall.set_size(Size::new(47, 8)), Err(EditorError::InvalidSize { .. })));
    assert!(matches!(wall.set_size(Size::new(0, 0)), Err(EditorError::InvalidSize { .. })));
    assert_eq!(wall.size(), Size::new(48, 8));

    let mut chest = EntityModel::create(EntityIndex::new(0, 0), EntityType::Chest);
    assert!(!chest.is_resizable());
    assert!(chest.set_size(Size::new(32, 32)).is_err());

    let separator = EntityModel::create(EntityIndex::new(0, 0), EntityType::Separator);
    assert_eq!(separator.resize_mode(), ResizeMode::SingleDimension);
    assert!(separator.is_size_valid(Size::new(16, 64)));
    assert!(!separator.is_size_valid(Size::new(32, 64)));
}

#[test]
fn test_jumper_resize_mode_follows_direction() {
    let mut jumper = EntityModel::create(EntityIndex::new(0, 0), EntityType::Jumper);
    assert_eq!(jumper.resize_mode(), ResizeMode::HorizontalOnly);
    assert!(jumper.is_size_valid(Size::new(64, 16)));
    assert!(!jumper.is_size_valid(Size::new(64, 64)));

    jumper.set_direction(Some(0)).unwrap();
    assert_eq!(jumper.resize_mode(), ResizeMode::VerticalOnly);

    jumper.set_direction(Some(3)).unwrap();
    assert_eq!(jumper.resize_mode(), ResizeMode::Square);
    assert!(jumper.is_size_valid(Size::new(32, 32)));
}

#[test]
fn test_turning_jumper_keeps_its_size_valid() {
    let mut jumper = EntityModel::create(EntityIndex::new(0, 0), EntityType::Jumper);
    jumper.set_size(Size::new(64, 16)).unwrap();

    jumper.set_direction(Some(0)).unwrap();
    assert_eq!(jumper.size(), Size::new(16, 64));
    assert!(jumper.is_size_valid(jumper.size()));

    jumper.set_direction(Some(1)).unwrap();
    assert_eq!(jumper.size(), Size::new(64, 64));
    assert!(jumper.is_size_valid(jumper.size()));

    jumper.set_direction(Some(2)).unwrap();
    assert_eq!(jumper.size(), Size::new(64, 16));
}

#[test]
fn test_direction_validation() {
    let mut door = EntityModel::create(EntityIndex::new(0, 0), EntityType::Door);
    assert!(matches!(door.set_direction(Some(4)), Err(EditorError::InvalidDirection { .. })));
    assert!(door.set_direction(None).is_err());
    assert_eq!(door.direction(), Some(1));

    let mut block = EntityModel::create(EntityIndex::new(0, 0), EntityType::Block);
    assert_eq!(block.direction(), None);
    block.set_direction(Some(2)).unwrap();
    block.set_direction(None).unwrap();

    let mut wall = EntityModel::create(EntityIndex::new(0, 0), EntityType::Wall);
    assert!(wall.set_direction(Some(0)).is_err());
}

#[test]
fn test_direction_change_updates_sprite() {
    let mut npc = EntityModel::create(EntityIndex::new(0, 0), EntityType::Npc);
    npc.set_field("sprite", "npc/villager".into()).unwrap();
    npc.set_direction(Some(0)).unwrap();
    let sprite = npc.draw_info().and_then(|info| info.as_sprite()).unwrap();
    assert_eq!(sprite.direction, 0);
}
