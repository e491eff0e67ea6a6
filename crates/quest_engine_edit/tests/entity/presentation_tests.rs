//! Draw descriptors and geometry of freshly created entities.

use pretty_assertions::assert_eq;
use quest_engine_edit::entity::{DrawKind, EntityPresentation, ImageSource, ResizeMode, MISSING_PATTERN_COLOR, TREASURE_SPRITE};
use quest_engine_edit::{EntityIndex, EntityModel, EntityType, Position, Rectangle, Size};

fn create(entity_type: EntityType) -> EntityModel {
    EntityModel::create(EntityIndex::new(0, 0), entity_type)
}

fn expected_kind(entity_type: EntityType) -> Option<DrawKind> {
    use EntityType as T;
    match entity_type {
        T::Pickable | T::ShopTreasure => None,
        T::Tile | T::DynamicTile | T::Teletransporter | T::Jumper | T::Wall | T::Sensor | T::Separator => Some(DrawKind::Shape),
        T::Chest | T::Block | T::Crystal | T::CrystalBlock => Some(DrawKind::Sprite),
        T::Destination | T::Destructible | T::Enemy | T::Npc | T::Switch | T::Stream | T::Door | T::Stairs | T::CustomEntity => Some(DrawKind::ImageSet),
    }
}

#[test]
fn test_every_type_has_a_draw_descriptor_of_its_class() {
    for entity_type in EntityType::ALL {
        let model = create(entity_type);
        assert_eq!(model.draw_info().map(|info| info.kind()), expected_kind(entity_type), "{entity_type}");
    }
}

#[test]
fn test_wall_is_a_shape_with_tiled_pixmap() {
    let model = create(EntityType::Wall);
    let shape = model.draw_info().and_then(|info| info.as_shape()).unwrap();
    assert_eq!(shape.pixmap.as_deref(), Some("entity_wall_resizable.png"));
    assert!(shape.tiled);
    assert!(model.is_resizable());
    assert_eq!(model.origin(), Position::new(0, 0));
}

#[test]
fn test_stream_has_one_image_per_direction() {
    let model = create(EntityType::Stream);
    let images = model.draw_info().and_then(|info| info.as_image_set()).unwrap();
    assert_eq!(images.images.len(), 8);
    assert_eq!(images.scale, 0.5);
    for (direction, image) in images.images.iter().enumerate() {
        assert_eq!(image.source, ImageSource::Resource("entity_stream.png".to_string()));
        assert_eq!(image.rect, Rectangle::from(direction as i32 * 32, 0, 32, 32));
    }
    assert_eq!(model.num_directions(), 8);
    assert_eq!(model.direction(), Some(6));
    assert_eq!(images.image_for_direction(model.direction()), images.images.get(6));
    assert_eq!(model.origin(), Position::new(8, 13));
    assert!(!model.is_resizable());
}

#[test]
fn test_empty_tile_shows_placeholder() {
    let model = create(EntityType::Tile);
    let shape = model.draw_info().and_then(|info| info.as_shape()).unwrap();
    assert_eq!(shape.background_color, MISSING_PATTERN_COLOR);
    assert_eq!(model.resize_mode(), ResizeMode::MultiDimension);
}

#[test]
fn test_shop_treasure_defaults() {
    let model = create(EntityType::ShopTreasure);
    assert_eq!(model.size(), Size::new(32, 32));
    assert_eq!(model.origin(), Position::new(16, 29));
    assert!(model.draw_info().is_none());
    assert!(!model.is_traversable());
    assert_eq!(TREASURE_SPRITE, "entities/items");
}

#[test]
fn test_fixed_size_entities_have_default_size() {
    for entity_type in EntityType::ALL {
        let presentation = EntityPresentation::of(entity_type);
        let model = create(entity_type);
        assert_eq!(model.size(), presentation.size, "{entity_type}");
        assert!(model.is_size_valid(model.size()), "{entity_type}");
    }
}

#[test]
fn test_default_direction_is_valid() {
    for entity_type in EntityType::ALL {
        let model = create(entity_type);
        assert!(model.is_direction_valid(model.direction()), "{entity_type}");
        assert_eq!(model.has_direction_property(), entity_type.has_direction(), "{entity_type}");
    }
}

#[test]
fn test_table_resize_mode_is_what_new_entities_report() {
    for entity_type in EntityType::ALL {
        assert_eq!(create(entity_type).resize_mode(), EntityPresentation::of(entity_type).resize_mode, "{entity_type}");
    }
}

#[test]
fn test_bounding_box_is_placed_by_origin() {
    let mut model = create(EntityType::Pickable);
    model.set_position(Position::new(100, 100));
    assert_eq!(model.bounding_box(), Rectangle::from(92, 87, 16, 16));
    assert!(model.bounding_box().contains((95, 90)));
}
