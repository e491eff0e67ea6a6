//! Specific fields of each entity type, with the defaults used when a
//! record omits them.

use crate::{DefaultValue, EntityType, FieldSpec};

const fn boolean(key: &'static str, value: bool) -> FieldSpec {
    FieldSpec::new(key, DefaultValue::Boolean(value))
}

const fn integer(key: &'static str, value: i32) -> FieldSpec {
    FieldSpec::new(key, DefaultValue::Integer(value))
}

const fn string(key: &'static str, value: &'static str) -> FieldSpec {
    FieldSpec::new(key, DefaultValue::String(value))
}

const TILE: &[FieldSpec] = &[string("pattern", ""), string("tileset", "")];

const DYNAMIC_TILE: &[FieldSpec] = &[string("pattern", ""), string("tileset", ""), boolean("enabled_at_start", true)];

const DESTINATION: &[FieldSpec] = &[string("sprite", ""), string("starting_location_mode", "when_world_changes")];

const TELETRANSPORTER: &[FieldSpec] = &[
    string("sprite", ""),
    string("sound", ""),
    string("transition", "fade"),
    string("destination_map", ""),
    string("destination", ""),
];

const PICKABLE: &[FieldSpec] = &[
    string("treasure_name", ""),
    integer("treasure_variant", 1),
    string("treasure_savegame_variable", ""),
];

const DESTRUCTIBLE: &[FieldSpec] = &[
    string("treasure_name", ""),
    integer("treasure_variant", 1),
    string("treasure_savegame_variable", ""),
    string("sprite", ""),
    string("destruction_sound", ""),
    integer("weight", 0),
    boolean("can_be_cut", false),
    boolean("can_explode", false),
    boolean("can_regenerate", false),
    integer("damage_on_enemies", 1),
    string("ground", "wall"),
];

const CHEST: &[FieldSpec] = &[
    string("treasure_name", ""),
    integer("treasure_variant", 1),
    string("treasure_savegame_variable", ""),
    string("sprite", "entities/chest"),
    string("opening_method", "interaction"),
    string("opening_condition", ""),
    boolean("opening_condition_consumed", false),
    string("cannot_open_dialog", ""),
];

const JUMPER: &[FieldSpec] = &[integer("jump_length", 40)];

const ENEMY: &[FieldSpec] = &[
    string("breed", ""),
    integer("rank", 0),
    string("savegame_variable", ""),
    string("treasure_name", ""),
    integer("treasure_variant", 1),
    string("treasure_savegame_variable", ""),
];

const NPC: &[FieldSpec] = &[
    integer("subtype", 1),
    string("sprite", ""),
    string("behavior", "map"),
    boolean("traversable", false),
];

const BLOCK: &[FieldSpec] = &[
    string("sprite", "entities/block"),
    boolean("pushable", true),
    boolean("pullable", false),
    integer("max_moves", -1),
];

const SWITCH: &[FieldSpec] = &[
    string("subtype", "walkable"),
    string("sprite", ""),
    string("sound", ""),
    boolean("needs_block", false),
    boolean("inactivate_when_leaving", false),
];

const WALL: &[FieldSpec] = &[
    boolean("stops_hero", true),
    boolean("stops_npcs", true),
    boolean("stops_enemies", true),
    boolean("stops_blocks", true),
    boolean("stops_projectiles", true),
];

const CRYSTAL_BLOCK: &[FieldSpec] = &[integer("subtype", 0)];

const SHOP_TREASURE: &[FieldSpec] = &[
    string("treasure_name", ""),
    integer("treasure_variant", 1),
    string("treasure_savegame_variable", ""),
    integer("price", 0),
    string("font", ""),
    string("dialog", ""),
];

const STREAM: &[FieldSpec] = &[
    string("sprite", ""),
    integer("speed", 64),
    boolean("allow_movement", true),
    boolean("allow_attack", true),
    boolean("allow_item", true),
];

const DOOR: &[FieldSpec] = &[
    string("sprite", ""),
    string("savegame_variable", ""),
    string("opening_method", "none"),
    string("opening_condition", ""),
    boolean("opening_condition_consumed", false),
    string("cannot_open_dialog", ""),
];

const STAIRS: &[FieldSpec] = &[integer("subtype", 0)];

const CUSTOM_ENTITY: &[FieldSpec] = &[string("sprite", ""), string("model", "")];

const NONE: &[FieldSpec] = &[];

pub(crate) fn fields_of(entity_type: EntityType) -> &'static [FieldSpec] {
    match entity_type {
        EntityType::Tile => TILE,
        EntityType::DynamicTile => DYNAMIC_TILE,
        EntityType::Destination => DESTINATION,
        EntityType::Teletransporter => TELETRANSPORTER,
        EntityType::Pickable => PICKABLE,
        EntityType::Destructible => DESTRUCTIBLE,
        EntityType::Chest => CHEST,
        EntityType::Jumper => JUMPER,
        EntityType::Enemy => ENEMY,
        EntityType::Npc => NPC,
        EntityType::Block => BLOCK,
        EntityType::Switch => SWITCH,
        EntityType::Wall => WALL,
        EntityType::Sensor | EntityType::Crystal | EntityType::Separator => NONE,
        EntityType::CrystalBlock => CRYSTAL_BLOCK,
        EntityType::ShopTreasure => SHOP_TREASURE,
        EntityType::Stream => STREAM,
        EntityType::Door => DOOR,
        EntityType::Stairs => STAIRS,
        EntityType::CustomEntity => CUSTOM_ENTITY,
    }
}
