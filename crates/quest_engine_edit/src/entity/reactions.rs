//! Which field changes affect the presentation of which entity types.

use crate::EntityType;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FieldReaction {
    /// Recompute the draw descriptor.
    RefreshDrawInfo,
    /// Recompute whether the hero can cross the entity.
    RefreshTraversable,
}

use FieldReaction::{RefreshDrawInfo, RefreshTraversable};

const TREASURE: &[(&str, FieldReaction)] = &[("treasure_name", RefreshDrawInfo), ("treasure_variant", RefreshDrawInfo)];
const SPRITE: &[(&str, FieldReaction)] = &[("sprite", RefreshDrawInfo)];
const PATTERN: &[(&str, FieldReaction)] = &[("pattern", RefreshDrawInfo), ("tileset", RefreshDrawInfo)];
const WALL: &[(&str, FieldReaction)] = &[("stops_hero", RefreshTraversable)];
const NPC: &[(&str, FieldReaction)] = &[("sprite", RefreshDrawInfo), ("traversable", RefreshTraversable)];
const ENEMY: &[(&str, FieldReaction)] = &[("breed", RefreshDrawInfo)];
const STAIRS: &[(&str, FieldReaction)] = &[("subtype", RefreshDrawInfo)];
const NONE: &[(&str, FieldReaction)] = &[];

/// Field keys watched by an entity type. Keys not listed here have no
/// effect on what the editor shows.
pub fn field_reactions(entity_type: EntityType) -> &'static [(&'static str, FieldReaction)] {
    use EntityType as T;
    match entity_type {
        T::Pickable | T::ShopTreasure => TREASURE,
        T::Wall => WALL,
        T::Npc => NPC,
        T::Enemy => ENEMY,
        T::Tile | T::DynamicTile => PATTERN,
        T::Stairs => STAIRS,
        T::Destination | T::Teletransporter | T::Destructible | T::Chest | T::Block | T::Switch | T::Stream | T::Door | T::CustomEntity => SPRITE,
        T::Jumper | T::Sensor | T::Crystal | T::CrystalBlock | T::Separator => NONE,
    }
}

pub fn reaction_for(entity_type: EntityType, key: &str) -> Option<FieldReaction> {
    field_reactions(entity_type).iter().find(|(k, _)| *k == key).map(|(_, reaction)| *reaction)
}
