use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{EngineError, FieldSpec, schema};

/// Every kind of entity that can be placed on a map.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Tile,
    DynamicTile,
    Destination,
    Teletransporter,
    Pickable,
    Destructible,
    Chest,
    Jumper,
    Enemy,
    Npc,
    Block,
    Switch,
    Wall,
    Sensor,
    Crystal,
    CrystalBlock,
    ShopTreasure,
    Stream,
    Door,
    Stairs,
    Separator,
    CustomEntity,
}

impl EntityType {
    pub const ALL: [EntityType; 22] = [
        EntityType::Tile,
        EntityType::DynamicTile,
        EntityType::Destination,
        EntityType::Teletransporter,
        EntityType::Pickable,
        EntityType::Destructible,
        EntityType::Chest,
        EntityType::Jumper,
        EntityType::Enemy,
        EntityType::Npc,
        EntityType::Block,
        EntityType::Switch,
        EntityType::Wall,
        EntityType::Sensor,
        EntityType::Crystal,
        EntityType::CrystalBlock,
        EntityType::ShopTreasure,
        EntityType::Stream,
        EntityType::Door,
        EntityType::Stairs,
        EntityType::Separator,
        EntityType::CustomEntity,
    ];

    /// Name used in quest data files.
    pub fn name(&self) -> &'static str {
        match self {
            EntityType::Tile => "tile",
            EntityType::DynamicTile => "dynamic_tile",
            EntityType::Destination => "destination",
            EntityType::Teletransporter => "teletransporter",
            EntityType::Pickable => "pickable",
            EntityType::Destructible => "destructible",
            EntityType::Chest => "chest",
            EntityType::Jumper => "jumper",
            EntityType::Enemy => "enemy",
            EntityType::Npc => "npc",
            EntityType::Block => "block",
            EntityType::Switch => "switch",
            EntityType::Wall => "wall",
            EntityType::Sensor => "sensor",
            EntityType::Crystal => "crystal",
            EntityType::CrystalBlock => "crystal_block",
            EntityType::ShopTreasure => "shop_treasure",
            EntityType::Stream => "stream",
            EntityType::Door => "door",
            EntityType::Stairs => "stairs",
            EntityType::Separator => "separator",
            EntityType::CustomEntity => "custom_entity",
        }
    }

    /// Specific fields recognized for this type, with their data file defaults.
    pub fn fields(&self) -> &'static [FieldSpec] {
        schema::fields_of(*self)
    }

    pub fn field_spec(&self, key: &str) -> Option<&'static FieldSpec> {
        self.fields().iter().find(|spec| spec.key == key)
    }

    /// Whether records of this type carry a direction.
    pub fn has_direction(&self) -> bool {
        matches!(
            self,
            EntityType::Destination
                | EntityType::Enemy
                | EntityType::Npc
                | EntityType::Block
                | EntityType::Jumper
                | EntityType::Stream
                | EntityType::Door
                | EntityType::Stairs
                | EntityType::CustomEntity
        )
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for EntityType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityType::ALL
            .iter()
            .find(|t| t.name() == s)
            .copied()
            .ok_or_else(|| EngineError::UnknownEntityType { name: s.to_string() })
    }
}
