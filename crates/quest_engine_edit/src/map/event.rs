use serde::{Deserialize, Serialize};

use crate::EntityIndex;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityProperty {
    Name,
    Position,
    Size,
    Direction,
    Field(String),
}

impl std::fmt::Display for EntityProperty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityProperty::Name => write!(f, "name"),
            EntityProperty::Position => write!(f, "position"),
            EntityProperty::Size => write!(f, "size"),
            EntityProperty::Direction => write!(f, "direction"),
            EntityProperty::Field(key) => write!(f, "{key}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MapEvent {
    /// Entities of the same layer at `index.order` or above moved up by one.
    EntityAdded { index: EntityIndex },
    /// Entities of the same layer above `index.order` moved down by one.
    EntityRemoved { index: EntityIndex },
    EntityChanged { index: EntityIndex, property: EntityProperty },
}
