use thiserror::Error;

use crate::{EngineError, EntityIndex, EntityType, Size};

#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("No entity at {index}")]
    EntityNotFound { index: EntityIndex },

    #[error("Size {size} is not valid for {entity_type}")]
    InvalidSize { entity_type: EntityType, size: Size },

    #[error("Treasure variant {variant} is not valid, variants start at 1")]
    InvalidTreasureVariant { variant: i32 },

    #[error("Direction {direction:?} is not valid for {entity_type} ({num_directions} directions)")]
    InvalidDirection {
        entity_type: EntityType,
        direction: Option<i32>,
        num_directions: i32,
    },
}

pub type Result<T> = std::result::Result<T, EditorError>;
