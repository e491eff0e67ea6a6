//! Error types for quest data records

use std::path::PathBuf;
use thiserror::Error;

use crate::{EntityType, FieldKind};

/// Main error type for quest data operations
#[derive(Debug, Error)]
pub enum EngineError {
    // === I/O Errors ===
    #[error("Failed to read file '{path}': {message}")]
    ReadFile { path: PathBuf, message: String },

    #[error("Failed to write file '{path}': {message}")]
    WriteFile { path: PathBuf, message: String },

    // === Format Errors ===
    #[error("Invalid data file: {0}")]
    Deserialize(#[from] toml::de::Error),

    #[error("Cannot encode data file: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid hex color: {value}")]
    InvalidHexColor { value: String },

    // === Entity Errors ===
    #[error("Unknown entity type: '{name}'")]
    UnknownEntityType { name: String },

    #[error("Entity type '{entity_type}' has no field '{key}'")]
    UnknownField { entity_type: EntityType, key: String },

    #[error("Field '{key}' expects a {expected} value, got {actual}")]
    FieldTypeMismatch { key: String, expected: FieldKind, actual: FieldKind },

    #[error("Layer {layer} out of range ({min}..={max})")]
    InvalidLayer { layer: i32, min: i32, max: i32 },

    #[error("No entity at index {order} on layer {layer}")]
    EntityIndexOutOfRange { layer: i32, order: usize },

    // === Tileset Errors ===
    #[error("Invalid pattern id: '{id}'")]
    InvalidPatternId { id: String },

    #[error("Pattern id '{id}' already exists")]
    DuplicatePatternId { id: String },

    #[error("No such pattern: '{id}'")]
    UnknownPatternId { id: String },

    #[error("Pattern index {index} out of range (0..{count})")]
    PatternIndexOutOfRange { index: usize, count: usize },

    #[error("Pattern '{id}' has no frames")]
    EmptyPatternFrames { id: String },
}

/// Result type alias for quest data operations
pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    pub fn read_file(path: impl Into<PathBuf>, msg: impl std::fmt::Display) -> Self {
        Self::ReadFile {
            path: path.into(),
            message: msg.to_string(),
        }
    }

    pub fn write_file(path: impl Into<PathBuf>, msg: impl std::fmt::Display) -> Self {
        Self::WriteFile {
            path: path.into(),
            message: msg.to_string(),
        }
    }
}
