//! Serializable undo operations of the tileset editor.

use serde::{Deserialize, Serialize};

use super::{PatternProperty, TilesetEditState};
use crate::{Color, EngineError, PatternData, Result, UndoOperation};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum TilesetUndoOp {
    CreatePattern { id: String, pattern: PatternData },

    /// Patterns in the order they were removed (highest index first).
    DeletePatterns { patterns: Vec<(String, PatternData)> },

    RenamePattern { old_id: String, new_id: String },

    /// Any attribute edit; the whole pattern is kept on both sides.
    ChangePattern {
        id: String,
        property: PatternProperty,
        old_data: PatternData,
        new_data: PatternData,
    },

    SetBackgroundColor { old_color: Color, new_color: Color },
}

impl UndoOperation for TilesetUndoOp {
    fn description(&self) -> String {
        match self {
            TilesetUndoOp::CreatePattern { id, .. } => format!("Create pattern '{id}'"),
            TilesetUndoOp::DeletePatterns { patterns } => {
                if let [(id, _)] = patterns.as_slice() {
                    format!("Delete pattern '{id}'")
                } else {
                    format!("Delete {} patterns", patterns.len())
                }
            }
            TilesetUndoOp::RenamePattern { old_id, new_id } => format!("Rename pattern '{old_id}' to '{new_id}'"),
            TilesetUndoOp::ChangePattern { id, property, .. } => format!("Change {property} of pattern '{id}'"),
            TilesetUndoOp::SetBackgroundColor { .. } => "Change background color".to_string(),
        }
    }
}

impl TilesetUndoOp {
    pub fn undo(&self, state: &mut TilesetEditState) -> Result<()> {
        match self {
            TilesetUndoOp::CreatePattern { id, .. } => {
                state.remove_pattern_internal(id)?;
            }
            TilesetUndoOp::DeletePatterns { patterns } => {
                if let Some((id, _)) = patterns.iter().find(|(id, _)| state.exists(id)) {
                    return Err(EngineError::DuplicatePatternId { id: id.clone() }.into());
                }
                for (id, pattern) in patterns.iter().rev() {
                    state.insert_pattern_internal(id, pattern.clone())?;
                }
            }
            TilesetUndoOp::RenamePattern { old_id, new_id } => {
                state.rename_pattern_internal(new_id, old_id)?;
            }
            TilesetUndoOp::ChangePattern { id, property, old_data, .. } => {
                state.replace_pattern_internal(id, *property, old_data.clone())?;
            }
            TilesetUndoOp::SetBackgroundColor { old_color, .. } => {
                state.set_background_color_internal(*old_color);
            }
        }
        Ok(())
    }

    pub fn redo(&self, state: &mut TilesetEditState) -> Result<()> {
        match self {
            TilesetUndoOp::CreatePattern { id, pattern } => {
                state.insert_pattern_internal(id, pattern.clone())?;
            }
            TilesetUndoOp::DeletePatterns { patterns } => {
                if let Some((id, _)) = patterns.iter().find(|(id, _)| !state.exists(id)) {
                    return Err(EngineError::UnknownPatternId { id: id.clone() }.into());
                }
                for (id, _) in patterns {
                    state.remove_pattern_internal(id)?;
                }
            }
            TilesetUndoOp::RenamePattern { old_id, new_id } => {
                state.rename_pattern_internal(old_id, new_id)?;
            }
            TilesetUndoOp::ChangePattern { id, property, new_data, .. } => {
                state.replace_pattern_internal(id, *property, new_data.clone())?;
            }
            TilesetUndoOp::SetBackgroundColor { new_color, .. } => {
                state.set_background_color_internal(*new_color);
            }
        }
        Ok(())
    }
}
