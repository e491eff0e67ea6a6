//! Serializable undo operations of the map editor.

use serde::{Deserialize, Serialize};

use super::{EntityProperty, MapEditState};
use crate::{EntityData, EntityIndex, FieldValue, Position, Result, Size, UndoOperation};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum MapUndoOp {
    AddEntity { index: EntityIndex, data: EntityData },

    RemoveEntity { index: EntityIndex, data: EntityData },

    SetName {
        index: EntityIndex,
        old_name: Option<String>,
        new_name: Option<String>,
    },

    SetPosition {
        index: EntityIndex,
        old_position: Position,
        new_position: Position,
    },

    SetSize { index: EntityIndex, old_size: Size, new_size: Size },

    SetDirection {
        index: EntityIndex,
        old_direction: Option<i32>,
        new_direction: Option<i32>,
        old_size: Size,
        new_size: Size,
    },

    SetField {
        index: EntityIndex,
        key: String,
        old_value: Option<FieldValue>,
        new_value: FieldValue,
    },
}

impl UndoOperation for MapUndoOp {
    fn description(&self) -> String {
        match self {
            MapUndoOp::AddEntity { data, .. } => format!("Add {}", data.entity_type),
            MapUndoOp::RemoveEntity { data, .. } => format!("Remove {}", data.entity_type),
            MapUndoOp::SetName { .. } => "Rename entity".to_string(),
            MapUndoOp::SetPosition { .. } => "Move entity".to_string(),
            MapUndoOp::SetSize { .. } => "Resize entity".to_string(),
            MapUndoOp::SetDirection { .. } => "Change direction".to_string(),
            MapUndoOp::SetField { key, .. } => format!("Change {key}"),
        }
    }
}

impl MapUndoOp {
    pub fn undo(&self, state: &mut MapEditState) -> Result<()> {
        match self {
            MapUndoOp::AddEntity { index, .. } => {
                state.remove_entity_internal(*index)?;
            }
            MapUndoOp::RemoveEntity { index, data } => {
                state.insert_entity_internal(*index, data.clone())?;
            }
            MapUndoOp::SetName { index, old_name, .. } => {
                let name = old_name.clone();
                state.update_entity_internal(*index, EntityProperty::Name, |model| {
                    model.set_name(name);
                    Ok(())
                })?;
            }
            MapUndoOp::SetPosition { index, old_position, .. } => {
                state.update_entity_internal(*index, EntityProperty::Position, |model| {
                    model.set_position(*old_position);
                    Ok(())
                })?;
            }
            MapUndoOp::SetSize { index, old_size, .. } => {
                state.update_entity_internal(*index, EntityProperty::Size, |model| model.set_size(*old_size))?;
            }
            MapUndoOp::SetDirection {
                index, old_direction, old_size, ..
            } => {
                state.update_direction_internal(*index, *old_direction, Some(*old_size))?;
            }
            MapUndoOp::SetField { index, key, old_value, .. } => {
                if let Some(old_value) = old_value {
                    state.update_entity_internal(*index, EntityProperty::Field(key.clone()), |model| {
                        model.set_field(key, old_value.clone())?;
                        Ok(())
                    })?;
                }
            }
        }
        Ok(())
    }

    pub fn redo(&self, state: &mut MapEditState) -> Result<()> {
        match self {
            MapUndoOp::AddEntity { index, data } => {
                state.insert_entity_internal(*index, data.clone())?;
            }
            MapUndoOp::RemoveEntity { index, .. } => {
                state.remove_entity_internal(*index)?;
            }
            MapUndoOp::SetName { index, new_name, .. } => {
                let name = new_name.clone();
                state.update_entity_internal(*index, EntityProperty::Name, |model| {
                    model.set_name(name);
                    Ok(())
                })?;
            }
            MapUndoOp::SetPosition { index, new_position, .. } => {
                state.update_entity_internal(*index, EntityProperty::Position, |model| {
                    model.set_position(*new_position);
                    Ok(())
                })?;
            }
            MapUndoOp::SetSize { index, new_size, .. } => {
                state.update_entity_internal(*index, EntityProperty::Size, |model| model.set_size(*new_size))?;
            }
            MapUndoOp::SetDirection {
                index, new_direction, new_size, ..
            } => {
                state.update_direction_internal(*index, *new_direction, Some(*new_size))?;
            }
            MapUndoOp::SetField { index, key, new_value, .. } => {
                state.update_entity_internal(*index, EntityProperty::Field(key.clone()), |model| {
                    model.set_field(key, new_value.clone())?;
                    Ok(())
                })?;
            }
        }
        Ok(())
    }
}
