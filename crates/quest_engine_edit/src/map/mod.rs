//! Map editing: the entity models placed on a map, layer by layer.

mod edit_state;
mod event;
mod undo_operation;

pub use edit_state::MapEditState;
pub use event::{EntityProperty, MapEvent};
pub use undo_operation::MapUndoOp;
