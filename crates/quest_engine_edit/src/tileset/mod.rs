//! Tileset editing
//!
//! `TilesetEditState` is the only way to change the patterns of a tileset
//! while it is open. Patterns stay sorted by id, so every structural change
//! can move the index of other patterns; each change is reported as a
//! `TilesetEvent` carrying the indices valid at the time it is delivered.

mod edit_state;
mod event;
mod undo_operation;

pub use edit_state::TilesetEditState;
pub use event::{PatternProperty, TilesetEvent};
pub use undo_operation::TilesetUndoOp;
