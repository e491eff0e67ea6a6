#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions
)]
//! Editor model layer for quests: entity presentation, map and tileset
//! edit states with change events and undo/redo.

pub use quest_engine::*;

mod editor_error;
pub use editor_error::{EditorError, Result};

mod listeners;
pub use listeners::*;

mod undo_stack;
pub use undo_stack::*;

pub mod entity;
pub use entity::{DrawInfo, EntityModel};

pub mod map;
pub use map::{MapEditState, MapEvent, MapUndoOp};

pub mod tileset;
pub use tileset::{TilesetEditState, TilesetEvent, TilesetUndoOp};
