//! Undo/redo bookkeeping shared by the map and tileset editors.

use serde::{Deserialize, Serialize};

use crate::Result;

pub trait UndoState {
    fn undo_description(&self) -> Option<String>;
    fn can_undo(&self) -> bool;
    fn undo(&mut self) -> Result<()>;

    fn redo_description(&self) -> Option<String>;
    fn can_redo(&self) -> bool;
    fn redo(&mut self) -> Result<()>;
}

/// Implemented by the serializable undo operation enums.
pub trait UndoOperation {
    fn description(&self) -> String;

    /// Whether this operation changes data (affects dirty flag)
    fn changes_data(&self) -> bool {
        true
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UndoStack<T> {
    undo_stack: Vec<T>,
    redo_stack: Vec<T>,
    /// Undo length at the last save, `None` once that state can no longer be reached.
    save_point: Option<usize>,
}

impl<T> Default for UndoStack<T> {
    fn default() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            save_point: Some(0),
        }
    }
}

impl<T: UndoOperation> UndoStack<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a new operation; clears the redo stack.
    pub fn push(&mut self, op: T) {
        if self.save_point.is_some_and(|p| p > self.undo_stack.len()) {
            self.save_point = None;
        }
        self.undo_stack.push(op);
        self.redo_stack.clear();
    }

    pub fn pop_undo(&mut self) -> Option<T> {
        self.undo_stack.pop()
    }

    pub fn push_redo(&mut self, op: T) {
        self.redo_stack.push(op);
    }

    pub fn pop_redo(&mut self) -> Option<T> {
        self.redo_stack.pop()
    }

    /// Push an operation onto the undo stack; leaves the redo stack alone.
    pub fn push_undo(&mut self, op: T) {
        self.undo_stack.push(op);
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_description(&self) -> Option<String> {
        self.undo_stack.last().map(UndoOperation::description)
    }

    pub fn redo_description(&self) -> Option<String> {
        self.redo_stack.last().map(UndoOperation::description)
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.save_point = Some(0);
    }

    pub fn mark_saved(&mut self) {
        self.save_point = Some(self.undo_stack.len());
    }

    /// True when undoing/redoing brought the data back to the last saved state.
    pub fn is_at_save_point(&self) -> bool {
        self.save_point == Some(self.undo_stack.len())
    }
}
