use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use super::{PatternProperty, TilesetEvent, TilesetUndoOp};
use crate::{
    Color, EngineError, Ground, Listeners, PatternData, PatternRepeatMode, PatternScrolling, Rectangle, Result, SubscriptionId, TilesetData, UndoOperation,
    UndoStack, UndoState,
};

/// Editable tileset.
///
/// Every change goes through this type: it updates the pattern store,
/// records an undo operation and delivers the resulting [`TilesetEvent`]
/// to the subscribed listeners before returning it to the caller.
/// Failed operations leave the store untouched and emit nothing.
#[derive(Debug, Default)]
pub struct TilesetEditState {
    tileset: TilesetData,

    /// File path (if loaded from/saved to file)
    file_path: Option<PathBuf>,

    /// Whether the tileset has been modified since last save
    is_dirty: bool,

    undo_stack: UndoStack<TilesetUndoOp>,

    listeners: Listeners<TilesetEvent>,
}

impl TilesetEditState {
    pub fn new(tileset: TilesetData) -> Self {
        Self {
            tileset,
            ..Default::default()
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let tileset = TilesetData::load(path)?;
        log::info!("Loaded tileset {} with {} patterns", path.display(), tileset.pattern_count());
        Ok(Self {
            tileset,
            file_path: Some(path.to_path_buf()),
            ..Default::default()
        })
    }

    /// Saves to `path` and remembers it as the file of this tileset.
    pub fn save(&mut self, path: &Path) -> Result<()> {
        self.tileset.save(path)?;
        self.file_path = Some(path.to_path_buf());
        self.mark_saved();
        Ok(())
    }

    pub fn tileset(&self) -> &TilesetData {
        &self.tileset
    }

    pub fn into_tileset(self) -> TilesetData {
        self.tileset
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    /// Mark as saved (clears dirty flag and marks save point in undo stack)
    pub fn mark_saved(&mut self) {
        self.is_dirty = false;
        self.undo_stack.mark_saved();
    }

    pub fn undo_stack(&self) -> &UndoStack<TilesetUndoOp> {
        &self.undo_stack
    }

    // Queries

    pub fn background_color(&self) -> Color {
        self.tileset.background_color
    }

    pub fn pattern_count(&self) -> usize {
        self.tileset.pattern_count()
    }

    pub fn exists(&self, id: &str) -> bool {
        self.tileset.exists(id)
    }

    pub fn pattern_index(&self, id: &str) -> Option<usize> {
        self.tileset.pattern_index(id)
    }

    pub fn pattern_id(&self, index: usize) -> Option<&str> {
        self.tileset.pattern_id(index)
    }

    pub fn pattern(&self, id: &str) -> Option<&PatternData> {
        self.tileset.get_pattern(id)
    }

    pub fn pattern_ids(&self) -> impl Iterator<Item = &str> {
        self.tileset.pattern_ids()
    }

    // Listeners

    pub fn subscribe(&mut self, listener: impl FnMut(&TilesetEvent) + 'static) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    // Structural changes

    /// Creates a single-frame pattern with default attributes.
    pub fn create_pattern(&mut self, id: &str, frame: Rectangle) -> Result<TilesetEvent> {
        self.create_pattern_with(id, PatternData::new(frame))
    }

    pub fn create_pattern_with(&mut self, id: &str, pattern: PatternData) -> Result<TilesetEvent> {
        let event = self.insert_pattern_internal(id, pattern.clone())?;
        self.push_plain_undo(TilesetUndoOp::CreatePattern { id: id.to_string(), pattern });
        Ok(event)
    }

    pub fn delete_pattern(&mut self, id: &str) -> Result<TilesetEvent> {
        let mut events = self.delete_patterns(&[id])?;
        events.pop().ok_or_else(|| EngineError::UnknownPatternId { id: id.to_string() }.into())
    }

    pub fn delete_pattern_at(&mut self, index: usize) -> Result<TilesetEvent> {
        let Some(id) = self.tileset.pattern_id(index).map(str::to_string) else {
            return Err(EngineError::PatternIndexOutOfRange {
                index,
                count: self.tileset.pattern_count(),
            }
            .into());
        };
        self.delete_pattern(&id)
    }

    /// Deletes several patterns at once, as one undo step.
    ///
    /// Patterns are removed from the highest index down, so each event's
    /// index is still valid when the event is delivered.
    pub fn delete_patterns(&mut self, ids: &[&str]) -> Result<Vec<TilesetEvent>> {
        let mut indices = BTreeSet::new();
        for id in ids {
            let index = self.tileset.pattern_index(id).ok_or_else(|| EngineError::UnknownPatternId { id: (*id).to_string() })?;
            indices.insert(index);
        }

        let mut removed = Vec::with_capacity(indices.len());
        let mut events = Vec::with_capacity(indices.len());
        for index in indices.into_iter().rev() {
            let Some(id) = self.tileset.pattern_id(index).map(str::to_string) else {
                continue;
            };
            let (event, pattern) = self.remove_pattern_internal(&id)?;
            events.push(event);
            removed.push((id, pattern));
        }
        if !removed.is_empty() {
            self.push_plain_undo(TilesetUndoOp::DeletePatterns { patterns: removed });
        }
        Ok(events)
    }

    /// Changes the id of a pattern. Since patterns are sorted by id the
    /// pattern may move; the event carries both indices.
    ///
    /// Returns `None` when `new_id` equals `old_id`.
    pub fn rename_pattern(&mut self, old_id: &str, new_id: &str) -> Result<Option<TilesetEvent>> {
        if old_id == new_id {
            if !self.tileset.exists(old_id) {
                return Err(EngineError::UnknownPatternId { id: old_id.to_string() }.into());
            }
            return Ok(None);
        }
        let event = self.rename_pattern_internal(old_id, new_id)?;
        self.push_plain_undo(TilesetUndoOp::RenamePattern {
            old_id: old_id.to_string(),
            new_id: new_id.to_string(),
        });
        Ok(Some(event))
    }

    // Attribute changes; all return `None` when the value is already set.

    pub fn set_pattern_ground(&mut self, id: &str, ground: Ground) -> Result<Option<TilesetEvent>> {
        self.change_pattern(id, PatternProperty::Ground, |pattern| pattern.ground = ground)
    }

    pub fn set_pattern_default_layer(&mut self, id: &str, layer: i32) -> Result<Option<TilesetEvent>> {
        self.change_pattern(id, PatternProperty::DefaultLayer, |pattern| pattern.default_layer = layer)
    }

    pub fn set_pattern_repeat_mode(&mut self, id: &str, repeat_mode: PatternRepeatMode) -> Result<Option<TilesetEvent>> {
        self.change_pattern(id, PatternProperty::RepeatMode, |pattern| pattern.repeat_mode = repeat_mode)
    }

    pub fn set_pattern_scrolling(&mut self, id: &str, scrolling: PatternScrolling) -> Result<Option<TilesetEvent>> {
        self.change_pattern(id, PatternProperty::Scrolling, |pattern| pattern.scrolling = scrolling)
    }

    /// Replaces the animation frames; at least one frame is required.
    pub fn set_pattern_frames(&mut self, id: &str, frames: Vec<Rectangle>, frame_delay: u32) -> Result<Option<TilesetEvent>> {
        if frames.is_empty() {
            return Err(EngineError::EmptyPatternFrames { id: id.to_string() }.into());
        }
        self.change_pattern(id, PatternProperty::Frames, move |pattern| {
            pattern.frames = frames;
            pattern.frame_delay = frame_delay;
        })
    }

    pub fn set_background_color(&mut self, color: Color) -> Option<TilesetEvent> {
        let old_color = self.tileset.background_color;
        if old_color == color {
            return None;
        }
        let event = self.set_background_color_internal(color);
        self.push_plain_undo(TilesetUndoOp::SetBackgroundColor { old_color, new_color: color });
        Some(event)
    }

    fn change_pattern(&mut self, id: &str, property: PatternProperty, edit: impl FnOnce(&mut PatternData)) -> Result<Option<TilesetEvent>> {
        let old_data = self
            .tileset
            .get_pattern(id)
            .cloned()
            .ok_or_else(|| EngineError::UnknownPatternId { id: id.to_string() })?;
        let mut new_data = old_data.clone();
        edit(&mut new_data);
        if new_data == old_data {
            return Ok(None);
        }
        let event = self.replace_pattern_internal(id, property, new_data.clone())?;
        self.push_plain_undo(TilesetUndoOp::ChangePattern {
            id: id.to_string(),
            property,
            old_data,
            new_data,
        });
        Ok(Some(event))
    }

    // Primitives shared by the operations and their undo/redo. Each one
    // changes the store, then notifies.

    pub(crate) fn insert_pattern_internal(&mut self, id: &str, pattern: PatternData) -> Result<TilesetEvent> {
        let index = self.tileset.add_pattern(id, pattern)?;
        log::debug!("Pattern '{id}' created at {index}");
        Ok(self.emit(TilesetEvent::PatternCreated { index, id: id.to_string() }))
    }

    pub(crate) fn remove_pattern_internal(&mut self, id: &str) -> Result<(TilesetEvent, PatternData)> {
        let (index, pattern) = self.tileset.remove_pattern(id)?;
        log::debug!("Pattern '{id}' deleted from {index}");
        Ok((self.emit(TilesetEvent::PatternDeleted { index, id: id.to_string() }), pattern))
    }

    pub(crate) fn rename_pattern_internal(&mut self, old_id: &str, new_id: &str) -> Result<TilesetEvent> {
        let (old_index, new_index) = self.tileset.set_pattern_id(old_id, new_id)?;
        log::debug!("Pattern '{old_id}' ({old_index}) renamed to '{new_id}' ({new_index})");
        Ok(self.emit(TilesetEvent::PatternRenamed {
            old_index,
            old_id: old_id.to_string(),
            new_index,
            new_id: new_id.to_string(),
        }))
    }

    pub(crate) fn replace_pattern_internal(&mut self, id: &str, property: PatternProperty, data: PatternData) -> Result<TilesetEvent> {
        let index = self.tileset.pattern_index(id).ok_or_else(|| EngineError::UnknownPatternId { id: id.to_string() })?;
        if let Some(pattern) = self.tileset.get_pattern_mut(id) {
            *pattern = data;
        }
        Ok(self.emit(TilesetEvent::PatternChanged {
            index,
            id: id.to_string(),
            property,
        }))
    }

    pub(crate) fn set_background_color_internal(&mut self, color: Color) -> TilesetEvent {
        self.tileset.background_color = color;
        self.emit(TilesetEvent::BackgroundColorChanged { color })
    }

    fn emit(&mut self, event: TilesetEvent) -> TilesetEvent {
        self.listeners.emit(&event);
        event
    }

    /// Push an undo operation that was already applied
    fn push_plain_undo(&mut self, op: TilesetUndoOp) {
        if op.changes_data() {
            self.is_dirty = true;
        }
        self.undo_stack.push(op);
    }
}

impl UndoState for TilesetEditState {
    fn undo_description(&self) -> Option<String> {
        self.undo_stack.undo_description()
    }

    fn can_undo(&self) -> bool {
        self.undo_stack.can_undo()
    }

    fn undo(&mut self) -> Result<()> {
        let Some(op) = self.undo_stack.pop_undo() else {
            return Ok(());
        };
        if let Err(err) = op.undo(self) {
            self.undo_stack.push_undo(op);
            return Err(err);
        }
        self.undo_stack.push_redo(op);
        self.is_dirty = !self.undo_stack.is_at_save_point();
        Ok(())
    }

    fn redo_description(&self) -> Option<String> {
        self.undo_stack.redo_description()
    }

    fn can_redo(&self) -> bool {
        self.undo_stack.can_redo()
    }

    fn redo(&mut self) -> Result<()> {
        let Some(op) = self.undo_stack.pop_redo() else {
            return Ok(());
        };
        if let Err(err) = op.redo(self) {
            self.undo_stack.push_redo(op);
            return Err(err);
        }
        self.undo_stack.push_undo(op);
        self.is_dirty = !self.undo_stack.is_at_save_point();
        Ok(())
    }
}
