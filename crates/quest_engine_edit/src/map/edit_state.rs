use std::path::{Path, PathBuf};

use super::{EntityProperty, MapEvent, MapUndoOp};
use crate::{
    EditorError, EntityData, EntityIndex, EntityModel, EntityType, FieldValue, Listeners, MapData, MapProperties, Position, Result, Size, SubscriptionId,
    UndoOperation, UndoStack, UndoState,
};

/// Editable map.
///
/// Owns one [`EntityModel`] per entity record, grouped by layer, so an
/// entity model never outlives the map it belongs to. As with tilesets,
/// each change is recorded for undo and reported as a [`MapEvent`].
#[derive(Debug)]
pub struct MapEditState {
    properties: MapProperties,

    /// One list per layer, lowest layer first; the order within a layer is
    /// the drawing order.
    layers: Vec<Vec<EntityModel>>,

    file_path: Option<PathBuf>,

    is_dirty: bool,

    undo_stack: UndoStack<MapUndoOp>,

    listeners: Listeners<MapEvent>,
}

impl MapEditState {
    pub fn new(properties: MapProperties) -> Self {
        let layers = vec![Vec::new(); properties.layer_count()];
        Self {
            properties,
            layers,
            file_path: None,
            is_dirty: false,
            undo_stack: UndoStack::new(),
            listeners: Listeners::default(),
        }
    }

    pub fn from_map_data(map: MapData) -> Result<Self> {
        let (properties, entities) = map.into_parts();
        let mut state = Self::new(properties);
        for data in entities {
            let slot = state.layer_slot(data.layer)?;
            let index = EntityIndex::new(data.layer, state.layers[slot].len());
            state.layers[slot].push(EntityModel::from_data(index, data));
        }
        Ok(state)
    }

    pub fn to_map_data(&self) -> Result<MapData> {
        let entities = self.entities().map(|model| model.data().clone());
        Ok(MapData::from_parts(self.properties.clone(), entities)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let map = MapData::load(path)?;
        let mut state = Self::from_map_data(map)?;
        log::info!("Loaded map {} with {} entities", path.display(), state.entity_count());
        state.file_path = Some(path.to_path_buf());
        Ok(state)
    }

    pub fn save(&mut self, path: &Path) -> Result<()> {
        self.to_map_data()?.save(path)?;
        self.file_path = Some(path.to_path_buf());
        self.mark_saved();
        Ok(())
    }

    pub fn properties(&self) -> &MapProperties {
        &self.properties
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    pub fn mark_saved(&mut self) {
        self.is_dirty = false;
        self.undo_stack.mark_saved();
    }

    pub fn undo_stack(&self) -> &UndoStack<MapUndoOp> {
        &self.undo_stack
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&MapEvent) + 'static) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn layer_slot(&self, layer: i32) -> Result<usize> {
        self.properties.check_layer(layer)?;
        Ok((layer - self.properties.min_layer) as usize)
    }

    pub fn entity_count(&self) -> usize {
        self.layers.iter().map(Vec::len).sum()
    }

    pub fn entity_count_by_layer(&self, layer: i32) -> usize {
        self.layer_slot(layer).map_or(0, |slot| self.layers[slot].len())
    }

    pub fn get_entity(&self, index: EntityIndex) -> Option<&EntityModel> {
        let slot = self.layer_slot(index.layer).ok()?;
        self.layers[slot].get(index.order)
    }

    fn entity(&self, index: EntityIndex) -> Result<&EntityModel> {
        self.get_entity(index).ok_or(EditorError::EntityNotFound { index })
    }

    /// All entity models, lowest layer first, in drawing order.
    pub fn entities(&self) -> impl Iterator<Item = &EntityModel> {
        self.layers.iter().flatten()
    }

    pub fn entities_in_layer(&self, layer: i32) -> impl Iterator<Item = &EntityModel> {
        let slot = self.layer_slot(layer).ok();
        slot.and_then(|slot| self.layers.get(slot)).into_iter().flatten()
    }

    /// Entities whose bounding box contains `position`, topmost first.
    pub fn entities_at(&self, position: Position) -> impl Iterator<Item = &EntityModel> {
        self.layers
            .iter()
            .rev()
            .flat_map(|layer| layer.iter().rev())
            .filter(move |model| model.bounding_box().contains(position))
    }

    // Operations

    /// Creates an entity with editor defaults on top of `layer`.
    pub fn add_entity(&mut self, layer: i32, entity_type: EntityType, position: Position) -> Result<EntityIndex> {
        let slot = self.layer_slot(layer)?;
        let index = EntityIndex::new(layer, self.layers[slot].len());
        let mut model = EntityModel::create(index, entity_type);
        model.set_position(position);
        self.add_entity_data(model.into_data())
    }

    /// Adds an existing record (e.g. pasted) on top of its layer.
    pub fn add_entity_data(&mut self, data: EntityData) -> Result<EntityIndex> {
        let slot = self.layer_slot(data.layer)?;
        let index = EntityIndex::new(data.layer, self.layers[slot].len());
        self.insert_entity_internal(index, data.clone())?;
        self.push_plain_undo(MapUndoOp::AddEntity { index, data });
        Ok(index)
    }

    pub fn remove_entity(&mut self, index: EntityIndex) -> Result<EntityData> {
        let (_, data) = self.remove_entity_internal(index)?;
        self.push_plain_undo(MapUndoOp::RemoveEntity { index, data: data.clone() });
        Ok(data)
    }

    pub fn set_entity_name(&mut self, index: EntityIndex, name: Option<String>) -> Result<Option<MapEvent>> {
        let old_name = self.entity(index)?.name().map(str::to_string);
        if old_name == name {
            return Ok(None);
        }
        let new_name = name.clone();
        let event = self.update_entity_internal(index, EntityProperty::Name, |model| {
            model.set_name(name);
            Ok(())
        })?;
        self.push_plain_undo(MapUndoOp::SetName { index, old_name, new_name });
        Ok(Some(event))
    }

    pub fn set_entity_position(&mut self, index: EntityIndex, position: Position) -> Result<Option<MapEvent>> {
        let old_position = self.entity(index)?.position();
        if old_position == position {
            return Ok(None);
        }
        let event = self.update_entity_internal(index, EntityProperty::Position, |model| {
            model.set_position(position);
            Ok(())
        })?;
        self.push_plain_undo(MapUndoOp::SetPosition {
            index,
            old_position,
            new_position: position,
        });
        Ok(Some(event))
    }

    pub fn set_entity_size(&mut self, index: EntityIndex, size: Size) -> Result<Option<MapEvent>> {
        let old_size = self.entity(index)?.size();
        if old_size == size {
            return Ok(None);
        }
        let event = self.update_entity_internal(index, EntityProperty::Size, |model| model.set_size(size))?;
        self.push_plain_undo(MapUndoOp::SetSize { index, old_size, new_size: size });
        Ok(Some(event))
    }

    /// Turns an entity. A jumper may be resized by this too (see
    /// [`EntityModel::set_direction`]); the resize is part of the same undo step.
    pub fn set_entity_direction(&mut self, index: EntityIndex, direction: Option<i32>) -> Result<Option<MapEvent>> {
        let model = self.entity(index)?;
        let old_direction = model.direction();
        let old_size = model.size();
        if old_direction == direction {
            return Ok(None);
        }
        let event = self.update_direction_internal(index, direction, None)?;
        let new_size = self.entity(index)?.size();
        self.push_plain_undo(MapUndoOp::SetDirection {
            index,
            old_direction,
            new_direction: direction,
            old_size,
            new_size,
        });
        Ok(Some(event))
    }

    /// Stores a field value; the entity's presentation follows.
    pub fn set_entity_field(&mut self, index: EntityIndex, key: &str, value: FieldValue) -> Result<Option<MapEvent>> {
        if self.entity(index)?.get_field(key) == Some(&value) {
            return Ok(None);
        }
        let mut old_value = None;
        let new_value = value.clone();
        let event = self.update_entity_internal(index, EntityProperty::Field(key.to_string()), |model| {
            old_value = model.set_field(key, value)?;
            Ok(())
        })?;
        self.push_plain_undo(MapUndoOp::SetField {
            index,
            key: key.to_string(),
            old_value,
            new_value,
        });
        Ok(Some(event))
    }

    // Primitives shared by the operations and their undo/redo.

    pub(crate) fn insert_entity_internal(&mut self, index: EntityIndex, data: EntityData) -> Result<MapEvent> {
        let slot = self.layer_slot(index.layer)?;
        let layer = &mut self.layers[slot];
        if index.order > layer.len() {
            return Err(EditorError::EntityNotFound { index });
        }
        log::debug!("{} added at {index}", data.entity_type);
        layer.insert(index.order, EntityModel::from_data(index, data));
        reindex(layer, index);
        Ok(self.emit(MapEvent::EntityAdded { index }))
    }

    pub(crate) fn remove_entity_internal(&mut self, index: EntityIndex) -> Result<(MapEvent, EntityData)> {
        let slot = self.layer_slot(index.layer)?;
        let layer = &mut self.layers[slot];
        if index.order >= layer.len() {
            return Err(EditorError::EntityNotFound { index });
        }
        let data = layer.remove(index.order).into_data();
        reindex(layer, index);
        log::debug!("{} removed from {index}", data.entity_type);
        Ok((self.emit(MapEvent::EntityRemoved { index }), data))
    }

    /// Applies `edit` to one entity. The edit must leave the entity
    /// unchanged when it fails; no event is sent then.
    pub(crate) fn update_entity_internal(
        &mut self,
        index: EntityIndex,
        property: EntityProperty,
        edit: impl FnOnce(&mut EntityModel) -> Result<()>,
    ) -> Result<MapEvent> {
        let slot = self.layer_slot(index.layer)?;
        let model = self.layers[slot].get_mut(index.order).ok_or(EditorError::EntityNotFound { index })?;
        edit(model)?;
        Ok(self.emit(MapEvent::EntityChanged { index, property }))
    }

    /// Sets the direction and, when given, the size that goes with it. An
    /// extra size event follows the direction event when the size changed.
    pub(crate) fn update_direction_internal(&mut self, index: EntityIndex, direction: Option<i32>, size: Option<Size>) -> Result<MapEvent> {
        let old_size = self.entity(index)?.size();
        let event = self.update_entity_internal(index, EntityProperty::Direction, |model| {
            let mut turned = model.clone();
            turned.set_direction(direction)?;
            if let Some(size) = size {
                turned.set_size(size)?;
            }
            *model = turned;
            Ok(())
        })?;
        if self.entity(index)?.size() != old_size {
            self.emit(MapEvent::EntityChanged {
                index,
                property: EntityProperty::Size,
            });
        }
        Ok(event)
    }

    fn emit(&mut self, event: MapEvent) -> MapEvent {
        self.listeners.emit(&event);
        event
    }

    fn push_plain_undo(&mut self, op: MapUndoOp) {
        if op.changes_data() {
            self.is_dirty = true;
        }
        self.undo_stack.push(op);
    }
}

/// Brings the stored indices of a layer back in line with the positions
/// after an insertion or removal at `from`.
fn reindex(layer: &mut [EntityModel], from: EntityIndex) {
    for (order, model) in layer.iter_mut().enumerate().skip(from.order) {
        model.set_index(EntityIndex::new(from.layer, order));
    }
}

impl UndoState for MapEditState {
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
