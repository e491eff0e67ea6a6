use crate::{EditorError, EntityData, EntityIndex, EntityType, FieldValue, Position, Rectangle, Result, Size};

use super::{
    BaseDraw, DrawImageInfo, DrawInfo, DrawShapeInfo, DrawSpriteInfo, EntityPresentation, FieldReaction, ImageEntry, ImageSource, MISSING_PATTERN_COLOR,
    RESIZE_GRID, ResizeMode, TREASURE_SPRITE, TraversableRule, initial_field_values, reaction_for,
};

const TREASURE_VARIANT: &str = "treasure_variant";

/// An entity placed on a map, with the presentation derived from its fields.
///
/// The raw record is only changed through [`EntityModel::set_field`] (or
/// stored externally and then announced with
/// [`EntityModel::notify_field_changed`]), so the draw descriptor and the
/// traversability always match the current field values.
#[derive(Clone, Debug, PartialEq)]
pub struct EntityModel {
    index: EntityIndex,
    data: EntityData,
    presentation: EntityPresentation,
    draw_info: Option<DrawInfo>,
    traversable: bool,
}

impl EntityModel {
    /// Creates a brand new entity of the given type with editor defaults.
    pub fn create(index: EntityIndex, entity_type: EntityType) -> Self {
        let presentation = EntityPresentation::of(entity_type);
        let mut data = EntityData::new(entity_type);
        data.layer = index.layer;
        data.size = presentation.size;
        data.direction = presentation.default_direction;
        for (key, value) in initial_field_values(entity_type) {
            if let Err(err) = data.set_field(key, value.to_value()) {
                log::error!("Bad initial value for {entity_type} field '{key}': {err}");
            }
        }
        Self::with_presentation(index, data, presentation)
    }

    /// Wraps a record loaded from a map file. Whatever the record lacks or
    /// gets wrong falls back to the type defaults.
    pub fn from_data(index: EntityIndex, mut data: EntityData) -> Self {
        let presentation = EntityPresentation::of(data.entity_type);
        data.layer = index.layer;
        data.complete_fields();
        if data.size.is_empty() {
            data.size = presentation.size;
        }
        if !is_direction_valid(&presentation, data.direction) {
            log::warn!(
                "{} at {index} has invalid direction {:?}, using {:?}",
                data.entity_type,
                data.direction,
                presentation.default_direction
            );
            data.direction = presentation.default_direction;
        }
        if let Some(variant) = data.get_integer(TREASURE_VARIANT).filter(|variant| *variant < 1) {
            log::warn!("{} at {index} has invalid treasure variant {variant}, using 1", data.entity_type);
            if let Err(err) = data.set_field(TREASURE_VARIANT, FieldValue::Integer(1)) {
                log::error!("Cannot repair treasure variant of {}: {err}", data.entity_type);
            }
        }
        Self::with_presentation(index, data, presentation)
    }

    fn with_presentation(index: EntityIndex, data: EntityData, presentation: EntityPresentation) -> Self {
        let mut model = Self {
            index,
            data,
            presentation,
            draw_info: None,
            traversable: true,
        };
        model.refresh_traversable();
        model.refresh_draw_info();
        model
    }

    pub fn index(&self) -> EntityIndex {
        self.index
    }

    pub(crate) fn set_index(&mut self, index: EntityIndex) {
        self.index = index;
        self.data.layer = index.layer;
    }

    pub fn entity_type(&self) -> EntityType {
        self.data.entity_type
    }

    pub fn data(&self) -> &EntityData {
        &self.data
    }

    pub fn into_data(self) -> EntityData {
        self.data
    }

    pub fn presentation(&self) -> &EntityPresentation {
        &self.presentation
    }

    pub fn name(&self) -> Option<&str> {
        self.data.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.data.name = name;
    }

    pub fn position(&self) -> Position {
        self.data.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.data.position = position;
    }

    pub fn origin(&self) -> Position {
        self.presentation.origin
    }

    pub fn size(&self) -> Size {
        self.data.size
    }

    /// Area covered on the map: the position is where the origin point lies.
    pub fn bounding_box(&self) -> Rectangle {
        Rectangle::new(self.position() - self.origin(), self.size())
    }

    pub fn resize_mode(&self) -> ResizeMode {
        if self.entity_type() == EntityType::Jumper {
            // diagonal jumpers are squares, the others are lines across their direction
            return match self.direction().unwrap_or(0) {
                d if d % 2 == 1 => ResizeMode::Square,
                0 | 4 => ResizeMode::VerticalOnly,
                _ => ResizeMode::HorizontalOnly,
            };
        }
        self.presentation.resize_mode
    }

    pub fn is_resizable(&self) -> bool {
        self.resize_mode() != ResizeMode::None
    }

    pub fn is_size_valid(&self, size: Size) -> bool {
        if size.is_empty() {
            return false;
        }
        let base = self.presentation.size;
        let mode = self.resize_mode();
        if mode == ResizeMode::None {
            return size == base;
        }
        if size.width % RESIZE_GRID != 0 || size.height % RESIZE_GRID != 0 {
            return false;
        }
        match mode {
            ResizeMode::None => size == base,
            ResizeMode::SingleDimension => size.width == base.width || size.height == base.height,
            ResizeMode::Square => size.width == size.height,
            ResizeMode::HorizontalOnly => size.height == base.height,
            ResizeMode::VerticalOnly => size.width == base.width,
            ResizeMode::MultiDimension => true,
        }
    }

    pub fn set_size(&mut self, size: Size) -> Result<()> {
        if !self.is_size_valid(size) {
            return Err(EditorError::InvalidSize {
                entity_type: self.entity_type(),
                size,
            });
        }
        self.data.size = size;
        Ok(())
    }

    pub fn num_directions(&self) -> i32 {
        self.presentation.num_directions
    }

    pub fn has_direction_property(&self) -> bool {
        self.num_directions() > 0
    }

    pub fn direction(&self) -> Option<i32> {
        self.data.direction
    }

    pub fn is_direction_valid(&self, direction: Option<i32>) -> bool {
        is_direction_valid(&self.presentation, direction)
    }

    pub fn set_direction(&mut self, direction: Option<i32>) -> Result<()> {
        if !self.is_direction_valid(direction) {
            return Err(EditorError::InvalidDirection {
                entity_type: self.entity_type(),
                direction,
                num_directions: self.num_directions(),
            });
        }
        self.data.direction = direction;
        self.fit_size_to_resize_mode();
        self.refresh_draw_info();
        Ok(())
    }

    /// A jumper's resize mode follows its direction, so turning it can
    /// leave a size the new mode rejects. The longer side is kept as the
    /// length of the jumper.
    fn fit_size_to_resize_mode(&mut self) {
        let size = self.data.size;
        if self.is_size_valid(size) {
            return;
        }
        let base = self.presentation.size;
        let length = size.width.max(size.height);
        let fitted = match self.resize_mode() {
            ResizeMode::Square => Size::new(length, length),
            ResizeMode::HorizontalOnly => Size::new(length, base.height),
            ResizeMode::VerticalOnly => Size::new(base.width, length),
            _ => base,
        };
        let fitted = if self.is_size_valid(fitted) { fitted } else { base };
        log::debug!("{} at {} resized from {size} to {fitted} for direction {:?}", self.entity_type(), self.index, self.direction());
        self.data.size = fitted;
    }

    pub fn is_traversable(&self) -> bool {
        self.traversable
    }

    /// `None` when the entity deliberately shows nothing, e.g. a pickable
    /// without treasure.
    pub fn draw_info(&self) -> Option<&DrawInfo> {
        self.draw_info.as_ref()
    }

    pub fn get_field(&self, key: &str) -> Option<&FieldValue> {
        self.data.get_field(key)
    }

    /// Stores a field value (checked against the type's schema) and updates
    /// the presentation. Returns the previous value.
    pub fn set_field(&mut self, key: &str, value: FieldValue) -> Result<Option<FieldValue>> {
        if key == TREASURE_VARIANT && self.data.get_field(key).is_some() {
            if let Some(variant) = value.as_integer().filter(|variant| *variant < 1) {
                return Err(EditorError::InvalidTreasureVariant { variant });
            }
        }
        let old = self.data.set_field(key, value)?;
        if let Some(value) = self.data.get_field(key).cloned() {
            self.notify_field_changed(key, &value);
        }
        Ok(old)
    }

    /// Called after a field value was stored. Keys the type does not
    /// watch are ignored.
    pub fn notify_field_changed(&mut self, key: &str, value: &FieldValue) {
        let Some(reaction) = reaction_for(self.entity_type(), key) else {
            log::trace!("{} ignores change of '{key}' to {value}", self.entity_type());
            return;
        };
        match reaction {
            FieldReaction::RefreshDrawInfo => self.refresh_draw_info(),
            FieldReaction::RefreshTraversable => self.refresh_traversable(),
        }
    }

    fn refresh_traversable(&mut self) {
        self.traversable = match self.presentation.traversable {
            TraversableRule::Fixed(traversable) => traversable,
            TraversableRule::UnlessField(key) => !self.data.get_bool(key).unwrap_or(false),
            TraversableRule::Field(key) => self.data.get_bool(key).unwrap_or(false),
        };
    }

    fn refresh_draw_info(&mut self) {
        self.draw_info = self.compute_draw_info();
    }

    fn compute_draw_info(&self) -> Option<DrawInfo> {
        let rule = self.presentation.draw;
        if let Some(key) = rule.sprite_field {
            if let Some(sprite_id) = self.data.get_string(key).filter(|id| !id.is_empty()) {
                return Some(DrawInfo::Sprite(DrawSpriteInfo {
                    sprite_id: format!("{}{sprite_id}", rule.sprite_prefix),
                    animation: None,
                    direction: self.direction().unwrap_or(0),
                    frame: 0,
                    tiled: false,
                }));
            }
        }

        match rule.base {
            BaseDraw::Shape {
                background,
                border,
                pixmap,
                tiled,
            } => Some(DrawInfo::Shape(DrawShapeInfo {
                background_color: background,
                between_border_color: border,
                pixmap: pixmap.map(str::to_string),
                tiled,
            })),
            BaseDraw::Sprite { sprite_id, tiled } => Some(DrawInfo::Sprite(DrawSpriteInfo {
                sprite_id: sprite_id.to_string(),
                animation: None,
                direction: self.direction().unwrap_or(0),
                frame: 0,
                tiled,
            })),
            BaseDraw::Images { resource, cell, row_field } => {
                let row = row_field.and_then(|key| self.data.get_integer(key)).unwrap_or(0).max(0);
                let images = (0..self.num_directions().max(1))
                    .map(|direction| ImageEntry {
                        source: ImageSource::Resource(resource.to_string()),
                        rect: Rectangle::from(direction * cell.width, row * cell.height, cell.width, cell.height),
                    })
                    .collect();
                Some(DrawInfo::ImageSet(DrawImageInfo {
                    images,
                    scale: self.presentation.size.width as f32 / cell.width as f32,
                    tiled: false,
                }))
            }
            BaseDraw::Treasure => {
                let name = self.data.get_string("treasure_name").unwrap_or_default();
                if name.is_empty() {
                    return None;
                }
                let variant = self.data.get_integer(TREASURE_VARIANT).unwrap_or(1);
                Some(DrawInfo::Sprite(DrawSpriteInfo {
                    sprite_id: TREASURE_SPRITE.to_string(),
                    animation: Some(name.to_string()),
                    direction: variant - 1,
                    frame: 0,
                    tiled: false,
                }))
            }
            BaseDraw::Pattern => {
                let pattern = self.data.get_string("pattern").unwrap_or_default();
                if pattern.is_empty() {
                    return Some(DrawInfo::Shape(DrawShapeInfo {
                        background_color: MISSING_PATTERN_COLOR,
                        between_border_color: None,
                        pixmap: None,
                        tiled: false,
                    }));
                }
                let tileset = self.data.get_string("tileset").filter(|id| !id.is_empty()).map(str::to_string);
                Some(DrawInfo::ImageSet(DrawImageInfo {
                    images: vec![ImageEntry {
                        source: ImageSource::Pattern {
                            tileset,
                            pattern: pattern.to_string(),
                        },
                        rect: Rectangle::default(),
                    }],
                    scale: 1.0,
                    tiled: true,
                }))
            }
        }
    }
}

fn is_direction_valid(presentation: &EntityPresentation, direction: Option<i32>) -> bool {
    match direction {
        None => presentation.num_directions == 0 || presentation.no_direction_allowed,
        Some(direction) => (0..presentation.num_directions).contains(&direction),
    }
}
