use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{EngineError, EntityData, Result, Size};

pub const DEFAULT_MIN_LAYER: i32 = 0;
pub const DEFAULT_MAX_LAYER: i32 = 2;

/// Identifies a placed entity: its layer and its position in that layer's
/// drawing order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityIndex {
    pub layer: i32,
    pub order: usize,
}

impl EntityIndex {
    pub const fn new(layer: i32, order: usize) -> Self {
        Self { layer, order }
    }
}

impl std::fmt::Display for EntityIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.layer, self.order)
    }
}

/// Map-wide settings, everything except the entities.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapProperties {
    pub size: Size,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub world: Option<String>,
    #[serde(default)]
    pub tileset: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub music: Option<String>,
    #[serde(default = "default_min_layer")]
    pub min_layer: i32,
    #[serde(default = "default_max_layer")]
    pub max_layer: i32,
}

fn default_min_layer() -> i32 {
    DEFAULT_MIN_LAYER
}

fn default_max_layer() -> i32 {
    DEFAULT_MAX_LAYER
}

impl MapProperties {
    pub fn new(size: impl Into<Size>, tileset: impl Into<String>) -> Self {
        Self {
            size: size.into(),
            world: None,
            tileset: tileset.into(),
            music: None,
            min_layer: DEFAULT_MIN_LAYER,
            max_layer: DEFAULT_MAX_LAYER,
        }
    }

    pub fn is_valid_layer(&self, layer: i32) -> bool {
        (self.min_layer..=self.max_layer).contains(&layer)
    }

    pub fn layer_count(&self) -> usize {
        (self.max_layer - self.min_layer + 1).max(0) as usize
    }

    pub fn check_layer(&self, layer: i32) -> Result<()> {
        if self.is_valid_layer(layer) {
            Ok(())
        } else {
            Err(EngineError::InvalidLayer {
                layer,
                min: self.min_layer,
                max: self.max_layer,
            })
        }
    }
}

/// A map: its properties and its entities, ordered by layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MapFile", into = "MapFile")]
pub struct MapData {
    pub properties: MapProperties,
    layers: Vec<Vec<EntityData>>,
}

impl MapData {
    pub fn new(properties: MapProperties) -> Self {
        let layers = vec![Vec::new(); properties.layer_count()];
        Self { properties, layers }
    }

    /// Rebuilds a map from properties and entity records in any order.
    /// Records keep their relative order within a layer.
    pub fn from_parts(properties: MapProperties, entities: impl IntoIterator<Item = EntityData>) -> Result<Self> {
        let mut map = MapData::new(properties);
        for entity in entities {
            map.add_entity(entity)?;
        }
        Ok(map)
    }

    /// Splits the map into its properties and its records in layer order.
    pub fn into_parts(self) -> (MapProperties, Vec<EntityData>) {
        (self.properties, self.layers.into_iter().flatten().collect())
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

    pub fn get_entity(&self, index: EntityIndex) -> Option<&EntityData> {
        let slot = self.layer_slot(index.layer).ok()?;
        self.layers[slot].get(index.order)
    }

    pub fn get_entity_mut(&mut self, index: EntityIndex) -> Option<&mut EntityData> {
        let slot = self.layer_slot(index.layer).ok()?;
        self.layers[slot].get_mut(index.order)
    }

    /// Inserts a record at `index`; later records of the layer shift up by one.
    pub fn insert_entity(&mut self, index: EntityIndex, mut entity: EntityData) -> Result<()> {
        let slot = self.layer_slot(index.layer)?;
        if index.order > self.layers[slot].len() {
            return Err(EngineError::EntityIndexOutOfRange {
                layer: index.layer,
                order: index.order,
            });
        }
        entity.layer = index.layer;
        self.layers[slot].insert(index.order, entity);
        Ok(())
    }

    /// Appends a record on top of its layer and returns where it landed.
    pub fn add_entity(&mut self, entity: EntityData) -> Result<EntityIndex> {
        let slot = self.layer_slot(entity.layer)?;
        let index = EntityIndex::new(entity.layer, self.layers[slot].len());
        self.layers[slot].push(entity);
        Ok(index)
    }

    pub fn remove_entity(&mut self, index: EntityIndex) -> Result<EntityData> {
        let slot = self.layer_slot(index.layer)?;
        if index.order >= self.layers[slot].len() {
            return Err(EngineError::EntityIndexOutOfRange {
                layer: index.layer,
                order: index.order,
            });
        }
        Ok(self.layers[slot].remove(index.order))
    }

    /// All entities with their index, lowest layer first.
    pub fn entities(&self) -> impl Iterator<Item = (EntityIndex, &EntityData)> {
        let min_layer = self.properties.min_layer;
        self.layers.iter().enumerate().flat_map(move |(slot, entities)| {
            entities
                .iter()
                .enumerate()
                .map(move |(order, entity)| (EntityIndex::new(min_layer + slot as i32, order), entity))
        })
    }

    pub fn from_toml_str(txt: &str) -> Result<Self> {
        Ok(toml::from_str(txt)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path).map_err(|e| EngineError::read_file(path, e))?;
        let map = Self::from_toml_str(&txt)?;
        log::debug!("Loaded map {} with {} entities", path.display(), map.entity_count());
        Ok(map)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let txt = self.to_toml_string()?;
        fs::write(path, txt).map_err(|e| EngineError::write_file(path, e))
    }
}

/// On-disk layout of a map: entities are a flat list carrying their layer.
#[derive(Clone, Serialize, Deserialize)]
struct MapFile {
    #[serde(flatten)]
    properties: MapProperties,
    #[serde(default, rename = "entity")]
    entities: Vec<EntityData>,
}

impl TryFrom<MapFile> for MapData {
    type Error = EngineError;

    fn try_from(file: MapFile) -> Result<Self> {
        let entities = file.entities.into_iter().map(|mut entity| {
            entity.complete_fields();
            entity
        });
        MapData::from_parts(file.properties, entities)
    }
}

impl From<MapData> for MapFile {
    fn from(map: MapData) -> Self {
        let (properties, entities) = map.into_parts();
        MapFile { properties, entities }
    }
}
