use std::{collections::BTreeMap, fs, ops::Bound, path::Path};

use serde::{Deserialize, Serialize};

use crate::{Color, EngineError, Rectangle, Result};

/// Terrain of a tile pattern, deciding how entities can cross it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ground {
    Empty,
    #[default]
    Traversable,
    Wall,
    LowWall,
    WallTopRight,
    WallTopLeft,
    WallBottomLeft,
    WallBottomRight,
    WallTopRightWater,
    WallTopLeftWater,
    WallBottomLeftWater,
    WallBottomRightWater,
    DeepWater,
    ShallowWater,
    Grass,
    Hole,
    Ice,
    Ladder,
    Prickles,
    Lava,
}

impl Ground {
    /// Whether the hero can walk over this ground (possibly with side effects).
    pub fn is_traversable(&self) -> bool {
        !matches!(
            self,
            Ground::Wall
                | Ground::LowWall
                | Ground::WallTopRight
                | Ground::WallTopLeft
                | Ground::WallBottomLeft
                | Ground::WallBottomRight
                | Ground::WallTopRightWater
                | Ground::WallTopLeftWater
                | Ground::WallBottomLeftWater
                | Ground::WallBottomRightWater
        )
    }

    /// Diagonal walls only block half of their square.
    pub fn is_diagonal(&self) -> bool {
        matches!(
            self,
            Ground::WallTopRight
                | Ground::WallTopLeft
                | Ground::WallBottomLeft
                | Ground::WallBottomRight
                | Ground::WallTopRightWater
                | Ground::WallTopLeftWater
                | Ground::WallBottomLeftWater
                | Ground::WallBottomRightWater
        )
    }
}

/// How a pattern may be stretched when a tile is resized.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternRepeatMode {
    #[default]
    All,
    Horizontal,
    Vertical,
    None,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternScrolling {
    #[default]
    None,
    Parallax,
    #[serde(rename = "self")]
    SelfScrolling,
}

pub const DEFAULT_FRAME_DELAY: u32 = 250;

fn default_frame_delay() -> u32 {
    DEFAULT_FRAME_DELAY
}

/// One tile pattern of a tileset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternData {
    #[serde(default)]
    pub ground: Ground,
    #[serde(default)]
    pub default_layer: i32,
    #[serde(default)]
    pub repeat_mode: PatternRepeatMode,
    #[serde(default)]
    pub scrolling: PatternScrolling,
    /// Source rectangles in the tileset image, more than one for animated patterns.
    pub frames: Vec<Rectangle>,
    #[serde(default = "default_frame_delay")]
    pub frame_delay: u32,
    #[serde(default)]
    pub mirror_loop: bool,
}

impl PatternData {
    pub fn new(frame: Rectangle) -> Self {
        Self {
            ground: Ground::default(),
            default_layer: 0,
            repeat_mode: PatternRepeatMode::default(),
            scrolling: PatternScrolling::default(),
            frames: vec![frame],
            frame_delay: DEFAULT_FRAME_DELAY,
            mirror_loop: false,
        }
    }

    pub fn with_ground(mut self, ground: Ground) -> Self {
        self.ground = ground;
        self
    }

    pub fn is_animated(&self) -> bool {
        self.frames.len() > 1
    }

    /// Rectangle of the first frame, the one shown for static previews.
    pub fn first_frame(&self) -> Rectangle {
        self.frames.first().copied().unwrap_or_default()
    }
}

/// Pattern ids may not be empty nor start/end with whitespace.
pub fn is_valid_pattern_id(id: &str) -> bool {
    !id.is_empty() && id.trim() == id && !id.chars().any(char::is_control)
}

/// A tileset: background color and the patterns, kept sorted by id.
///
/// The index of a pattern is the rank of its id, so renaming a pattern
/// may move it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TilesetFile", into = "TilesetFile")]
pub struct TilesetData {
    pub background_color: Color,
    patterns: BTreeMap<String, PatternData>,
}

impl TilesetData {
    pub fn new(background_color: Color) -> Self {
        Self {
            background_color,
            patterns: BTreeMap::new(),
        }
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    pub fn pattern_ids(&self) -> impl Iterator<Item = &str> {
        self.patterns.keys().map(String::as_str)
    }

    pub fn patterns(&self) -> impl Iterator<Item = (&str, &PatternData)> {
        self.patterns.iter().map(|(id, pattern)| (id.as_str(), pattern))
    }

    pub fn exists(&self, id: &str) -> bool {
        self.patterns.contains_key(id)
    }

    pub fn pattern_index(&self, id: &str) -> Option<usize> {
        if !self.exists(id) {
            return None;
        }
        Some(self.patterns.range::<str, _>((Bound::Unbounded, Bound::Excluded(id))).count())
    }

    pub fn pattern_id(&self, index: usize) -> Option<&str> {
        self.patterns.keys().nth(index).map(String::as_str)
    }

    pub fn get_pattern(&self, id: &str) -> Option<&PatternData> {
        self.patterns.get(id)
    }

    pub fn get_pattern_mut(&mut self, id: &str) -> Option<&mut PatternData> {
        self.patterns.get_mut(id)
    }

    /// Adds a pattern and returns its index.
    pub fn add_pattern(&mut self, id: &str, pattern: PatternData) -> Result<usize> {
        if !is_valid_pattern_id(id) {
            return Err(EngineError::InvalidPatternId { id: id.to_string() });
        }
        if self.exists(id) {
            return Err(EngineError::DuplicatePatternId { id: id.to_string() });
        }
        if pattern.frames.is_empty() {
            return Err(EngineError::EmptyPatternFrames { id: id.to_string() });
        }
        self.patterns.insert(id.to_string(), pattern);
        Ok(self.pattern_index(id).unwrap_or_default())
    }

    /// Removes a pattern and returns the index it had.
    pub fn remove_pattern(&mut self, id: &str) -> Result<(usize, PatternData)> {
        let index = self.pattern_index(id).ok_or_else(|| EngineError::UnknownPatternId { id: id.to_string() })?;
        let pattern = self
            .patterns
            .remove(id)
            .ok_or_else(|| EngineError::UnknownPatternId { id: id.to_string() })?;
        Ok((index, pattern))
    }

    /// Changes the id of a pattern. Returns its old and new index.
    pub fn set_pattern_id(&mut self, old_id: &str, new_id: &str) -> Result<(usize, usize)> {
        let old_index = self
            .pattern_index(old_id)
            .ok_or_else(|| EngineError::UnknownPatternId { id: old_id.to_string() })?;
        if old_id == new_id {
            return Ok((old_index, old_index));
        }
        if !is_valid_pattern_id(new_id) {
            return Err(EngineError::InvalidPatternId { id: new_id.to_string() });
        }
        if self.exists(new_id) {
            return Err(EngineError::DuplicatePatternId { id: new_id.to_string() });
        }
        let (_, pattern) = self.remove_pattern(old_id)?;
        let new_index = self.add_pattern(new_id, pattern)?;
        Ok((old_index, new_index))
    }

    pub fn from_toml_str(txt: &str) -> Result<Self> {
        Ok(toml::from_str(txt)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path).map_err(|e| EngineError::read_file(path, e))?;
        let tileset = Self::from_toml_str(&txt)?;
        log::debug!("Loaded tileset {} with {} patterns", path.display(), tileset.pattern_count());
        Ok(tileset)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let txt = self.to_toml_string()?;
        fs::write(path, txt).map_err(|e| EngineError::write_file(path, e))
    }
}

#[derive(Clone, Serialize, Deserialize)]
struct TilesetFile {
    #[serde(default)]
    background_color: Color,
    #[serde(default, rename = "pattern")]
    patterns: BTreeMap<String, PatternData>,
}

impl TryFrom<TilesetFile> for TilesetData {
    type Error = EngineError;

    fn try_from(file: TilesetFile) -> Result<Self> {
        let mut tileset = TilesetData::new(file.background_color);
        for (id, pattern) in file.patterns {
            tileset.add_pattern(&id, pattern)?;
        }
        Ok(tileset)
    }
}

impl From<TilesetData> for TilesetFile {
    fn from(tileset: TilesetData) -> Self {
        TilesetFile {
            background_color: tileset.background_color,
            patterns: tileset.patterns,
        }
    }
}
