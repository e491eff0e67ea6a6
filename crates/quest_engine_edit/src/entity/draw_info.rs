//! What a view needs to paint an entity.

use crate::{Color, Rectangle};

/// Plain shape: filled rectangle, optional border and optional pixmap.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawShapeInfo {
    pub background_color: Color,
    pub between_border_color: Option<Color>,
    /// Editor image resource drawn over the background.
    pub pixmap: Option<String>,
    /// Repeat the pixmap over the whole entity instead of centering it.
    pub tiled: bool,
}

/// Sprite from the quest, shown at a given animation/direction.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawSpriteInfo {
    pub sprite_id: String,
    /// `None` shows the sprite's default animation.
    pub animation: Option<String>,
    pub direction: i32,
    pub frame: i32,
    pub tiled: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ImageSource {
    /// Editor image resource.
    Resource(String),
    /// Tile pattern; `tileset: None` means the tileset of the map.
    Pattern { tileset: Option<String>, pattern: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ImageEntry {
    pub source: ImageSource,
    /// Source rectangle inside the resource. Unused for patterns.
    pub rect: Rectangle,
}

/// One image per direction (a single one for entities without direction).
#[derive(Clone, Debug, PartialEq)]
pub struct DrawImageInfo {
    pub images: Vec<ImageEntry>,
    pub scale: f32,
    pub tiled: bool,
}

impl DrawImageInfo {
    /// Image to show for a direction; entities without direction use the first one.
    pub fn image_for_direction(&self, direction: Option<i32>) -> Option<&ImageEntry> {
        let index = direction.unwrap_or(0).max(0) as usize;
        self.images.get(index).or_else(|| self.images.first())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DrawKind {
    Shape,
    Sprite,
    ImageSet,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawInfo {
    Shape(DrawShapeInfo),
    Sprite(DrawSpriteInfo),
    ImageSet(DrawImageInfo),
}

impl DrawInfo {
    pub fn kind(&self) -> DrawKind {
        match self {
            DrawInfo::Shape(_) => DrawKind::Shape,
            DrawInfo::Sprite(_) => DrawKind::Sprite,
            DrawInfo::ImageSet(_) => DrawKind::ImageSet,
        }
    }

    pub fn as_shape(&self) -> Option<&DrawShapeInfo> {
        match self {
            DrawInfo::Shape(info) => Some(info),
            _ => None,
        }
    }

    pub fn as_sprite(&self) -> Option<&DrawSpriteInfo> {
        match self {
            DrawInfo::Sprite(info) => Some(info),
            _ => None,
        }
    }

    pub fn as_image_set(&self) -> Option<&DrawImageInfo> {
        match self {
            DrawInfo::ImageSet(info) => Some(info),
            _ => None,
        }
    }
}
