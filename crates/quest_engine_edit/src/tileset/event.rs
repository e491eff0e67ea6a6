use serde::{Deserialize, Serialize};

use crate::Color;

/// Pattern attribute touched by a `PatternChanged` event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternProperty {
    Ground,
    DefaultLayer,
    RepeatMode,
    Scrolling,
    Frames,
}

impl std::fmt::Display for PatternProperty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PatternProperty::Ground => "ground",
            PatternProperty::DefaultLayer => "default layer",
            PatternProperty::RepeatMode => "repeat mode",
            PatternProperty::Scrolling => "scrolling",
            PatternProperty::Frames => "frames",
        };
        write!(f, "{name}")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TilesetEvent {
    /// A pattern now lives at `index`; patterns previously at `index` or
    /// above moved up by one.
    PatternCreated { index: usize, id: String },
    /// The pattern that was at `index` is gone; patterns above moved down by one.
    PatternDeleted { index: usize, id: String },
    PatternRenamed {
        old_index: usize,
        old_id: String,
        new_index: usize,
        new_id: String,
    },
    PatternChanged { index: usize, id: String, property: PatternProperty },
    BackgroundColorChanged { color: Color },
}
