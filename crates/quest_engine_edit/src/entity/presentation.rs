//! Fixed, per-type presentation defaults.
//!
//! Everything the editor shows about an entity before looking at its field
//! values: where its origin is, its default size, how it can be resized, how
//! many directions it has and which rule computes its draw descriptor.

use crate::{Color, DefaultValue, EntityType, Position, Size};

pub const TREASURE_SPRITE: &str = "entities/items";

/// Shown for tiles that do not reference a pattern yet.
pub const MISSING_PATTERN_COLOR: Color = Color::new(255, 0, 255);

const CENTERED_ORIGIN: Position = Position::new(8, 13);
const TOP_LEFT_ORIGIN: Position = Position::new(0, 0);
const SQUARE_16: Size = Size::new(16, 16);
const ICON_CELL: Size = Size::new(32, 32);

/// Grid that sizes of resizable entities snap to.
pub const RESIZE_GRID: i32 = 8;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ResizeMode {
    /// Fixed size.
    None,
    /// Either the width or the height may change, not both.
    SingleDimension,
    /// Both may change but must stay equal.
    Square,
    HorizontalOnly,
    VerticalOnly,
    MultiDimension,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TraversableRule {
    Fixed(bool),
    /// Traversable iff the boolean field is false.
    UnlessField(&'static str),
    /// Traversable iff the boolean field is true.
    Field(&'static str),
}

/// How the descriptor is built when no sprite field overrides it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BaseDraw {
    Shape {
        background: Color,
        border: Option<Color>,
        pixmap: Option<&'static str>,
        tiled: bool,
    },
    Sprite {
        sprite_id: &'static str,
        tiled: bool,
    },
    /// Editor icon sheet: one column per direction, optionally one row per
    /// value of an integer field.
    Images {
        resource: &'static str,
        cell: Size,
        row_field: Option<&'static str>,
    },
    /// Treasure sprite: animation from the treasure name, direction from the variant.
    Treasure,
    /// Tile pattern of a tileset.
    Pattern,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DrawRule {
    /// String field naming a sprite; takes precedence over `base` when not empty.
    pub sprite_field: Option<&'static str>,
    pub sprite_prefix: &'static str,
    pub base: BaseDraw,
}

impl DrawRule {
    const fn base(base: BaseDraw) -> Self {
        Self {
            sprite_field: None,
            sprite_prefix: "",
            base,
        }
    }

    const fn sprite_field(key: &'static str, base: BaseDraw) -> Self {
        Self {
            sprite_field: Some(key),
            sprite_prefix: "",
            base,
        }
    }
}

const fn icons(resource: &'static str) -> BaseDraw {
    BaseDraw::Images {
        resource,
        cell: ICON_CELL,
        row_field: None,
    }
}

const fn sprite(sprite_id: &'static str) -> BaseDraw {
    BaseDraw::Sprite { sprite_id, tiled: false }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EntityPresentation {
    pub origin: Position,
    pub size: Size,
    pub resize_mode: ResizeMode,
    pub num_directions: i32,
    /// Whether "no direction" is a valid choice for this type.
    pub no_direction_allowed: bool,
    pub default_direction: Option<i32>,
    pub draw: DrawRule,
    pub traversable: TraversableRule,
}

impl EntityPresentation {
    const fn fixed(origin: Position, draw: DrawRule, traversable: bool) -> Self {
        Self {
            origin,
            size: SQUARE_16,
            resize_mode: ResizeMode::None,
            num_directions: 0,
            no_direction_allowed: false,
            default_direction: None,
            draw,
            traversable: TraversableRule::Fixed(traversable),
        }
    }

    const fn resizable(resize_mode: ResizeMode, draw: DrawRule, traversable: TraversableRule) -> Self {
        Self {
            origin: TOP_LEFT_ORIGIN,
            size: SQUARE_16,
            resize_mode,
            num_directions: 0,
            no_direction_allowed: false,
            default_direction: None,
            draw,
            traversable,
        }
    }

    const fn with_directions(mut self, num_directions: i32, default_direction: i32) -> Self {
        self.num_directions = num_directions;
        self.default_direction = Some(default_direction);
        self
    }

    pub fn of(entity_type: EntityType) -> Self {
        use EntityType as T;
        match entity_type {
            T::Tile | T::DynamicTile => Self::resizable(ResizeMode::MultiDimension, DrawRule::base(BaseDraw::Pattern), TraversableRule::Fixed(true)),
            T::Destination => {
                let mut presentation = Self::fixed(CENTERED_ORIGIN, DrawRule::sprite_field("sprite", icons("entity_destination.png")), true).with_directions(4, 3);
                presentation.no_direction_allowed = true;
                presentation
            }
            T::Teletransporter => Self::resizable(
                ResizeMode::MultiDimension,
                DrawRule::sprite_field(
                    "sprite",
                    BaseDraw::Shape {
                        background: Color::new(240, 200, 80),
                        border: None,
                        pixmap: Some("entity_teletransporter.png"),
                        tiled: false,
                    },
                ),
                TraversableRule::Fixed(true),
            ),
            T::Pickable => Self::fixed(CENTERED_ORIGIN, DrawRule::base(BaseDraw::Treasure), true),
            T::Destructible => Self::fixed(CENTERED_ORIGIN, DrawRule::sprite_field("sprite", icons("entity_destructible.png")), false),
            T::Chest => Self::fixed(CENTERED_ORIGIN, DrawRule::sprite_field("sprite", sprite("entities/chest")), false),
            // matches the default direction; `EntityModel::resize_mode` follows the current one
            T::Jumper => Self::resizable(
                ResizeMode::HorizontalOnly,
                DrawRule::base(BaseDraw::Shape {
                    background: Color::new(48, 184, 208),
                    border: Some(Color::WHITE),
                    pixmap: None,
                    tiled: false,
                }),
                TraversableRule::Fixed(true),
            )
            .with_directions(8, 6),
            T::Enemy => Self::fixed(
                CENTERED_ORIGIN,
                DrawRule {
                    sprite_field: Some("breed"),
                    sprite_prefix: "enemies/",
                    base: icons("entity_enemy.png"),
                },
                true,
            )
            .with_directions(4, 3),
            T::Npc => {
                let mut presentation = Self::fixed(CENTERED_ORIGIN, DrawRule::sprite_field("sprite", icons("entity_npc.png")), false).with_directions(4, 3);
                presentation.traversable = TraversableRule::Field("traversable");
                presentation
            }
            T::Block => {
                let mut presentation = Self::fixed(CENTERED_ORIGIN, DrawRule::sprite_field("sprite", sprite("entities/block")), false).with_directions(4, 0);
                presentation.no_direction_allowed = true;
                presentation.default_direction = None;
                presentation
            }
            T::Switch => Self::fixed(TOP_LEFT_ORIGIN, DrawRule::sprite_field("sprite", icons("entity_switch.png")), true),
            T::Wall => Self::resizable(
                ResizeMode::MultiDimension,
                DrawRule::base(BaseDraw::Shape {
                    background: Color::new(216, 56, 56).with_alpha(96),
                    border: None,
                    pixmap: Some("entity_wall_resizable.png"),
                    tiled: true,
                }),
                TraversableRule::UnlessField("stops_hero"),
            ),
            T::Sensor => Self::resizable(
                ResizeMode::MultiDimension,
                DrawRule::base(BaseDraw::Shape {
                    background: Color::new(110, 160, 255).with_alpha(96),
                    border: None,
                    pixmap: Some("entity_sensor_resizable.png"),
                    tiled: true,
                }),
                TraversableRule::Fixed(true),
            ),
            T::Crystal => Self::fixed(CENTERED_ORIGIN, DrawRule::base(sprite("entities/crystal")), false),
            T::CrystalBlock => Self::resizable(
                ResizeMode::MultiDimension,
                DrawRule::base(BaseDraw::Sprite {
                    sprite_id: "entities/crystal_block",
                    tiled: true,
                }),
                TraversableRule::Fixed(false),
            ),
            T::ShopTreasure => {
                let mut presentation = Self::fixed(Position::new(16, 29), DrawRule::base(BaseDraw::Treasure), false);
                presentation.size = Size::new(32, 32);
                presentation
            }
            T::Stream => Self::fixed(CENTERED_ORIGIN, DrawRule::sprite_field("sprite", icons("entity_stream.png")), true).with_directions(8, 6),
            T::Door => Self::fixed(TOP_LEFT_ORIGIN, DrawRule::sprite_field("sprite", icons("entity_door.png")), false).with_directions(4, 1),
            T::Stairs => Self::fixed(
                TOP_LEFT_ORIGIN,
                DrawRule::base(BaseDraw::Images {
                    resource: "entity_stairs.png",
                    cell: ICON_CELL,
                    row_field: Some("subtype"),
                }),
                true,
            )
            .with_directions(4, 1),
            T::Separator => Self::resizable(
                ResizeMode::SingleDimension,
                DrawRule::base(BaseDraw::Shape {
                    background: Color::new(224, 108, 243).with_alpha(128),
                    border: Some(Color::new(224, 108, 243)),
                    pixmap: None,
                    tiled: false,
                }),
                TraversableRule::Fixed(true),
            ),
            T::CustomEntity => {
                let mut presentation = Self::fixed(CENTERED_ORIGIN, DrawRule::sprite_field("sprite", icons("entity_custom.png")), true).with_directions(4, 3);
                presentation.resize_mode = ResizeMode::MultiDimension;
                presentation
            }
        }
    }

    pub fn is_resizable(&self) -> bool {
        self.resize_mode != ResizeMode::None
    }
}

/// Field values that replace the data-format default when an entity is
/// created in the editor. Applied once, never to loaded records.
pub fn initial_field_values(entity_type: EntityType) -> &'static [(&'static str, DefaultValue)] {
    match entity_type {
        EntityType::ShopTreasure => &[("price", DefaultValue::Integer(10))],
        _ => &[],
    }
}
