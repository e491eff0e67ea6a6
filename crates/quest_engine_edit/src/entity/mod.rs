//! Entity presentation model
//!
//! Maps the raw entity records of a map onto editor objects:
//! - `EntityPresentation` - fixed per-type defaults (origin, size, resize
//!   policy, directions, draw rule)
//! - `field_reactions` - which field changes update what
//! - `EntityModel` - one placed entity with its derived draw descriptor and
//!   traversability

mod draw_info;
mod model;
mod presentation;
mod reactions;

pub use draw_info::*;
pub use model::EntityModel;
pub use presentation::*;
pub use reactions::{field_reactions, reaction_for, FieldReaction};
