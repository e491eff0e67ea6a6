#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_errors_doc
)]
//! Quest data records: entities, maps and tilesets as they are stored in
//! quest files.

mod color;
pub use color::*;

mod error;
pub use error::*;

mod position;
pub use position::*;

mod entity_type;
pub use entity_type::*;

mod field_value;
pub use field_value::*;

mod schema;

mod entity_data;
pub use entity_data::*;

mod map_data;
pub use map_data::*;

mod tileset_data;
pub use tileset_data::*;
