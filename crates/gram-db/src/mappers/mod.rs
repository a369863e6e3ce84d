//! Row model to entity conversions
//!
//! `From<Model> for Entity` turns rows into domain objects; the `*Insert`
//! structs borrow an entity and expose the column values for a write.

mod comment;
mod creator;
mod image;
mod like;

pub use creator::CreatorInsert;
pub use image::ImageInsert;
