//! Row models for the PostgreSQL tables

mod comment;
mod creator;
mod image;
mod like;

pub use comment::CommentModel;
pub use creator::CreatorModel;
pub use image::ImageModel;
pub use like::LikeModel;
