//! Domain entities

mod comment;
mod creator;
mod follow;
mod image;
mod like;

pub use comment::Comment;
pub use creator::Creator;
pub use follow::FollowEdge;
pub use image::Image;
pub use like::Like;
