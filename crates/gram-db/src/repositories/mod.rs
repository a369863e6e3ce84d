//! PostgreSQL repositories
//!
//! Writes that create or remove a counted row open a transaction, perform
//! the write, then apply the counter deltas from `gram_core::rules` before
//! committing.

mod comment;
mod counters;
mod creator;
mod error;
mod follow;
mod image;
mod like;

pub use comment::PgCommentRepository;
pub use creator::PgCreatorRepository;
pub use follow::PgFollowRepository;
pub use image::PgImageRepository;
pub use like::PgLikeRepository;
