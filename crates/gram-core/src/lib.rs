//! # gram-core
//!
//! Domain layer for the photo-sharing backend: creators, images, comments,
//! likes, and the follow graph, together with the rules that keep the
//! denormalized counters in step with the relations they summarize.
//! Nothing in here knows about the database or HTTP.

pub mod entities;
pub mod error;
pub mod rules;
pub mod traits;
pub mod value_objects;

pub use entities::{Comment, Creator, FollowEdge, Image, Like};
pub use error::DomainError;
pub use rules::{can_modify, CounterDelta, CounterField, CounterOwner};
pub use traits::{
    CommentRepository, CreatorFilter, CreatorRepository, FollowRepository, ImageFilter,
    ImageRepository, LikeRepository, RepoResult,
};
pub use value_objects::{AccessMethod, Snowflake, SnowflakeGenerator, SnowflakeError, WriteKind};
