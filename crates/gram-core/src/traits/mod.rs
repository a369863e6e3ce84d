//! Ports implemented by the persistence layer

mod repositories;

pub use repositories::{
    CommentRepository, CreatorFilter, CreatorRepository, FollowRepository, ImageFilter,
    ImageRepository, LikeRepository, RepoResult,
};
