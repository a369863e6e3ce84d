//! # gram-service
//!
//! Application layer: use cases over the repository traits, plus the request
//! and response DTOs the HTTP layer speaks.

pub mod dto;
pub mod services;

#[cfg(test)]
mod testing;

pub use services::{
    AuthService, CommentService, CreatorService, FollowService, ImageService, LikeService,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
