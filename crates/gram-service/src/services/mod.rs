//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] for the duration of a
//! request and orchestrates repository calls. Counter maintenance happens
//! inside the repositories, never here.

pub mod auth;
pub mod comment;
pub mod context;
pub mod creator;
pub mod error;
pub mod follow;
pub mod image;
pub mod like;

pub use auth::AuthService;
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use creator::CreatorService;
pub use error::{ServiceError, ServiceResult};
pub use follow::FollowService;
pub use image::ImageService;
pub use like::LikeService;
