//! Data transfer objects for API requests and responses

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateCommentRequest, CreateImageRequest, CreatorSearchQuery, ImageSearchQuery, LoginRequest,
    RefreshTokenRequest, RegisterRequest, UpdateCreatorRequest, UpdateImageRequest,
    MAX_COMMENT_LENGTH,
};

pub use responses::{
    AuthResponse, CommentResponse, CreatorResponse, FollowResponse, HealthChecks, HealthResponse,
    ImageResponse, LikeResponse, ReadinessResponse, UnfollowResponse,
};

pub use mappers::ImageWithComments;
