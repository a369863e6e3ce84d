//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found
    // =========================================================================
    #[error("Creator not found: {0}")]
    CreatorNotFound(Snowflake),

    #[error("Creator not found: {0}")]
    UsernameNotFound(String),

    #[error("Image not found: {0}")]
    ImageNotFound(Snowflake),

    #[error("Comment not found: {0}")]
    CommentNotFound(Snowflake),

    #[error("Like not found on image {0}")]
    LikeNotFound(Snowflake),

    // =========================================================================
    // Validation
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    // =========================================================================
    // Authorization
    // =========================================================================
    #[error("Only the owner can modify this resource")]
    NotResourceOwner,

    #[error("Only the author or the image owner can delete this comment")]
    NotCommentModerator,

    // =========================================================================
    // Conflict
    // =========================================================================
    #[error("Username already taken")]
    UsernameAlreadyExists,

    #[error("Image already liked")]
    LikeAlreadyExists,

    // =========================================================================
    // Infrastructure (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Stable error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::CreatorNotFound(_) | Self::UsernameNotFound(_) => "UNKNOWN_CREATOR",
            Self::ImageNotFound(_) => "UNKNOWN_IMAGE",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::LikeNotFound(_) => "UNKNOWN_LIKE",

            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidUsername(_) => "INVALID_USERNAME",
            Self::WeakPassword(_) => "WEAK_PASSWORD",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",

            Self::NotResourceOwner => "NOT_RESOURCE_OWNER",
            Self::NotCommentModerator => "NOT_COMMENT_MODERATOR",

            Self::UsernameAlreadyExists => "USERNAME_ALREADY_EXISTS",
            Self::LikeAlreadyExists => "LIKE_ALREADY_EXISTS",

            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::CreatorNotFound(_)
                | Self::UsernameNotFound(_)
                | Self::ImageNotFound(_)
                | Self::CommentNotFound(_)
                | Self::LikeNotFound(_)
        )
    }

    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidUsername(_)
                | Self::WeakPassword(_)
                | Self::ContentTooLong { .. }
        )
    }

    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotResourceOwner | Self::NotCommentModerator)
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::UsernameAlreadyExists | Self::LikeAlreadyExists)
    }
}
