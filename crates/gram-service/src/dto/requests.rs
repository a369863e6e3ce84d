//! Request DTOs for API endpoints
//!
//! Bodies implement `Deserialize` and `Validate`; query strings only
//! `Deserialize` and convert into repository filters.

use serde::Deserialize;
use validator::Validate;

use gram_core::{CreatorFilter, ImageFilter, Snowflake};

use crate::services::{ServiceError, ServiceResult};

/// Longest comment we accept
pub const MAX_COMMENT_LENGTH: usize = 2200;

// ============================================================================
// Auth Requests
// ============================================================================

/// Account registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 150, message = "Username must be 1-150 characters"))]
    pub username: String,

    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,

    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name: Option<String>,

    pub bio: Option<String>,

    pub website: Option<String>,

    pub profile_image: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

// ============================================================================
// Creator Requests
// ============================================================================

/// Profile update; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCreatorRequest {
    #[validate(length(min = 1, max = 150, message = "Username must be 1-150 characters"))]
    pub username: Option<String>,

    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name: Option<String>,

    pub bio: Option<String>,

    pub website: Option<String>,

    /// Opaque file reference; an empty string clears it
    pub profile_image: Option<String>,

    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: Option<String>,
}

/// `GET /users/search` query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatorSearchQuery {
    pub id: Option<String>,
    pub username: Option<String>,
    pub name: Option<String>,
    pub post_count: Option<i32>,
    pub followers_count: Option<i32>,
    pub following_count: Option<i32>,
}

impl CreatorSearchQuery {
    /// # Errors
    /// Returns a validation error when `id` is not a snowflake
    pub fn into_filter(self) -> ServiceResult<CreatorFilter> {
        Ok(CreatorFilter {
            id: parse_id(self.id.as_deref())?,
            username: self.username,
            name: self.name,
            post_count: self.post_count,
            followers_count: self.followers_count,
            following_count: self.following_count,
        })
    }
}

// ============================================================================
// Image Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateImageRequest {
    /// Reference to the stored file
    #[validate(length(min = 1, message = "File reference is required"))]
    pub file: String,

    #[serde(default)]
    pub caption: String,

    #[serde(default)]
    pub tags: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateImageRequest {
    #[validate(length(min = 1, message = "File reference cannot be empty"))]
    pub file: Option<String>,

    pub caption: Option<String>,

    pub tags: Option<String>,
}

/// `GET /images/search` query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageSearchQuery {
    pub id: Option<String>,
    pub caption: Option<String>,
    pub like_count: Option<i32>,
    pub tags: Option<String>,
}

impl ImageSearchQuery {
    /// # Errors
    /// Returns a validation error when `id` is not a snowflake
    pub fn into_filter(self) -> ServiceResult<ImageFilter> {
        Ok(ImageFilter {
            id: parse_id(self.id.as_deref())?,
            caption: self.caption,
            like_count: self.like_count,
            tags: self.tags,
        })
    }
}

// ============================================================================
// Comment Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 2200, message = "Comment must be 1-2200 characters"))]
    pub message: String,
}

fn parse_id(raw: Option<&str>) -> ServiceResult<Option<Snowflake>> {
    raw.map(|s| Snowflake::parse(s).map_err(|_| ServiceError::validation(format!("Invalid id: {s}"))))
        .transpose()
}
