//! Response DTOs for API endpoints
//!
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Auth Responses
// ============================================================================

/// Tokens plus the authenticated creator
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CreatorResponse,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        user: CreatorResponse,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

// ============================================================================
// Creator Responses
// ============================================================================

/// Public profile with counters
#[derive(Debug, Clone, Serialize)]
pub struct CreatorResponse {
    pub id: String,
    pub username: String,
    pub name: String,
    pub bio: String,
    pub website: String,
    pub profile_image: Option<String>,
    pub post_count: i32,
    pub followers_count: i32,
    pub following_count: i32,
    pub created_at: DateTime<Utc>,
}

/// Result of `POST /users/follow/:user_id`
#[derive(Debug, Clone, Serialize)]
pub struct FollowResponse {
    pub status: String,
    /// False when the edge already existed
    pub created: bool,
}

impl FollowResponse {
    pub fn ok(created: bool) -> Self {
        Self {
            status: "ok".to_string(),
            created,
        }
    }
}

/// Result of `POST /users/unfollow/:user_id`
#[derive(Debug, Clone, Serialize)]
pub struct UnfollowResponse {
    pub status: String,
    pub was_following: bool,
}

impl UnfollowResponse {
    pub fn ok(was_following: bool) -> Self {
        Self {
            status: "ok".to_string(),
            was_following,
        }
    }
}

// ============================================================================
// Image Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ImageResponse {
    pub id: String,
    pub creator_id: String,
    pub file: String,
    pub caption: String,
    pub tags: String,
    pub like_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub comments: Vec<CommentResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub image_id: String,
    pub creator_id: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LikeResponse {
    pub image_id: String,
    pub creator_id: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
