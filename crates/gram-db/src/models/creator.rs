//! Creator row model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Public columns of `creators`; `password_hash` is read separately
#[derive(Debug, Clone, FromRow)]
pub struct CreatorModel {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub bio: String,
    pub website: String,
    pub profile_image: Option<String>,
    pub post_count: i32,
    pub followers_count: i32,
    pub following_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
