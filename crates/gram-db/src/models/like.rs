use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Row of `likes`; the primary key is the (image, creator) pair
#[derive(Debug, Clone, FromRow)]
pub struct LikeModel {
    pub image_id: i64,
    pub creator_id: i64,
    pub created_at: DateTime<Utc>,
}
