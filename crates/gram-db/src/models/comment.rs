use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: i64,
    pub image_id: i64,
    pub creator_id: i64,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
