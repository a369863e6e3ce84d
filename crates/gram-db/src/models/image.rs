use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct ImageModel {
    pub id: i64,
    pub creator_id: i64,
    pub file: String,
    pub caption: String,
    pub tags: String,
    pub like_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
