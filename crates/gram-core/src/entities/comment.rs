//! Comment entity

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// A message left by a creator on an image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Snowflake,
    pub image_id: Snowflake,
    pub creator_id: Snowflake,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(id: Snowflake, image_id: Snowflake, creator_id: Snowflake, message: String) -> Self {
        Self {
            id,
            image_id,
            creator_id,
            message,
            created_at: Utc::now(),
        }
    }

    #[inline]
    pub fn is_authored_by(&self, creator_id: Snowflake) -> bool {
        self.creator_id == creator_id
    }
}
