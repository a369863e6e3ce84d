//! Like entity - unique per (image, creator)

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Like {
    pub image_id: Snowflake,
    pub creator_id: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl Like {
    pub fn new(image_id: Snowflake, creator_id: Snowflake) -> Self {
        Self {
            image_id,
            creator_id,
            created_at: Utc::now(),
        }
    }
}
