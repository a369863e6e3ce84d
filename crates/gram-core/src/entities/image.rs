//! Image entity - a post owned by one creator

use chrono::{DateTime, Utc};

use crate::rules::{CounterDelta, CounterField, CounterOwner};
use crate::value_objects::Snowflake;

/// Image post
///
/// `file` is an opaque reference to wherever the bytes live; storage is not
/// this service's concern. `like_count` caches the number of likes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub id: Snowflake,
    pub creator_id: Snowflake,
    pub file: String,
    pub caption: String,
    pub tags: String,
    pub like_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Image {
    pub fn new(id: Snowflake, creator_id: Snowflake, file: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            creator_id,
            file,
            caption: String::new(),
            tags: String::new(),
            like_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_owned_by(&self, creator_id: Snowflake) -> bool {
        self.creator_id == creator_id
    }

    /// Apply a `like_count` delta addressed to this image; floors at zero
    pub fn apply(&mut self, delta: &CounterDelta) {
        if delta.owner == CounterOwner::Image(self.id) && delta.field == CounterField::LikeCount {
            self.like_count = (self.like_count + delta.amount).max(0);
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
