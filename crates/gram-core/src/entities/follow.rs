//! Follow edge - directed "follower follows creator" relation

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// At most one edge exists per ordered `(creator_id, follower_id)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowEdge {
    /// The creator being followed
    pub creator_id: Snowflake,
    /// The creator doing the following
    pub follower_id: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl FollowEdge {
    pub fn new(creator_id: Snowflake, follower_id: Snowflake) -> Self {
        Self {
            creator_id,
            follower_id,
            created_at: Utc::now(),
        }
    }

    /// Whether either endpoint is the given creator
    pub fn touches(&self, id: Snowflake) -> bool {
        self.creator_id == id || self.follower_id == id
    }
}
