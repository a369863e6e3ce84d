//! Creator entity - an account that posts, comments, likes, and follows

use chrono::{DateTime, Utc};

use crate::rules::{CounterDelta, CounterField, CounterOwner};
use crate::value_objects::Snowflake;

/// Account holder and owner of images
///
/// The three counters are denormalized caches: `post_count` is the number of
/// images owned, `followers_count` the number of incoming follow edges, and
/// `following_count` the number of outgoing ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creator {
    pub id: Snowflake,
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

impl Creator {
    /// Create a fresh account with zeroed counters
    pub fn new(id: Snowflake, username: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            name: String::new(),
            bio: String::new(),
            website: String::new(),
            profile_image: None,
            post_count: 0,
            followers_count: 0,
            following_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a counter delta addressed to this creator.
    ///
    /// Deltas for other owners are ignored. Counters floor at zero.
    pub fn apply(&mut self, delta: &CounterDelta) {
        if delta.owner != CounterOwner::Creator(self.id) {
            return;
        }

        let slot = match delta.field {
            CounterField::PostCount => &mut self.post_count,
            CounterField::FollowersCount => &mut self.followers_count,
            CounterField::FollowingCount => &mut self.following_count,
            CounterField::LikeCount => return,
        };
        *slot = (*slot + delta.amount).max(0);
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
