//! Repository traits (ports) - define the interface for data access
//!
//! Every method that inserts or deletes a counted row also applies the
//! matching counter deltas from [`crate::rules`], atomically with the write.
//! Callers never adjust counters themselves.

use async_trait::async_trait;

use crate::entities::{Comment, Creator, Image, Like};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Creator Repository
// ============================================================================

/// Exact-match filter for creator search; unset fields match everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreatorFilter {
    pub id: Option<Snowflake>,
    pub username: Option<String>,
    pub name: Option<String>,
    pub post_count: Option<i32>,
    pub followers_count: Option<i32>,
    pub following_count: Option<i32>,
}

impl CreatorFilter {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, creator: &Creator) -> bool {
        self.id.is_none_or(|v| v == creator.id)
            && self.username.as_deref().is_none_or(|v| v == creator.username)
            && self.name.as_deref().is_none_or(|v| v == creator.name)
            && self.post_count.is_none_or(|v| v == creator.post_count)
            && self.followers_count.is_none_or(|v| v == creator.followers_count)
            && self.following_count.is_none_or(|v| v == creator.following_count)
    }
}

#[async_trait]
pub trait CreatorRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Creator>>;

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<Creator>>;

    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Every creator, oldest account first
    async fn list(&self) -> RepoResult<Vec<Creator>>;

    async fn search(&self, filter: &CreatorFilter) -> RepoResult<Vec<Creator>>;

    /// Insert a new account; a taken username is `UsernameAlreadyExists`
    async fn create(&self, creator: &Creator, password_hash: &str) -> RepoResult<()>;

    /// Persist profile fields (username, name, bio, website, profile image)
    /// and, when given, a new password hash, all in one write. Counters are
    /// never written through this path.
    async fn update(&self, creator: &Creator, password_hash: Option<&str>) -> RepoResult<()>;

    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;

    /// Remove the account together with everything it owns, adjusting the
    /// counters of every surviving row that referenced it.
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Follow Repository
// ============================================================================

#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Make `follower_id` follow `creator_id`.
    ///
    /// Returns `true` if a new edge was created (and both counters moved),
    /// `false` if the edge already existed.
    async fn follow(&self, creator_id: Snowflake, follower_id: Snowflake) -> RepoResult<bool>;

    /// Remove the edge. Returns `false` when there was nothing to remove.
    async fn unfollow(&self, creator_id: Snowflake, follower_id: Snowflake) -> RepoResult<bool>;

    /// Creators following `creator_id`
    async fn find_followers(&self, creator_id: Snowflake) -> RepoResult<Vec<Creator>>;

    /// Creators that `follower_id` follows
    async fn find_following(&self, follower_id: Snowflake) -> RepoResult<Vec<Creator>>;
}

// ============================================================================
// Image Repository
// ============================================================================

/// Exact-match filter for image search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageFilter {
    pub id: Option<Snowflake>,
    pub caption: Option<String>,
    pub like_count: Option<i32>,
    pub tags: Option<String>,
}

impl ImageFilter {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, image: &Image) -> bool {
        self.id.is_none_or(|v| v == image.id)
            && self.caption.as_deref().is_none_or(|v| v == image.caption)
            && self.like_count.is_none_or(|v| v == image.like_count)
            && self.tags.as_deref().is_none_or(|v| v == image.tags)
    }
}

#[async_trait]
pub trait ImageRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Image>>;

    /// Images owned by everyone `follower_id` follows, newest first
    async fn find_feed(&self, follower_id: Snowflake) -> RepoResult<Vec<Image>>;

    async fn search(&self, filter: &ImageFilter) -> RepoResult<Vec<Image>>;

    /// Insert and bump the owner's `post_count`
    async fn create(&self, image: &Image) -> RepoResult<()>;

    /// Persist caption, tags and file; never moves counters
    async fn update(&self, image: &Image) -> RepoResult<()>;

    /// Delete (cascading comments and likes) and drop the owner's `post_count`
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>>;

    /// Comments on one image, oldest first
    async fn find_by_image(&self, image_id: Snowflake) -> RepoResult<Vec<Comment>>;

    /// Comments on several images in one round trip, oldest first
    async fn find_by_images(&self, image_ids: &[Snowflake]) -> RepoResult<Vec<Comment>>;

    async fn create(&self, comment: &Comment) -> RepoResult<()>;

    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Like Repository
// ============================================================================

#[async_trait]
pub trait LikeRepository: Send + Sync {
    async fn find_by_image(&self, image_id: Snowflake) -> RepoResult<Vec<Like>>;

    /// Insert and bump `like_count`; a duplicate is `LikeAlreadyExists`
    /// and leaves the counter untouched.
    async fn create(&self, like: &Like) -> RepoResult<()>;

    /// Delete and drop `like_count`; a missing like is `LikeNotFound`.
    async fn delete(&self, image_id: Snowflake, creator_id: Snowflake) -> RepoResult<()>;
}
