use crate::value_objects::{Snowflake, WriteKind};

/// A denormalized counter column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CounterField {
    /// `creators.post_count`
    PostCount,
    /// `creators.followers_count`
    FollowersCount,
    /// `creators.following_count`
    FollowingCount,
    /// `images.like_count`
    LikeCount,
}

impl CounterField {
    /// Storage column name
    pub const fn column(self) -> &'static str {
        match self {
            Self::PostCount => "post_count",
            Self::FollowersCount => "followers_count",
            Self::FollowingCount => "following_count",
            Self::LikeCount => "like_count",
        }
    }
}

/// Row a counter lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CounterOwner {
    Creator(Snowflake),
    Image(Snowflake),
}

impl CounterOwner {
    pub const fn id(self) -> Snowflake {
        match self {
            Self::Creator(id) | Self::Image(id) => id,
        }
    }
}

/// Signed adjustment to one counter on one row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterDelta {
    pub owner: CounterOwner,
    pub field: CounterField,
    pub amount: i32,
}

impl CounterDelta {
    pub const fn new(owner: CounterOwner, field: CounterField, amount: i32) -> Self {
        Self {
            owner,
            field,
            amount,
        }
    }
}

fn nonzero(deltas: impl IntoIterator<Item = CounterDelta>) -> Vec<CounterDelta> {
    deltas.into_iter().filter(|d| d.amount != 0).collect()
}

/// Writing an image moves its creator's `post_count`.
pub fn image_deltas(kind: WriteKind, creator_id: Snowflake) -> Vec<CounterDelta> {
    nonzero([CounterDelta::new(
        CounterOwner::Creator(creator_id),
        CounterField::PostCount,
        kind.delta(),
    )])
}

/// Writing a like moves the image's `like_count`.
pub fn like_deltas(kind: WriteKind, image_id: Snowflake) -> Vec<CounterDelta> {
    nonzero([CounterDelta::new(
        CounterOwner::Image(image_id),
        CounterField::LikeCount,
        kind.delta(),
    )])
}

/// Writing the edge "`follower_id` follows `creator_id`" moves the followed
/// creator's `followers_count` and the follower's `following_count`.
pub fn follow_deltas(
    kind: WriteKind,
    creator_id: Snowflake,
    follower_id: Snowflake,
) -> Vec<CounterDelta> {
    nonzero([
        CounterDelta::new(
            CounterOwner::Creator(creator_id),
            CounterField::FollowersCount,
            kind.delta(),
        ),
        CounterDelta::new(
            CounterOwner::Creator(follower_id),
            CounterField::FollowingCount,
            kind.delta(),
        ),
    ])
}

/// Deltas that keep surviving rows consistent when a creator is removed.
///
/// `followers` are creators following the removed one, `following` are
/// creators it follows, and `liked_images` are images it liked. Deltas that
/// would land on the removed creator itself (self-follow) are dropped since
/// that row is going away.
pub fn creator_removal_deltas(
    creator_id: Snowflake,
    followers: &[Snowflake],
    following: &[Snowflake],
    liked_images: &[Snowflake],
) -> Vec<CounterDelta> {
    let incoming = followers
        .iter()
        .flat_map(|&follower| follow_deltas(WriteKind::Delete, creator_id, follower));
    let outgoing = following
        .iter()
        .flat_map(|&followed| follow_deltas(WriteKind::Delete, followed, creator_id));
    let likes = liked_images
        .iter()
        .flat_map(|&image| like_deltas(WriteKind::Delete, image));

    incoming
        .chain(outgoing)
        .filter(|d| d.owner != CounterOwner::Creator(creator_id))
        .chain(likes)
        .collect()
}
