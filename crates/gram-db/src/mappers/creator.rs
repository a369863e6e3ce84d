//! Creator entity <-> model mapper

use gram_core::entities::Creator;
use gram_core::value_objects::Snowflake;

use crate::models::CreatorModel;

impl From<CreatorModel> for Creator {
    fn from(model: CreatorModel) -> Self {
        Creator {
            id: Snowflake::new(model.id),
            username: model.username,
            name: model.name,
            bio: model.bio,
            website: model.website,
            profile_image: model.profile_image,
            post_count: model.post_count,
            followers_count: model.followers_count,
            following_count: model.following_count,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Column values for a new `creators` row.
///
/// Counters are not carried: a new account always starts at zero and the
/// column defaults take care of it.
pub struct CreatorInsert<'a> {
    pub id: i64,
    pub username: &'a str,
    pub password_hash: &'a str,
    pub name: &'a str,
    pub bio: &'a str,
    pub website: &'a str,
    pub profile_image: Option<&'a str>,
}

impl<'a> CreatorInsert<'a> {
    pub fn new(creator: &'a Creator, password_hash: &'a str) -> Self {
        Self {
            id: creator.id.into_inner(),
            username: &creator.username,
            password_hash,
            name: &creator.name,
            bio: &creator.bio,
            website: &creator.website,
            profile_image: creator.profile_image.as_deref(),
        }
    }
}
