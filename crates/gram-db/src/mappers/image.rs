//! Image entity <-> model mapper

use gram_core::entities::Image;
use gram_core::value_objects::Snowflake;

use crate::models::ImageModel;

impl From<ImageModel> for Image {
    fn from(model: ImageModel) -> Self {
        Image {
            id: Snowflake::new(model.id),
            creator_id: Snowflake::new(model.creator_id),
            file: model.file,
            caption: model.caption,
            tags: model.tags,
            like_count: model.like_count,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Column values for a new `images` row; `like_count` starts at zero
pub struct ImageInsert<'a> {
    pub id: i64,
    pub creator_id: i64,
    pub file: &'a str,
    pub caption: &'a str,
    pub tags: &'a str,
}

impl<'a> ImageInsert<'a> {
    pub fn new(image: &'a Image) -> Self {
        Self {
            id: image.id.into_inner(),
            creator_id: image.creator_id.into_inner(),
            file: &image.file,
            caption: &image.caption,
            tags: &image.tags,
        }
    }
}
