use gram_core::entities::Like;
use gram_core::value_objects::Snowflake;

use crate::models::LikeModel;

impl From<LikeModel> for Like {
    fn from(model: LikeModel) -> Self {
        Like {
            image_id: Snowflake::new(model.image_id),
            creator_id: Snowflake::new(model.creator_id),
            created_at: model.created_at,
        }
    }
}
