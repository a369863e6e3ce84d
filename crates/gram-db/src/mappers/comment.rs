use gram_core::entities::Comment;
use gram_core::value_objects::Snowflake;

use crate::models::CommentModel;

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: Snowflake::new(model.id),
            image_id: Snowflake::new(model.image_id),
            creator_id: Snowflake::new(model.creator_id),
            message: model.message,
            created_at: model.created_at,
        }
    }
}
