//! Like service
//!
//! One like per (image, creator). The repository keeps `like_count` in step.

use gram_core::entities::Like;
use gram_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::LikeResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::image::ImageService;

pub struct LikeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LikeService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Like an image; liking it again is a conflict
    #[instrument(skip(self))]
    pub async fn like_image(
        &self,
        image_id: Snowflake,
        creator_id: Snowflake,
    ) -> ServiceResult<LikeResponse> {
        let like = Like::new(image_id, creator_id);
        self.ctx.like_repo().create(&like).await?;

        info!(image_id = %image_id, creator_id = %creator_id, "Image liked");

        Ok(LikeResponse::from(like))
    }

    #[instrument(skip(self))]
    pub async fn unlike_image(&self, image_id: Snowflake, creator_id: Snowflake) -> ServiceResult<()> {
        self.ctx.like_repo().delete(image_id, creator_id).await?;

        info!(image_id = %image_id, creator_id = %creator_id, "Image unliked");

        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn list_likes(&self, image_id: Snowflake) -> ServiceResult<Vec<LikeResponse>> {
        ImageService::new(self.ctx).find(image_id).await?;
        let likes = self.ctx.like_repo().find_by_image(image_id).await?;
        Ok(likes.into_iter().map(LikeResponse::from).collect())
    }
}
