//! Comment service

use gram_core::entities::Comment;
use gram_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{CommentResponse, CreateCommentRequest, MAX_COMMENT_LENGTH};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::image::ImageService;

pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self, request), fields(image_id = %image_id, creator_id = %creator_id))]
    pub async fn create_comment(
        &self,
        image_id: Snowflake,
        creator_id: Snowflake,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        if request.message.chars().count() > MAX_COMMENT_LENGTH {
            return Err(DomainError::ContentTooLong {
                max: MAX_COMMENT_LENGTH,
            }
            .into());
        }

        let comment = Comment::new(self.ctx.generate_id(), image_id, creator_id, request.message);
        self.ctx.comment_repo().create(&comment).await?;

        info!(comment_id = %comment.id, "Comment created");

        Ok(CommentResponse::from(comment))
    }

    /// Comments on an image, oldest first
    #[instrument(skip(self))]
    pub async fn list_comments(&self, image_id: Snowflake) -> ServiceResult<Vec<CommentResponse>> {
        ImageService::new(self.ctx).find(image_id).await?;
        let comments = self.ctx.comment_repo().find_by_image(image_id).await?;
        Ok(comments.into_iter().map(CommentResponse::from).collect())
    }

    /// Delete a comment. Allowed for its author and for the image owner.
    #[instrument(skip(self))]
    pub async fn delete_comment(
        &self,
        acting: Snowflake,
        image_id: Snowflake,
        comment_id: Snowflake,
    ) -> ServiceResult<()> {
        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .filter(|c| c.image_id == image_id)
            .ok_or(DomainError::CommentNotFound(comment_id))?;

        self.remove(acting, &comment).await
    }

    /// Delete a comment addressed by id alone, with the same permissions
    #[instrument(skip(self))]
    pub async fn delete_comment_by_id(&self, acting: Snowflake, comment_id: Snowflake) -> ServiceResult<()> {
        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or(DomainError::CommentNotFound(comment_id))?;

        self.remove(acting, &comment).await
    }

    async fn remove(&self, acting: Snowflake, comment: &Comment) -> ServiceResult<()> {
        if !comment.is_authored_by(acting) {
            let image = ImageService::new(self.ctx).find(comment.image_id).await?;
            if !image.is_owned_by(acting) {
                return Err(DomainError::NotCommentModerator.into());
            }
        }

        self.ctx.comment_repo().delete(comment.id).await?;

        info!(comment_id = %comment.id, acting = %acting, "Comment deleted");

        Ok(())
    }
}
