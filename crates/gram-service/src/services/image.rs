//! Image service
//!
//! Posting and deleting images moves the owner's `post_count`; the
//! repository does that inside the write transaction.

use gram_core::entities::Image;
use gram_core::{can_modify, AccessMethod, DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{
    CreateImageRequest, ImageResponse, ImageSearchQuery, ImageWithComments, UpdateImageRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct ImageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ImageService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self, request), fields(creator_id = %creator_id))]
    pub async fn create_image(
        &self,
        creator_id: Snowflake,
        request: CreateImageRequest,
    ) -> ServiceResult<ImageResponse> {
        let mut image = Image::new(self.ctx.generate_id(), creator_id, request.file);
        image.caption = request.caption;
        image.tags = request.tags;

        self.ctx.image_repo().create(&image).await?;

        info!(image_id = %image.id, creator_id = %creator_id, "Image created");

        Ok(ImageResponse::from(image))
    }

    /// Image with its comments
    #[instrument(skip(self))]
    pub async fn get_image(&self, image_id: Snowflake) -> ServiceResult<ImageResponse> {
        let image = self.find(image_id).await?;
        let comments = self.ctx.comment_repo().find_by_image(image_id).await?;
        Ok(ImageResponse::from(ImageWithComments::new(image, comments)))
    }

    /// Edit caption, tags or file. Owner only; counters are untouched.
    #[instrument(skip(self, request), fields(image_id = %image_id, acting = %acting))]
    pub async fn update_image(
        &self,
        acting: Snowflake,
        image_id: Snowflake,
        method: AccessMethod,
        request: UpdateImageRequest,
    ) -> ServiceResult<ImageResponse> {
        let mut image = self.find(image_id).await?;

        if !can_modify(acting, image.creator_id, method) {
            return Err(DomainError::NotResourceOwner.into());
        }

        if let Some(file) = request.file {
            image.file = file;
        }
        if let Some(caption) = request.caption {
            image.caption = caption;
        }
        if let Some(tags) = request.tags {
            image.tags = tags;
        }
        image.touch();

        self.ctx.image_repo().update(&image).await?;

        info!(image_id = %image_id, "Image updated");

        let comments = self.ctx.comment_repo().find_by_image(image_id).await?;
        Ok(ImageResponse::from(ImageWithComments::new(image, comments)))
    }

    /// Delete an image the acting creator owns
    #[instrument(skip(self))]
    pub async fn delete_image(&self, acting: Snowflake, image_id: Snowflake) -> ServiceResult<()> {
        let image = self.find(image_id).await?;

        if !can_modify(acting, image.creator_id, AccessMethod::Delete) {
            return Err(DomainError::NotResourceOwner.into());
        }

        self.ctx.image_repo().delete(image_id).await?;

        info!(image_id = %image_id, creator_id = %image.creator_id, "Image deleted");

        Ok(())
    }

    /// Images of everyone the creator follows, newest first
    #[instrument(skip(self))]
    pub async fn feed(&self, creator_id: Snowflake) -> ServiceResult<Vec<ImageResponse>> {
        let images = self.ctx.image_repo().find_feed(creator_id).await?;
        self.with_comments(images).await
    }

    #[instrument(skip(self))]
    pub async fn search(&self, query: ImageSearchQuery) -> ServiceResult<Vec<ImageResponse>> {
        let filter = query.into_filter()?;
        let images = self.ctx.image_repo().search(&filter).await?;
        self.with_comments(images).await
    }

    pub(crate) async fn find(&self, image_id: Snowflake) -> ServiceResult<Image> {
        Ok(self
            .ctx
            .image_repo()
            .find_by_id(image_id)
            .await?
            .ok_or(DomainError::ImageNotFound(image_id))?)
    }

    async fn with_comments(&self, images: Vec<Image>) -> ServiceResult<Vec<ImageResponse>> {
        if images.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<Snowflake> = images.iter().map(|i| i.id).collect();
        let comments = self.ctx.comment_repo().find_by_images(&ids).await?;
        Ok(ImageWithComments::group(images, comments)
            .into_iter()
            .map(ImageResponse::from)
            .collect())
    }
}
