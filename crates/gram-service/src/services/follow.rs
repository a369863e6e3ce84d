//! Follow graph service
//!
//! Follow and unfollow are idempotent. The repository adjusts
//! `followers_count` and `following_count` in the same transaction as the
//! edge write.

use gram_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{CreatorResponse, FollowResponse, UnfollowResponse};

use super::context::ServiceContext;
use super::creator::CreatorService;
use super::error::ServiceResult;

pub struct FollowService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FollowService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// `follower_id` starts following `creator_id`
    #[instrument(skip(self))]
    pub async fn follow(
        &self,
        creator_id: Snowflake,
        follower_id: Snowflake,
    ) -> ServiceResult<FollowResponse> {
        self.ensure_exists(creator_id).await?;
        self.ensure_exists(follower_id).await?;

        let created = self.ctx.follow_repo().follow(creator_id, follower_id).await?;
        if created {
            info!(creator_id = %creator_id, follower_id = %follower_id, "Follow edge created");
        }

        Ok(FollowResponse::ok(created))
    }

    /// Remove the edge if present; reports whether it was
    #[instrument(skip(self))]
    pub async fn unfollow(
        &self,
        creator_id: Snowflake,
        follower_id: Snowflake,
    ) -> ServiceResult<UnfollowResponse> {
        self.ensure_exists(creator_id).await?;
        self.ensure_exists(follower_id).await?;

        let was_following = self.ctx.follow_repo().unfollow(creator_id, follower_id).await?;
        if was_following {
            info!(creator_id = %creator_id, follower_id = %follower_id, "Follow edge removed");
        }

        Ok(UnfollowResponse::ok(was_following))
    }

    #[instrument(skip(self))]
    pub async fn get_followers(&self, username: &str) -> ServiceResult<Vec<CreatorResponse>> {
        let creator = CreatorService::new(self.ctx).find_by_username(username).await?;
        let followers = self.ctx.follow_repo().find_followers(creator.id).await?;
        Ok(followers.into_iter().map(CreatorResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_following(&self, username: &str) -> ServiceResult<Vec<CreatorResponse>> {
        let creator = CreatorService::new(self.ctx).find_by_username(username).await?;
        let following = self.ctx.follow_repo().find_following(creator.id).await?;
        Ok(following.into_iter().map(CreatorResponse::from).collect())
    }

    async fn ensure_exists(&self, id: Snowflake) -> ServiceResult<()> {
        if self.ctx.creator_repo().find_by_id(id).await?.is_none() {
            return Err(DomainError::CreatorNotFound(id).into());
        }
        Ok(())
    }
}
