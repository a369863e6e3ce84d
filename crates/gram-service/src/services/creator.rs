//! Creator profile service

use gram_common::auth::{hash_password, validate_password_strength};
use gram_core::entities::Creator;
use gram_core::{can_modify, AccessMethod, DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{CreatorResponse, CreatorSearchQuery, UpdateCreatorRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

const MAX_USERNAME_LENGTH: usize = 150;

/// Usernames are letters, digits and `@ . + - _`
pub(crate) fn check_username(username: &str) -> Result<(), DomainError> {
    if username.is_empty() || username.chars().count() > MAX_USERNAME_LENGTH {
        return Err(DomainError::InvalidUsername(format!(
            "must be 1-{MAX_USERNAME_LENGTH} characters"
        )));
    }
    if let Some(c) = username
        .chars()
        .find(|c| !(c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_')))
    {
        return Err(DomainError::InvalidUsername(format!("'{c}' is not allowed")));
    }
    Ok(())
}

pub struct CreatorService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CreatorService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Public profile by username
    #[instrument(skip(self))]
    pub async fn get_creator(&self, username: &str) -> ServiceResult<CreatorResponse> {
        let creator = self.find_by_username(username).await?;
        Ok(CreatorResponse::from(creator))
    }

    /// Profile of the authenticated creator
    #[instrument(skip(self))]
    pub async fn get_current(&self, creator_id: Snowflake) -> ServiceResult<CreatorResponse> {
        let creator = self
            .ctx
            .creator_repo()
            .find_by_id(creator_id)
            .await?
            .ok_or(DomainError::CreatorNotFound(creator_id))?;
        Ok(CreatorResponse::from(creator))
    }

    /// Update a profile. Only the creator itself may do this.
    #[instrument(skip(self, request), fields(acting = %acting, username = %username))]
    pub async fn update_creator(
        &self,
        acting: Snowflake,
        username: &str,
        method: AccessMethod,
        request: UpdateCreatorRequest,
    ) -> ServiceResult<CreatorResponse> {
        let mut creator = self.find_by_username(username).await?;

        if !can_modify(acting, creator.id, method) {
            return Err(DomainError::NotResourceOwner.into());
        }

        if let Some(new_username) = request.username {
            if new_username != creator.username {
                check_username(&new_username)?;
                creator.username = new_username;
            }
        }
        if let Some(name) = request.name {
            creator.name = name;
        }
        if let Some(bio) = request.bio {
            creator.bio = bio;
        }
        if let Some(website) = request.website {
            creator.website = website;
        }
        if let Some(profile_image) = request.profile_image {
            creator.profile_image = Some(profile_image).filter(|p| !p.is_empty());
        }

        let password_hash = match request.password {
            Some(password) => {
                validate_password_strength(&password)?;
                Some(hash_password(&password)?)
            }
            None => None,
        };

        creator.touch();
        self.ctx
            .creator_repo()
            .update(&creator, password_hash.as_deref())
            .await?;

        info!(
            creator_id = %creator.id,
            password_changed = password_hash.is_some(),
            "Creator updated"
        );

        Ok(CreatorResponse::from(creator))
    }

    /// Delete the authenticated creator and everything it owns
    #[instrument(skip(self))]
    pub async fn delete_creator(&self, acting: Snowflake) -> ServiceResult<()> {
        self.ctx.creator_repo().delete(acting).await?;
        info!(creator_id = %acting, "Creator deleted");
        Ok(())
    }

    /// Every creator, oldest account first
    #[instrument(skip(self))]
    pub async fn explore(&self) -> ServiceResult<Vec<CreatorResponse>> {
        let creators = self.ctx.creator_repo().list().await?;
        Ok(creators.into_iter().map(CreatorResponse::from).collect())
    }

    /// Exact-match search; an empty query matches everyone
    #[instrument(skip(self))]
    pub async fn search(&self, query: CreatorSearchQuery) -> ServiceResult<Vec<CreatorResponse>> {
        let filter = query.into_filter()?;
        let creators = self.ctx.creator_repo().search(&filter).await?;
        Ok(creators.into_iter().map(CreatorResponse::from).collect())
    }

    pub(crate) async fn find_by_username(&self, username: &str) -> ServiceResult<Creator> {
        Ok(self
            .ctx
            .creator_repo()
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::UsernameNotFound(username.to_string()))?)
    }
}
