//! Authentication service
//!
//! Registration, login and token refresh. Tokens are stateless; a refresh
//! token is good until it expires.

use gram_common::auth::{hash_password, validate_password_strength, verify_password, TokenPair};
use gram_common::AppError;
use gram_core::entities::Creator;
use gram_core::Snowflake;
use tracing::{info, instrument, warn};

use crate::dto::{AuthResponse, CreatorResponse, LoginRequest, RefreshTokenRequest, RegisterRequest};

use super::context::ServiceContext;
use super::creator::check_username;
use super::error::ServiceResult;

pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new creator and sign them in
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        check_username(&request.username)?;
        validate_password_strength(&request.password)?;

        if self.ctx.creator_repo().username_exists(&request.username).await? {
            return Err(gram_core::DomainError::UsernameAlreadyExists.into());
        }

        let password_hash = hash_password(&request.password)?;

        let creator_id = self.ctx.generate_id();
        let mut creator = Creator::new(creator_id, request.username);
        creator.name = request.name.unwrap_or_default();
        creator.bio = request.bio.unwrap_or_default();
        creator.website = request.website.unwrap_or_default();
        creator.profile_image = request.profile_image.filter(|p| !p.is_empty());

        // A concurrent registration can still win the race; the repository
        // reports that as UsernameAlreadyExists too.
        self.ctx.creator_repo().create(&creator, &password_hash).await?;

        info!(creator_id = %creator_id, "Creator registered");

        let tokens = self.ctx.jwt_service().generate_token_pair(creator_id)?;
        Ok(auth_response(tokens, &creator))
    }

    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let Some(creator) = self
            .ctx
            .creator_repo()
            .find_by_username(&request.username)
            .await?
        else {
            warn!(username = %request.username, "Login failed: unknown username");
            return Err(AppError::InvalidCredentials.into());
        };

        let Some(password_hash) = self.ctx.creator_repo().get_password_hash(creator.id).await? else {
            warn!(creator_id = %creator.id, "Login failed: no password hash");
            return Err(AppError::InvalidCredentials.into());
        };

        if !verify_password(&request.password, &password_hash)? {
            warn!(creator_id = %creator.id, "Login failed: invalid password");
            return Err(AppError::InvalidCredentials.into());
        }

        info!(creator_id = %creator.id, "Creator logged in");

        let tokens = self.ctx.jwt_service().generate_token_pair(creator.id)?;
        Ok(auth_response(tokens, &creator))
    }

    /// Trade a refresh token for a fresh pair
    #[instrument(skip(self, request))]
    pub async fn refresh_tokens(&self, request: RefreshTokenRequest) -> ServiceResult<AuthResponse> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(&request.refresh_token)?;
        let creator_id: Snowflake = claims.user_id()?;

        // The account may have been deleted since the token was issued
        let Some(creator) = self.ctx.creator_repo().find_by_id(creator_id).await? else {
            warn!(creator_id = %creator_id, "Refresh failed: creator no longer exists");
            return Err(AppError::InvalidToken.into());
        };

        let tokens = self.ctx.jwt_service().generate_token_pair(creator.id)?;

        info!(creator_id = %creator.id, "Tokens refreshed");

        Ok(auth_response(tokens, &creator))
    }
}

fn auth_response(tokens: TokenPair, creator: &Creator) -> AuthResponse {
    AuthResponse::new(
        tokens.access_token,
        tokens.refresh_token,
        tokens.expires_in,
        CreatorResponse::from(creator),
    )
}
