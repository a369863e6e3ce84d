//! Authentication extractor
//!
//! Resolves the acting creator from `Authorization: Bearer <access token>`.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use gram_core::Snowflake;
use tracing::warn;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated creator
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub creator_id: Snowflake,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);

        // Expired and invalid tokens keep their distinct error codes
        let claims = app_state
            .jwt_service()
            .validate_access_token(bearer.token())
            .map_err(|e| {
                warn!(error = %e, "Rejected access token");
                ApiError::App(e)
            })?;

        let creator_id = claims.user_id()?;

        Ok(Self { creator_id })
    }
}
