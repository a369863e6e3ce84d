//! Request method as an ownership-check input

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use gram_core::AccessMethod;

use crate::response::ApiError;

/// The request's HTTP method, as understood by `can_modify`
#[derive(Debug, Clone, Copy)]
pub struct RequestMethod(pub AccessMethod);

#[async_trait]
impl<S> FromRequestParts<S> for RequestMethod
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .method
            .as_str()
            .parse::<AccessMethod>()
            .map(Self)
            .map_err(|e| ApiError::MethodNotAllowed(e.0))
    }
}
