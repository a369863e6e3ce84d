//! Follow and unfollow
//!
//! The authenticated creator is always the follower.

use axum::{
    extract::{Path, State},
    Json,
};
use gram_service::dto::{FollowResponse, UnfollowResponse};
use gram_service::FollowService;

use crate::extractors::{AuthUser, UserIdPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// POST /users/follow/{user_id}
pub async fn follow(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Json<FollowResponse>> {
    let response = FollowService::new(state.service_context())
        .follow(path.user_id()?, auth.creator_id)
        .await?;
    Ok(Json(response))
}

/// POST /users/unfollow/{user_id}
pub async fn unfollow(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Json<UnfollowResponse>> {
    let response = FollowService::new(state.service_context())
        .unfollow(path.user_id()?, auth.creator_id)
        .await?;
    Ok(Json(response))
}
