//! Like handlers

use axum::{
    extract::{Path, State},
    Json,
};
use gram_service::dto::LikeResponse;
use gram_service::LikeService;

use crate::extractors::{AuthUser, ImagePath};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /images/{image_id}/likes
pub async fn list_likes(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<ImagePath>,
) -> ApiResult<Json<Vec<LikeResponse>>> {
    let likes = LikeService::new(state.service_context())
        .list_likes(path.image_id()?)
        .await?;
    Ok(Json(likes))
}

/// POST /images/{image_id}/likes
pub async fn like_image(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<ImagePath>,
) -> ApiResult<Created<Json<LikeResponse>>> {
    let like = LikeService::new(state.service_context())
        .like_image(path.image_id()?, auth.creator_id)
        .await?;
    Ok(Created(Json(like)))
}

/// DELETE /images/{image_id}/likes
pub async fn unlike_image(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<ImagePath>,
) -> ApiResult<NoContent> {
    LikeService::new(state.service_context())
        .unlike_image(path.image_id()?, auth.creator_id)
        .await?;
    Ok(NoContent)
}
