//! Comment handlers

use axum::{
    extract::{Path, State},
    Json,
};
use gram_service::dto::{CommentResponse, CreateCommentRequest};
use gram_service::CommentService;

use crate::extractors::{AuthUser, CommentIdPath, CommentPath, ImagePath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /images/{image_id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<ImagePath>,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let comments = CommentService::new(state.service_context())
        .list_comments(path.image_id()?)
        .await?;
    Ok(Json(comments))
}

/// POST /images/{image_id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<ImagePath>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let comment = CommentService::new(state.service_context())
        .create_comment(path.image_id()?, auth.creator_id, request)
        .await?;
    Ok(Created(Json(comment)))
}

/// DELETE /images/{image_id}/comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<CommentPath>,
) -> ApiResult<NoContent> {
    CommentService::new(state.service_context())
        .delete_comment(auth.creator_id, path.image_id()?, path.comment_id()?)
        .await?;
    Ok(NoContent)
}

/// DELETE /images/comments/{comment_id}
pub async fn delete_comment_by_id(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<CommentIdPath>,
) -> ApiResult<NoContent> {
    CommentService::new(state.service_context())
        .delete_comment_by_id(auth.creator_id, path.comment_id()?)
        .await?;
    Ok(NoContent)
}
