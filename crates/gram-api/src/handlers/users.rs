//! Creator profile handlers

use axum::{
    extract::{Path, State},
    Json,
};
use gram_service::dto::{CreatorResponse, CreatorSearchQuery, UpdateCreatorRequest};
use gram_service::{CreatorService, FollowService};

use crate::extractors::{AuthUser, QueryParams, RequestMethod, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// GET /users/@me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<CreatorResponse>> {
    let response = CreatorService::new(state.service_context())
        .get_current(auth.creator_id)
        .await?;
    Ok(Json(response))
}

/// DELETE /users/@me
pub async fn delete_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<NoContent> {
    CreatorService::new(state.service_context())
        .delete_creator(auth.creator_id)
        .await?;
    Ok(NoContent)
}

/// GET /users/explore
pub async fn explore(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<CreatorResponse>>> {
    let creators = CreatorService::new(state.service_context()).explore().await?;
    Ok(Json(creators))
}

/// GET /users/search
pub async fn search(
    State(state): State<AppState>,
    _auth: AuthUser,
    QueryParams(query): QueryParams<CreatorSearchQuery>,
) -> ApiResult<Json<Vec<CreatorResponse>>> {
    let creators = CreatorService::new(state.service_context()).search(query).await?;
    Ok(Json(creators))
}

/// GET /users/{username}
pub async fn get_creator(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(username): Path<String>,
) -> ApiResult<Json<CreatorResponse>> {
    let response = CreatorService::new(state.service_context())
        .get_creator(&username)
        .await?;
    Ok(Json(response))
}

/// PUT /users/{username}
pub async fn update_creator(
    State(state): State<AppState>,
    auth: AuthUser,
    RequestMethod(method): RequestMethod,
    Path(username): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateCreatorRequest>,
) -> ApiResult<Json<CreatorResponse>> {
    let response = CreatorService::new(state.service_context())
        .update_creator(auth.creator_id, &username, method, request)
        .await?;
    Ok(Json(response))
}

/// GET /users/{username}/followers
pub async fn get_followers(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(username): Path<String>,
) -> ApiResult<Json<Vec<CreatorResponse>>> {
    let followers = FollowService::new(state.service_context())
        .get_followers(&username)
        .await?;
    Ok(Json(followers))
}

/// GET /users/{username}/following
pub async fn get_following(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(username): Path<String>,
) -> ApiResult<Json<Vec<CreatorResponse>>> {
    let following = FollowService::new(state.service_context())
        .get_following(&username)
        .await?;
    Ok(Json(following))
}
