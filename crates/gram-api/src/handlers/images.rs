//! Image handlers

use axum::{
    extract::{Path, State},
    Json,
};
use gram_service::dto::{CreateImageRequest, ImageResponse, ImageSearchQuery, UpdateImageRequest};
use gram_service::ImageService;

use crate::extractors::{AuthUser, ImagePath, QueryParams, RequestMethod, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Images from everyone the caller follows, newest first
///
/// GET /images
pub async fn feed(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<ImageResponse>>> {
    let images = ImageService::new(state.service_context())
        .feed(auth.creator_id)
        .await?;
    Ok(Json(images))
}

/// POST /images
pub async fn create_image(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateImageRequest>,
) -> ApiResult<Created<Json<ImageResponse>>> {
    let image = ImageService::new(state.service_context())
        .create_image(auth.creator_id, request)
        .await?;
    Ok(Created(Json(image)))
}

/// GET /images/search
pub async fn search_images(
    State(state): State<AppState>,
    _auth: AuthUser,
    QueryParams(query): QueryParams<ImageSearchQuery>,
) -> ApiResult<Json<Vec<ImageResponse>>> {
    let images = ImageService::new(state.service_context()).search(query).await?;
    Ok(Json(images))
}

/// GET /images/{image_id}
pub async fn get_image(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<ImagePath>,
) -> ApiResult<Json<ImageResponse>> {
    let image = ImageService::new(state.service_context())
        .get_image(path.image_id()?)
        .await?;
    Ok(Json(image))
}

/// PUT /images/{image_id}
pub async fn update_image(
    State(state): State<AppState>,
    auth: AuthUser,
    RequestMethod(method): RequestMethod,
    Path(path): Path<ImagePath>,
    ValidatedJson(request): ValidatedJson<UpdateImageRequest>,
) -> ApiResult<Json<ImageResponse>> {
    let image = ImageService::new(state.service_context())
        .update_image(auth.creator_id, path.image_id()?, method, request)
        .await?;
    Ok(Json(image))
}

/// DELETE /images/{image_id}
pub async fn delete_image(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<ImagePath>,
) -> ApiResult<NoContent> {
    ImageService::new(state.service_context())
        .delete_image(auth.creator_id, path.image_id()?)
        .await?;
    Ok(NoContent)
}
