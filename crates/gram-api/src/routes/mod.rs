//! Route definitions, mounted under /api/v1

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{auth, comments, follows, health, images, likes, users};
use crate::state::AppState;

/// Every API route plus the health probes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/api/v1", api_v1_routes())
        .merge(health_routes())
}

/// Probes live outside the versioned API
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(image_routes())
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/explore", get(users::explore))
        .route("/users/search", get(users::search))
        .route(
            "/users/@me",
            get(users::get_current_user).delete(users::delete_current_user),
        )
        .route("/users/follow/:user_id", post(follows::follow))
        .route("/users/unfollow/:user_id", post(follows::unfollow))
        .route(
            "/users/:username",
            get(users::get_creator).put(users::update_creator),
        )
        .route("/users/:username/followers", get(users::get_followers))
        .route("/users/:username/following", get(users::get_following))
}

fn image_routes() -> Router<AppState> {
    Router::new()
        .route("/images", get(images::feed).post(images::create_image))
        .route("/images/search", get(images::search_images))
        .route(
            "/images/comments/:comment_id",
            axum::routing::delete(comments::delete_comment_by_id),
        )
        .route(
            "/images/:image_id",
            get(images::get_image)
                .put(images::update_image)
                .delete(images::delete_image),
        )
        .route(
            "/images/:image_id/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
        .route(
            "/images/:image_id/comments/:comment_id",
            axum::routing::delete(comments::delete_comment),
        )
        .route(
            "/images/:image_id/likes",
            get(likes::list_likes)
                .post(likes::like_image)
                .delete(likes::unlike_image),
        )
}
