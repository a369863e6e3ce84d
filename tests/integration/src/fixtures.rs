//! Request bodies and response shapes used by the API tests

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::helpers::{assert_json, TestServer, API};

static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique across runs against the same database
pub fn unique_suffix() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    format!("{}_{}", nanos % 1_000_000_000_000, COUNTER.fetch_add(1, Ordering::SeqCst))
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub name: Option<String>,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        Self {
            username: format!("creator_{}", unique_suffix()),
            password: "TestPass123".to_string(),
            name: Some("Test Creator".to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            username: reg.username.clone(),
            password: reg.password.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub user: CreatorResponse,
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatorResponse {
    pub id: String,
    pub username: String,
    pub name: String,
    pub post_count: i32,
    pub followers_count: i32,
    pub following_count: i32,
}

#[derive(Debug, Serialize)]
pub struct CreateImageRequest {
    pub file: String,
    pub caption: String,
    pub tags: String,
}

impl CreateImageRequest {
    pub fn captioned(caption: &str) -> Self {
        Self {
            file: format!("uploads/{}.jpg", unique_suffix()),
            caption: caption.to_string(),
            tags: String::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ImageResponse {
    pub id: String,
    pub creator_id: String,
    pub caption: String,
    pub like_count: i32,
    pub comments: Vec<CommentResponse>,
}

#[derive(Debug, Deserialize)]
pub struct CommentResponse {
    pub id: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct FollowResponse {
    pub status: String,
    pub created: bool,
}

#[derive(Debug, Deserialize)]
pub struct UnfollowResponse {
    pub was_following: bool,
}

#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
}

/// Register a fresh creator
pub async fn register(server: &TestServer) -> anyhow::Result<AuthResponse> {
    let response = server
        .post(&format!("{API}/auth/register"), &RegisterRequest::unique())
        .await?;
    assert_json(response, reqwest::StatusCode::CREATED).await
}

/// Fetch a creator's public profile
pub async fn profile(server: &TestServer, token: &str, username: &str) -> anyhow::Result<CreatorResponse> {
    let response = server.get_auth(&format!("{API}/users/{username}"), token).await?;
    assert_json(response, reqwest::StatusCode::OK).await
}
