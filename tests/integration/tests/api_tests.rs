//! HTTP tests against a live server. They need a PostgreSQL database at
//! `DATABASE_URL` and return early when it is not set.

use integration_tests::*;
use reqwest::StatusCode;
use serde_json::json;

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_endpoints() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/health").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = server.get("/health/ready").await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");
}

// ============================================================================
// Auth
// ============================================================================

#[tokio::test]
async fn test_register_and_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post(&format!("{API}/auth/register"), &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(auth.user.username, request.username);
    assert_eq!(auth.user.post_count, 0);
    assert!(!auth.access_token.is_empty());

    let response = server
        .post(&format!("{API}/auth/login"), &LoginRequest::from_register(&request))
        .await
        .unwrap();
    let login: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(login.user.id, auth.user.id);

    let response = server
        .get_auth(&format!("{API}/users/@me"), &login.access_token)
        .await
        .unwrap();
    let me: CreatorResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.username, request.username);
}

#[tokio::test]
async fn test_register_duplicate_username() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post(&format!("{API}/auth/register"), &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.post(&format!("{API}/auth/register"), &request).await.unwrap();
    let error: ErrorEnvelope = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(error.error.code, "USERNAME_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await.unwrap();

    let wrong_password = LoginRequest {
        username: auth.user.username.clone(),
        password: "WrongPass999".to_string(),
    };
    let response = server.post(&format!("{API}/auth/login"), &wrong_password).await.unwrap();
    let error: ErrorEnvelope = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(error.error.code, "INVALID_CREDENTIALS");

    let unknown_user = LoginRequest {
        username: format!("ghost_{}", unique_suffix()),
        password: "WrongPass999".to_string(),
    };
    let response = server.post(&format!("{API}/auth/login"), &unknown_user).await.unwrap();
    let error: ErrorEnvelope = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(error.error.code, "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_refresh_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await.unwrap();

    let response = server
        .post(
            &format!("{API}/auth/refresh"),
            &json!({ "refresh_token": auth.refresh_token }),
        )
        .await
        .unwrap();
    let refreshed: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(refreshed.user.id, auth.user.id);
}

#[tokio::test]
async fn test_protected_routes_require_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get(&format!("{API}/images")).await.unwrap();
    let error: ErrorEnvelope = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(error.error.code, "MISSING_AUTHORIZATION");
}

// ============================================================================
// Follow graph
// ============================================================================

#[tokio::test]
async fn test_follow_is_idempotent_and_counted() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register(&server).await.unwrap();
    let bob = register(&server).await.unwrap();
    let follow_path = format!("{API}/users/follow/{}", alice.user.id);

    let response = server.post_empty(&follow_path, &bob.access_token).await.unwrap();
    let first: FollowResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(first.status, "ok");
    assert!(first.created);

    let response = server.post_empty(&follow_path, &bob.access_token).await.unwrap();
    let second: FollowResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!second.created);

    let alice_now = profile(&server, &bob.access_token, &alice.user.username).await.unwrap();
    let bob_now = profile(&server, &bob.access_token, &bob.user.username).await.unwrap();
    assert_eq!(alice_now.followers_count, 1);
    assert_eq!(bob_now.following_count, 1);

    let response = server
        .get_auth(
            &format!("{API}/users/{}/followers", alice.user.username),
            &bob.access_token,
        )
        .await
        .unwrap();
    let followers: Vec<CreatorResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(followers.len(), 1);
    assert_eq!(followers[0].id, bob.user.id);

    let response = server
        .post_empty(&format!("{API}/users/unfollow/{}", alice.user.id), &bob.access_token)
        .await
        .unwrap();
    let unfollow: UnfollowResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(unfollow.was_following);

    let alice_now = profile(&server, &bob.access_token, &alice.user.username).await.unwrap();
    assert_eq!(alice_now.followers_count, 0);
}

#[tokio::test]
async fn test_follow_unknown_creator() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let bob = register(&server).await.unwrap();

    let response = server
        .post_empty(&format!("{API}/users/follow/1"), &bob.access_token)
        .await
        .unwrap();
    let error: ErrorEnvelope = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error.code, "UNKNOWN_CREATOR");
}

// ============================================================================
// Images, likes and comments
// ============================================================================

#[tokio::test]
async fn test_image_lifecycle_updates_post_count() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register(&server).await.unwrap();

    let response = server
        .post_auth(
            &format!("{API}/images"),
            &alice.access_token,
            &CreateImageRequest::captioned("sunset"),
        )
        .await
        .unwrap();
    let image: ImageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(image.creator_id, alice.user.id);
    assert_eq!(image.caption, "sunset");

    let me = profile(&server, &alice.access_token, &alice.user.username).await.unwrap();
    assert_eq!(me.post_count, 1);

    let response = server
        .delete_auth(&format!("{API}/images/{}", image.id), &alice.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let me = profile(&server, &alice.access_token, &alice.user.username).await.unwrap();
    assert_eq!(me.post_count, 0);
}

#[tokio::test]
async fn test_only_owner_may_modify_image() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register(&server).await.unwrap();
    let bob = register(&server).await.unwrap();

    let response = server
        .post_auth(
            &format!("{API}/images"),
            &alice.access_token,
            &CreateImageRequest::captioned("mine"),
        )
        .await
        .unwrap();
    let image: ImageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("{API}/images/{}", image.id);

    let response = server
        .put_auth(&path, &bob.access_token, &json!({ "caption": "hijacked" }))
        .await
        .unwrap();
    let error: ErrorEnvelope = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(error.error.code, "NOT_RESOURCE_OWNER");

    let response = server.delete_auth(&path, &bob.access_token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .put_auth(&path, &alice.access_token, &json!({ "caption": "edited" }))
        .await
        .unwrap();
    let updated: ImageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.caption, "edited");
}

#[tokio::test]
async fn test_like_twice_conflicts() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register(&server).await.unwrap();
    let bob = register(&server).await.unwrap();

    let response = server
        .post_auth(
            &format!("{API}/images"),
            &alice.access_token,
            &CreateImageRequest::captioned("likeable"),
        )
        .await
        .unwrap();
    let image: ImageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let likes = format!("{API}/images/{}/likes", image.id);

    let response = server.post_empty(&likes, &bob.access_token).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.post_empty(&likes, &bob.access_token).await.unwrap();
    let error: ErrorEnvelope = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(error.error.code, "LIKE_ALREADY_EXISTS");

    let response = server
        .get_auth(&format!("{API}/images/{}", image.id), &bob.access_token)
        .await
        .unwrap();
    let current: ImageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(current.like_count, 1);

    let response = server.delete_auth(&likes, &bob.access_token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.delete_auth(&likes, &bob.access_token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_comments_on_image() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register(&server).await.unwrap();
    let bob = register(&server).await.unwrap();
    let carol = register(&server).await.unwrap();

    let response = server
        .post_auth(
            &format!("{API}/images"),
            &alice.access_token,
            &CreateImageRequest::captioned("discuss"),
        )
        .await
        .unwrap();
    let image: ImageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let comments = format!("{API}/images/{}/comments", image.id);

    let response = server
        .post_auth(&comments, &bob.access_token, &json!({ "message": "great shot" }))
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(comment.message, "great shot");

    let response = server
        .post_auth(&comments, &bob.access_token, &json!({ "message": "" }))
        .await
        .unwrap();
    let error: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "VALIDATION_ERROR");

    let response = server
        .get_auth(&format!("{API}/images/{}", image.id), &alice.access_token)
        .await
        .unwrap();
    let detail: ImageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.comments.len(), 1);

    let comment_path = format!("{comments}/{}", comment.id);
    let response = server.delete_auth(&comment_path, &carol.access_token).await.unwrap();
    let error: ErrorEnvelope = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(error.error.code, "NOT_COMMENT_MODERATOR");

    // The image owner moderates comments
    let response = server.delete_auth(&comment_path, &alice.access_token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Comments can also be addressed by id alone
    let response = server
        .post_auth(&comments, &bob.access_token, &json!({ "message": "again" }))
        .await
        .unwrap();
    let again: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let flat_path = format!("{API}/images/comments/{}", again.id);

    let response = server.delete_auth(&flat_path, &carol.access_token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.delete_auth(&flat_path, &bob.access_token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.delete_auth(&flat_path, &bob.access_token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Feed
// ============================================================================

#[tokio::test]
async fn test_feed_shows_followed_creators() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register(&server).await.unwrap();
    let bob = register(&server).await.unwrap();

    let response = server.get_auth(&format!("{API}/images"), &bob.access_token).await.unwrap();
    let feed: Vec<ImageResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(feed.is_empty());

    for caption in ["first", "second"] {
        let response = server
            .post_auth(
                &format!("{API}/images"),
                &alice.access_token,
                &CreateImageRequest::captioned(caption),
            )
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server
        .post_empty(&format!("{API}/users/follow/{}", alice.user.id), &bob.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get_auth(&format!("{API}/images"), &bob.access_token).await.unwrap();
    let feed: Vec<ImageResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let captions: Vec<_> = feed.iter().map(|i| i.caption.as_str()).collect();
    assert_eq!(captions, ["second", "first"]);
}

// ============================================================================
// Creator deletion
// ============================================================================

#[tokio::test]
async fn test_deleting_account_releases_counters() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register(&server).await.unwrap();
    let bob = register(&server).await.unwrap();

    let response = server
        .post_auth(
            &format!("{API}/images"),
            &alice.access_token,
            &CreateImageRequest::captioned("popular"),
        )
        .await
        .unwrap();
    let image: ImageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    server
        .post_empty(&format!("{API}/users/follow/{}", alice.user.id), &bob.access_token)
        .await
        .unwrap();
    server
        .post_empty(&format!("{API}/images/{}/likes", image.id), &bob.access_token)
        .await
        .unwrap();

    let response = server
        .delete_auth(&format!("{API}/users/@me"), &bob.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let alice_now = profile(&server, &alice.access_token, &alice.user.username).await.unwrap();
    assert_eq!(alice_now.followers_count, 0);

    let response = server
        .get_auth(&format!("{API}/images/{}", image.id), &alice.access_token)
        .await
        .unwrap();
    let current: ImageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(current.like_count, 0);
}
