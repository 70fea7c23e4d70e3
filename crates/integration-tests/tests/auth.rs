//! Integration tests for registration, login, and the session gates.

use axum::http::StatusCode;
use serde_json::json;

use lilys_lawn_integration_tests::TestApp;

#[tokio::test]
async fn test_register_logs_in_and_returns_user() {
    let app = TestApp::spawn();

    let response = app
        .post(
            "/api/register",
            json!({"username": "ella", "password": "correct-horse-battery"}),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["username"], "ella");
    assert_eq!(response.body["data"]["isAdmin"], false);
    // The password hash never reaches the wire
    assert!(response.body["data"].get("password").is_none());
    assert!(response.body["data"].get("passwordHash").is_none());
    assert!(response.cookie.is_some());
}

#[tokio::test]
async fn test_current_user_round_trip() {
    let app = TestApp::spawn();
    let cookie = app.register("ella").await;

    let response = app.get("/api/user", Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["username"], "ella");
}

#[tokio::test]
async fn test_current_user_requires_session() {
    let app = TestApp::spawn();

    let response = app.get("/api/user", None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["success"], false);
}

#[tokio::test]
async fn test_login_with_wrong_password_is_401() {
    let app = TestApp::spawn();
    app.register("ella").await;

    let response = app
        .post(
            "/api/login",
            json!({"username": "ella", "password": "not-the-password"}),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["success"], false);
}

#[tokio::test]
async fn test_unknown_user_login_matches_wrong_password() {
    let app = TestApp::spawn();
    app.register("ella").await;

    let wrong_password = app
        .post(
            "/api/login",
            json!({"username": "ella", "password": "not-the-password"}),
            None,
        )
        .await;
    let unknown_user = app
        .post(
            "/api/login",
            json!({"username": "nobody", "password": "whatever-at-all"}),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, unknown_user.status);
    assert_eq!(wrong_password.body["message"], unknown_user.body["message"]);
}

#[tokio::test]
async fn test_duplicate_username_rejected() {
    let app = TestApp::spawn();
    app.register("ella").await;

    let response = app
        .post(
            "/api/register",
            json!({"username": "ella", "password": "another-password-9"}),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Username is already taken");
}

#[tokio::test]
async fn test_short_password_rejected() {
    let app = TestApp::spawn();

    let response = app
        .post(
            "/api/register",
            json!({"username": "ella", "password": "short"}),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(
        response.body["message"]
            .as_str()
            .expect("message")
            .contains("at least 8 characters")
    );
}

#[tokio::test]
async fn test_logout_invalidates_session() {
    let app = TestApp::spawn();
    let cookie = app.register("ella").await;

    let response = app
        .post("/api/logout", json!({}), Some(&cookie))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let after = app.get("/api/user", Some(&cookie)).await;
    assert_eq!(after.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_seeded_admin_can_login() {
    let app = TestApp::spawn();
    let cookie = app.login_admin().await;

    let response = app.get("/api/user", Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["isAdmin"], true);
}
