//! Integration tests for the contact form endpoints.

use axum::http::StatusCode;
use serde_json::json;

use lilys_lawn_integration_tests::TestApp;

fn contact_payload() -> serde_json::Value {
    json!({
        "name": "Pat Doe",
        "email": "pat@example.com",
        "phone": "5095551234",
        "service": "Lawn Mowing",
        "message": "How much for a weekly mow?"
    })
}

#[tokio::test]
async fn test_submission_is_created_and_echoed_back() {
    let app = TestApp::spawn();

    let response = app.post("/api/contact", contact_payload(), None).await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["id"], 1);
    assert_eq!(response.body["data"]["name"], "Pat Doe");
    assert_eq!(response.body["data"]["email"], "pat@example.com");
    // Absent address is normalized to null, not omitted
    assert!(response.body["data"]["address"].is_null());
    assert_eq!(
        response.body["message"],
        "Thank you for your message. We'll get back to you shortly."
    );
}

#[tokio::test]
async fn test_submission_ids_increase() {
    let app = TestApp::spawn();

    let first = app.post("/api/contact", contact_payload(), None).await;
    let second = app.post("/api/contact", contact_payload(), None).await;

    assert_eq!(first.body["data"]["id"], 1);
    assert_eq!(second.body["data"]["id"], 2);
}

#[tokio::test]
async fn test_missing_email_is_400_citing_the_field() {
    let app = TestApp::spawn();
    let mut payload = contact_payload();
    payload.as_object_mut().expect("object").remove("email");

    let response = app.post("/api/contact", payload, None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);
    assert!(
        response.body["message"]
            .as_str()
            .expect("message")
            .contains("email")
    );
}

#[tokio::test]
async fn test_all_violations_are_reported_at_once() {
    let app = TestApp::spawn();
    let mut payload = contact_payload();
    payload["email"] = json!("not-an-email");
    payload["phone"] = json!("123");

    let response = app.post("/api/contact", payload, None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let message = response.body["message"].as_str().expect("message");
    assert!(message.contains("email must be a valid email address"));
    assert!(message.contains("phone must be at least 10 characters"));
}

#[tokio::test]
async fn test_unknown_fields_are_stripped() {
    let app = TestApp::spawn();
    let mut payload = contact_payload();
    payload["isAdmin"] = json!(true);
    payload["id"] = json!(999);

    let response = app.post("/api/contact", payload, None).await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["id"], 1);
}

#[tokio::test]
async fn test_listing_requires_admin() {
    let app = TestApp::spawn();
    app.post("/api/contact", contact_payload(), None).await;

    let anonymous = app.get("/api/contact", None).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);

    let user_cookie = app.register("ella").await;
    let non_admin = app.get("/api/contact", Some(&user_cookie)).await;
    assert_eq!(non_admin.status, StatusCode::FORBIDDEN);

    let admin_cookie = app.login_admin().await;
    let admin = app.get("/api/contact", Some(&admin_cookie)).await;
    assert_eq!(admin.status, StatusCode::OK);
    assert_eq!(admin.body["data"].as_array().expect("list").len(), 1);
}
