//! Integration tests for the payment flow and the settlement cascade.

use axum::http::StatusCode;
use serde_json::json;

use lilys_lawn_integration_tests::TestApp;

#[tokio::test]
async fn test_square_initialize_hands_out_credentials() {
    let app = TestApp::spawn();
    let cookie = app.register("ella").await;

    let response = app
        .post("/api/square/initialize", json!({}), Some(&cookie))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["applicationId"], "sandbox-sq0idb-test");
    assert_eq!(response.body["data"]["locationId"], "LTEST0");
}

#[tokio::test]
async fn test_square_endpoints_require_authentication() {
    let app = TestApp::spawn();

    let initialize = app.post("/api/square/initialize", json!({}), None).await;
    assert_eq!(initialize.status, StatusCode::UNAUTHORIZED);

    let process = app
        .post(
            "/api/square/process",
            json!({"sourceId": "tok_1", "appointmentId": 1, "amount": 5000}),
            None,
        )
        .await;
    assert_eq!(process.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_process_settles_the_appointment() {
    let app = TestApp::spawn();
    let cookie = app.register("ella").await;
    let id = app.book_appointment(&cookie).await;

    let response = app
        .post(
            "/api/square/process",
            json!({"sourceId": "tok_1", "appointmentId": id, "amount": 5000}),
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["amount"], 5000);
    assert_eq!(response.body["data"]["status"], "completed");
    assert_eq!(response.body["data"]["currency"], "USD");
    let reference = response.body["data"]["squarePaymentId"]
        .as_str()
        .expect("gateway reference")
        .to_owned();
    assert!(reference.starts_with("sim_"));

    // The cascade flips the appointment in the same operation
    let appointment = app
        .get(&format!("/api/appointments/{id}"), Some(&cookie))
        .await;
    assert_eq!(appointment.body["data"]["paymentStatus"], "paid");
    assert_eq!(appointment.body["data"]["paymentId"], reference);
}

#[tokio::test]
async fn test_process_with_missing_fields_is_400_before_any_mutation() {
    let app = TestApp::spawn();
    let cookie = app.register("ella").await;
    let id = app.book_appointment(&cookie).await;

    // sourceId absent entirely
    let missing = app
        .post(
            "/api/square/process",
            json!({"appointmentId": id, "amount": 5000}),
            Some(&cookie),
        )
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);

    // sourceId present but blank
    let blank = app
        .post(
            "/api/square/process",
            json!({"sourceId": "  ", "appointmentId": id, "amount": 5000}),
            Some(&cookie),
        )
        .await;
    assert_eq!(blank.status, StatusCode::BAD_REQUEST);

    // zero amount
    let zero = app
        .post(
            "/api/square/process",
            json!({"sourceId": "tok_1", "appointmentId": id, "amount": 0}),
            Some(&cookie),
        )
        .await;
    assert_eq!(zero.status, StatusCode::BAD_REQUEST);

    // negative amounts never deserialize
    let negative = app
        .post(
            "/api/square/process",
            json!({"sourceId": "tok_1", "appointmentId": id, "amount": -5}),
            Some(&cookie),
        )
        .await;
    assert_eq!(negative.status, StatusCode::BAD_REQUEST);

    // nothing was recorded or settled by any of the failures
    let appointment = app
        .get(&format!("/api/appointments/{id}"), Some(&cookie))
        .await;
    assert_eq!(appointment.body["data"]["paymentStatus"], "pending");
    let payments = app
        .get(&format!("/api/appointments/{id}/payments"), Some(&cookie))
        .await;
    assert!(payments.body["data"].as_array().expect("list").is_empty());
}

#[tokio::test]
async fn test_process_against_unknown_appointment_is_404() {
    let app = TestApp::spawn();
    let cookie = app.register("ella").await;

    let response = app
        .post(
            "/api/square/process",
            json!({"sourceId": "tok_1", "appointmentId": 999999, "amount": 5000}),
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_pending_payment_does_not_settle() {
    let app = TestApp::spawn();
    let cookie = app.register("ella").await;
    let id = app.book_appointment(&cookie).await;

    let response = app
        .post(
            "/api/payments",
            json!({"appointmentId": id, "amount": 7500}),
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["status"], "pending");

    let appointment = app
        .get(&format!("/api/appointments/{id}"), Some(&cookie))
        .await;
    assert_eq!(appointment.body["data"]["paymentStatus"], "pending");
}

#[tokio::test]
async fn test_completed_payment_record_settles() {
    let app = TestApp::spawn();
    let cookie = app.register("ella").await;
    let id = app.book_appointment(&cookie).await;

    let response = app
        .post(
            "/api/payments",
            json!({
                "appointmentId": id,
                "amount": 7500,
                "status": "completed",
                "squarePaymentId": "ext_ref_1"
            }),
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["status"], "completed");

    let appointment = app
        .get(&format!("/api/appointments/{id}"), Some(&cookie))
        .await;
    assert_eq!(appointment.body["data"]["paymentStatus"], "paid");
    assert_eq!(appointment.body["data"]["paymentId"], "ext_ref_1");
}

#[tokio::test]
async fn test_payments_listing_is_scoped_to_the_appointment() {
    let app = TestApp::spawn();
    let cookie = app.register("ella").await;
    let first = app.book_appointment(&cookie).await;
    let second = app.book_appointment(&cookie).await;

    app.post(
        "/api/payments",
        json!({"appointmentId": first, "amount": 5000}),
        Some(&cookie),
    )
    .await;
    app.post(
        "/api/payments",
        json!({"appointmentId": second, "amount": 2500}),
        Some(&cookie),
    )
    .await;

    let payments = app
        .get(&format!("/api/appointments/{first}/payments"), Some(&cookie))
        .await;

    assert_eq!(payments.status, StatusCode::OK);
    let list = payments.body["data"].as_array().expect("list");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["appointmentId"], first);
    assert_eq!(list[0]["amount"], 5000);
}
