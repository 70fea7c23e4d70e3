//! Integration test harness for the API.
//!
//! Builds the full router in-process (session layer included) and
//! drives it with `tower::ServiceExt::oneshot`, so the tests run
//! hermetically without binding a port. Session cookies are threaded
//! through by hand the way a browser would.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use secrecy::SecretString;
use serde_json::Value;
use tower::ServiceExt;

use lilys_lawn_server::config::{Config, DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME};
use lilys_lawn_server::services::auth::seed_admin;
use lilys_lawn_server::services::square::SandboxGateway;
use lilys_lawn_server::state::AppState;
use lilys_lawn_server::store::Store;

/// Configuration for an in-process test server.
#[must_use]
pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".parse().expect("valid host"),
        port: 0,
        base_url: "http://localhost:5000".to_owned(),
        // 64+ chars of key material; never used outside the test process
        session_secret: SecretString::from(
            "mJ4#vQ8!bX2@kD6$wR9%pN3^tZ7&cF1*hL5(yG0)sA8+eU4-iO2_qW6=jK3~nB7x",
        ),
        admin_username: DEFAULT_ADMIN_USERNAME.to_owned(),
        admin_password: SecretString::from(DEFAULT_ADMIN_PASSWORD.to_owned()),
        square_application_id: "sandbox-sq0idb-test".to_owned(),
        square_location_id: "LTEST0".to_owned(),
        sentry_dsn: None,
    }
}

/// Response captured from an in-process request.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    /// Parsed JSON body, or `Null` for empty/non-JSON bodies.
    pub body: Value,
    /// Session cookie set by this response (`name=value`), if any.
    pub cookie: Option<String>,
}

/// An in-process instance of the full application.
pub struct TestApp {
    router: Router,
}

impl TestApp {
    /// Build the application with a fresh store and the seeded admin.
    #[must_use]
    pub fn spawn() -> Self {
        let config = test_config();
        let store = Store::new();
        seed_admin(&store, &config).expect("seed admin");

        let state = AppState::new(config, store, Arc::new(SandboxGateway));
        let router = lilys_lawn_server::app(state).expect("build application");

        Self { router }
    }

    /// Issue one request against the router.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        cookie: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("infallible");

        let status = response.status();
        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(';').next())
            .map(ToOwned::to_owned);

        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse {
            status,
            body,
            cookie,
        }
    }

    pub async fn get(&self, path: &str, cookie: Option<&str>) -> TestResponse {
        self.request(Method::GET, path, None, cookie).await
    }

    pub async fn post(&self, path: &str, body: Value, cookie: Option<&str>) -> TestResponse {
        self.request(Method::POST, path, Some(body), cookie).await
    }

    pub async fn patch(&self, path: &str, body: Value, cookie: Option<&str>) -> TestResponse {
        self.request(Method::PATCH, path, Some(body), cookie).await
    }

    /// Login and return the session cookie.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .post(
                "/api/login",
                serde_json::json!({"username": username, "password": password}),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "login failed: {:?}", response.body);
        response.cookie.expect("login sets a session cookie")
    }

    /// Login as the seeded admin and return the session cookie.
    pub async fn login_admin(&self) -> String {
        self.login(DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD)
            .await
    }

    /// Register a fresh (non-admin) user and return the session cookie.
    pub async fn register(&self, username: &str) -> String {
        let response = self
            .post(
                "/api/register",
                serde_json::json!({"username": username, "password": "correct-horse-battery"}),
                None,
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "registration failed: {:?}",
            response.body
        );
        response.cookie.expect("registration sets a session cookie")
    }

    /// Book an appointment as `cookie` and return its id.
    pub async fn book_appointment(&self, cookie: &str) -> i64 {
        let response = self
            .post(
                "/api/appointments",
                serde_json::json!({
                    "customerName": "Pat Doe",
                    "customerEmail": "pat@example.com",
                    "customerPhone": "5095551234",
                    "serviceType": "Lawn Mowing",
                    "serviceAddress": "123 Maple St, Spokane WA",
                    "scheduledDate": "2026-08-14",
                    "scheduledTime": "09:00"
                }),
                Some(cookie),
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "booking failed: {:?}",
            response.body
        );
        response.body["data"]["id"].as_i64().expect("appointment id")
    }
}
