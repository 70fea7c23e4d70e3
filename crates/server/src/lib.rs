//! Lily's Lawn & Snow Pro's server library.
//!
//! This crate provides the API server functionality as a library,
//! allowing it to be tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod response;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
pub mod validation;

use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tower_sessions::cookie::KeyError;

use state::AppState;

/// Build the full application router: API routes, session layer,
/// request tracing, CORS.
///
/// # Errors
///
/// Returns `KeyError` if the configured session secret cannot derive a
/// cookie signing key.
pub fn app(state: AppState) -> Result<Router, KeyError> {
    let session_layer = middleware::create_session_layer(state.config())?;

    Ok(Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}
