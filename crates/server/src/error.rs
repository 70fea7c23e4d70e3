//! Unified error handling for the API.
//!
//! Provides a unified `ApiError` type that maps every failure class to
//! a status code and the shared JSON envelope, capturing server errors
//! to Sentry before responding. All route handlers should return
//! `Result<T, ApiError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::response::ApiResponse;
use crate::services::auth::AuthError;
use crate::services::square::GatewayError;
use crate::store::StoreError;
use crate::validation::ValidationError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request payload violated its schema.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Request was malformed before it reached validation.
    #[error("{0}")]
    BadRequest(String),

    /// Resource not found.
    #[error("{0}")]
    NotFound(String),

    /// No authenticated principal on the session.
    #[error("You must be logged in to access this resource")]
    Unauthenticated,

    /// Authenticated principal lacks the admin flag.
    #[error("Administrator access is required")]
    Forbidden,

    /// Authentication operation failed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Payment gateway operation failed.
    #[error("Payment gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                AuthError::UsernameTaken | AuthError::WeakPassword(_) => StatusCode::BAD_REQUEST,
                AuthError::HashFailure(_) | AuthError::Store(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::Store(err) => match err {
                StoreError::NotFound => StatusCode::NOT_FOUND,
                StoreError::Conflict(_) => StatusCode::BAD_REQUEST,
            },
            Self::Gateway(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Internal details stay in the logs.
    fn client_message(&self) -> String {
        match self {
            Self::Auth(AuthError::HashFailure(_) | AuthError::Store(_))
            | Self::Internal(_)
            | Self::Gateway(_) => "An unexpected error occurred".to_owned(),
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Capture server errors to Sentry
        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        (status, Json(ApiResponse::error(self.client_message()))).into_response()
    }
}

/// Result type alias for `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;
