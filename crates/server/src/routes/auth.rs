//! Authentication route handlers.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tower_sessions::Session;

use crate::error::{ApiError, Result};
use crate::middleware::{RequireAuth, clear_current_user, set_current_user};
use crate::models::{CurrentUser, User, UserView};
use crate::response::ApiResponse;
use crate::services::auth::AuthService;
use crate::state::AppState;
use crate::validation::{LoginRequest, Payload, RegisterRequest};

/// Create an account and log it in.
///
/// POST /api/register
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Payload(body): Payload<RegisterRequest>,
) -> Result<impl IntoResponse> {
    body.validated()?;

    let user = AuthService::new(state.store()).register(&body.username, &body.password)?;

    start_session(&session, &user).await?;
    tracing::info!(username = %user.username, "User registered");

    Ok((StatusCode::CREATED, ApiResponse::ok(UserView::from(user))))
}

/// Login with username and password.
///
/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Payload(body): Payload<LoginRequest>,
) -> Result<impl IntoResponse> {
    let user = AuthService::new(state.store()).login(&body.username, &body.password)?;

    start_session(&session, &user).await?;

    Ok(ApiResponse::ok(UserView::from(user)))
}

/// Logout and destroy the session.
///
/// POST /api/logout
pub async fn logout(session: Session) -> Result<impl IntoResponse> {
    clear_current_user(&session)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    session
        .flush()
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(ApiResponse::message("Logged out"))
}

/// Current authenticated user.
///
/// GET /api/user
pub async fn me(
    RequireAuth(current): RequireAuth,
    State(state): State<AppState>,
) -> Result<impl IntoResponse> {
    // The session can outlive the in-memory user table across restarts
    state
        .store()
        .user(current.id)
        .map(|user| ApiResponse::ok(UserView::from(user)))
        .ok_or(ApiError::Unauthenticated)
}

async fn start_session(session: &Session, user: &User) -> Result<()> {
    // Rotate the session id on privilege change
    session
        .cycle_id()
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    set_current_user(session, &CurrentUser::from(user))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))
}
