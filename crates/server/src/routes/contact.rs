//! Contact form route handlers.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tracing::instrument;

use crate::error::Result;
use crate::middleware::RequireAdmin;
use crate::response::ApiResponse;
use crate::state::AppState;
use crate::validation::{CreateContact, Payload};

/// Submit the contact form.
///
/// POST /api/contact
///
/// Public: this is the main lead funnel, no account required.
#[instrument(skip(state, body), fields(service = %body.service))]
pub async fn submit(
    State(state): State<AppState>,
    Payload(body): Payload<CreateContact>,
) -> Result<impl IntoResponse> {
    let new = body.validated()?;

    let record = state.store().create_contact_message(new);
    tracing::info!(id = %record.id, "Contact message received");

    Ok((
        StatusCode::CREATED,
        ApiResponse::with_message(
            record,
            "Thank you for your message. We'll get back to you shortly.",
        ),
    ))
}

/// List all contact form submissions.
///
/// GET /api/contact
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<impl IntoResponse> {
    Ok(ApiResponse::ok(state.store().contact_messages()))
}
