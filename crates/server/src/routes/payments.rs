//! Payment route handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use lilys_lawn_core::{AppointmentId, PaymentStatus};

use crate::error::{ApiError, Result};
use crate::middleware::RequireAuth;
use crate::models::NewPayment;
use crate::response::ApiResponse;
use crate::state::AppState;
use crate::validation::Payload;

/// Record a payment.
///
/// POST /api/payments
///
/// A payment submitted as already completed settles its appointment in
/// the same store operation.
pub async fn create(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Payload(new): Payload<NewPayment>,
) -> Result<impl IntoResponse> {
    let record = if new.status == Some(PaymentStatus::Completed) {
        state
            .store()
            .record_completed_payment(new)
            .map_err(|_| ApiError::NotFound("Appointment not found".to_owned()))?
    } else {
        state.store().create_payment(new)
    };

    Ok((StatusCode::CREATED, ApiResponse::ok(record)))
}

/// List the payments recorded against one appointment.
///
/// GET /api/appointments/{id}/payments
pub async fn list_for_appointment(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    Ok(ApiResponse::ok(
        state.store().payments_by_appointment(AppointmentId::new(id)),
    ))
}
