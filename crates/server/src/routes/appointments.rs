//! Appointment route handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use lilys_lawn_core::AppointmentId;

use crate::error::{ApiError, Result};
use crate::middleware::{RequireAdmin, RequireAuth};
use crate::models::AppointmentPatch;
use crate::response::ApiResponse;
use crate::state::AppState;
use crate::validation::{CreateAppointment, Payload};

/// Book an appointment.
///
/// POST /api/appointments
pub async fn create(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Payload(body): Payload<CreateAppointment>,
) -> Result<impl IntoResponse> {
    let new = body.validated()?;

    let record = state.store().create_appointment(new);
    tracing::info!(id = %record.id, service_type = %record.service_type, "Appointment booked");

    Ok((
        StatusCode::CREATED,
        ApiResponse::with_message(record, "Your appointment has been scheduled."),
    ))
}

/// List all appointments.
///
/// GET /api/appointments
pub async fn list(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
) -> Result<impl IntoResponse> {
    Ok(ApiResponse::ok(state.store().appointments()))
}

/// Appointment detail.
///
/// GET /api/appointments/{id}
pub async fn show(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    state
        .store()
        .appointment(AppointmentId::new(id))
        .map(ApiResponse::ok)
        .ok_or_else(|| ApiError::NotFound("Appointment not found".to_owned()))
}

/// Update an appointment's mutable fields.
///
/// PATCH /api/appointments/{id}
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Payload(patch): Payload<AppointmentPatch>,
) -> Result<impl IntoResponse> {
    state
        .store()
        .update_appointment(AppointmentId::new(id), patch)
        .map(ApiResponse::ok)
        .map_err(|_| ApiError::NotFound("Appointment not found".to_owned()))
}
