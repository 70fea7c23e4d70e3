//! Square payment route handlers.
//!
//! The web client tokenizes the card and posts the source token here;
//! the charge itself goes through the gateway boundary.

use axum::{extract::State, response::IntoResponse};
use serde::Serialize;
use tracing::instrument;

use crate::error::{ApiError, Result};
use crate::middleware::RequireAuth;
use crate::models::NewPayment;
use crate::response::ApiResponse;
use crate::state::AppState;
use crate::validation::{Payload, ProcessPaymentRequest};

/// Credentials the client needs to start the Web Payments SDK.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SquareCredentials {
    pub application_id: String,
    pub location_id: String,
}

/// Hand the client its Web Payments credentials.
///
/// POST /api/square/initialize
pub async fn initialize(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
) -> Result<impl IntoResponse> {
    Ok(ApiResponse::ok(SquareCredentials {
        application_id: state.config().square_application_id.clone(),
        location_id: state.config().square_location_id.clone(),
    }))
}

/// Charge a tokenized card source and settle the appointment.
///
/// POST /api/square/process
#[instrument(skip(state, body), fields(appointment_id = %body.appointment_id))]
pub async fn process(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Payload(body): Payload<ProcessPaymentRequest>,
) -> Result<impl IntoResponse> {
    body.validated()?;

    // Fail before charging when the appointment is unknown
    if state.store().appointment(body.appointment_id).is_none() {
        return Err(ApiError::NotFound("Appointment not found".to_owned()));
    }

    let charge = state
        .gateway()
        .process_payment(&body.source_id, body.amount)
        .await?;

    let payment = state
        .store()
        .record_completed_payment(NewPayment {
            appointment_id: body.appointment_id,
            square_payment_id: Some(charge.reference),
            amount: body.amount,
            currency: None,
            status: Some(charge.status),
        })
        .map_err(|_| ApiError::NotFound("Appointment not found".to_owned()))?;

    tracing::info!(
        payment_id = %payment.id,
        appointment_id = %payment.appointment_id,
        "Payment processed"
    );

    Ok(ApiResponse::with_message(
        payment,
        "Payment processed successfully",
    ))
}
