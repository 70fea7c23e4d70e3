//! Request payload schemas and batch validation.
//!
//! Each creatable resource has a payload type here. Deserialization
//! already strips unknown fields and enforces primitive types; the
//! `validated()` methods then check the remaining constraints, collect
//! every violation instead of stopping at the first, and hand back the
//! typed input the store accepts.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use lilys_lawn_core::{AppointmentId, Cents, Email};

use crate::error::ApiError;
use crate::models::{NewAppointment, NewContactMessage};

/// A request payload failed validation. The message aggregates every
/// violated constraint.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct ValidationError(String);

impl ValidationError {
    fn new(message: impl Into<String>) -> Self {
        Self(format!("Validation error: {}", message.into()))
    }
}

/// Collects constraint violations across a whole payload.
#[derive(Debug, Default)]
pub struct Violations {
    items: Vec<String>,
}

impl Violations {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a non-blank string field.
    pub fn require_text(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.items.push(format!("{field} is required"));
        }
    }

    /// Require a non-blank string field of at least `min` characters.
    pub fn require_min_len(&mut self, field: &str, value: &str, min: usize) {
        if value.trim().is_empty() {
            self.items.push(format!("{field} is required"));
        } else if value.trim().len() < min {
            self.items
                .push(format!("{field} must be at least {min} characters"));
        }
    }

    /// Require a structurally valid email address, returning the parsed
    /// value when it is one.
    pub fn require_email(&mut self, field: &str, value: &str) -> Option<Email> {
        match Email::parse(value.trim()) {
            Ok(email) => Some(email),
            Err(_) => {
                self.items
                    .push(format!("{field} must be a valid email address"));
                None
            }
        }
    }

    /// Add a free-form violation.
    pub fn push(&mut self, message: impl Into<String>) {
        self.items.push(message.into());
    }

    /// Succeed if nothing was violated, otherwise produce the
    /// aggregated error.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` listing every collected violation.
    pub fn finish(self) -> Result<(), ValidationError> {
        if self.items.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(self.items.join("; ")))
        }
    }
}

/// JSON body extractor that rejects malformed payloads with a 400
/// envelope instead of axum's default rejection.
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}

// =============================================================================
// Payload Types
// =============================================================================

/// Contact form submission payload.
#[derive(Debug, Deserialize)]
pub struct CreateContact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    #[serde(default)]
    pub address: Option<String>,
    pub message: String,
}

impl CreateContact {
    /// Check every constraint and produce the store input.
    ///
    /// # Errors
    ///
    /// Returns the aggregated violations when any constraint fails.
    pub fn validated(self) -> Result<NewContactMessage, ValidationError> {
        let mut violations = Violations::new();
        violations.require_text("name", &self.name);
        let email = violations.require_email("email", &self.email);
        violations.require_min_len("phone", &self.phone, 10);
        violations.require_text("service", &self.service);
        violations.require_text("message", &self.message);
        violations.finish()?;

        // finish() already rejected an unparseable email
        let email = email.ok_or_else(|| ValidationError::new("email must be a valid email address"))?;

        Ok(NewContactMessage {
            name: self.name,
            email,
            phone: self.phone,
            service: self.service,
            address: self.address,
            message: self.message,
        })
    }
}

/// Appointment booking payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointment {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub service_type: String,
    pub service_address: String,
    pub scheduled_date: String,
    pub scheduled_time: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl CreateAppointment {
    /// Check every constraint and produce the store input.
    ///
    /// # Errors
    ///
    /// Returns the aggregated violations when any constraint fails.
    pub fn validated(self) -> Result<NewAppointment, ValidationError> {
        let mut violations = Violations::new();
        violations.require_text("customerName", &self.customer_name);
        let email = violations.require_email("customerEmail", &self.customer_email);
        violations.require_min_len("customerPhone", &self.customer_phone, 10);
        violations.require_text("serviceType", &self.service_type);
        violations.require_text("serviceAddress", &self.service_address);
        violations.require_text("scheduledDate", &self.scheduled_date);
        violations.require_text("scheduledTime", &self.scheduled_time);
        violations.finish()?;

        let email = email
            .ok_or_else(|| ValidationError::new("customerEmail must be a valid email address"))?;

        Ok(NewAppointment {
            customer_name: self.customer_name,
            customer_email: email,
            customer_phone: self.customer_phone,
            service_type: self.service_type,
            service_address: self.service_address,
            scheduled_date: self.scheduled_date,
            scheduled_time: self.scheduled_time,
            notes: self.notes,
        })
    }
}

/// Registration payload.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

impl RegisterRequest {
    /// Check the username shape; password strength is the auth
    /// service's concern.
    ///
    /// # Errors
    ///
    /// Returns the aggregated violations when any constraint fails.
    pub fn validated(&self) -> Result<(), ValidationError> {
        let mut violations = Violations::new();
        violations.require_min_len("username", &self.username, 3);
        violations.require_text("password", &self.password);
        violations.finish()
    }
}

/// Login payload. No shape constraints; wrong shapes just fail the
/// credential check.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Card-charge request forwarded to the payment gateway.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessPaymentRequest {
    pub source_id: String,
    pub appointment_id: AppointmentId,
    pub amount: Cents,
}

impl ProcessPaymentRequest {
    /// Check every constraint before anything is charged or stored.
    ///
    /// # Errors
    ///
    /// Returns the aggregated violations when any constraint fails.
    pub fn validated(&self) -> Result<(), ValidationError> {
        let mut violations = Violations::new();
        violations.require_text("sourceId", &self.source_id);
        if self.amount.get() < 1 {
            violations.push("amount must be greater than 0");
        }
        violations.finish()
    }
}
