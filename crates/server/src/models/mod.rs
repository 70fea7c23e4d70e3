//! Domain types for the service.
//!
//! Entity records are owned by the store; inputs (`New*`) carry the
//! fields a caller may supply at creation, and patches carry the fields
//! that remain mutable afterwards. Lifecycle fields (appointment
//! status, payment state) are deliberately absent from the input types,
//! so clients cannot override them.

pub mod session;

pub use session::{CurrentUser, keys as session_keys};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lilys_lawn_core::{
    AppointmentId, AppointmentStatus, Cents, CurrencyCode, Email, FinancialStatus, MessageId,
    PaymentId, PaymentStatus, UserId,
};

/// A site user.
///
/// Not serializable on purpose: the password hash must never reach the
/// wire. Use [`UserView`] for responses.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub password_hash: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a user. The password arrives already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub is_admin: bool,
}

/// Wire representation of a user.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: UserId,
    pub username: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            is_admin: user.is_admin,
            created_at: user.created_at,
        }
    }
}

/// A contact form submission. Immutable after creation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: MessageId,
    pub name: String,
    pub email: Email,
    pub phone: String,
    pub service: String,
    pub address: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Validated input for a contact form submission.
#[derive(Debug, Clone)]
pub struct NewContactMessage {
    pub name: String,
    pub email: Email,
    pub phone: String,
    pub service: String,
    pub address: Option<String>,
    pub message: String,
}

/// A scheduled service appointment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: AppointmentId,
    pub customer_name: String,
    pub customer_email: Email,
    pub customer_phone: String,
    pub service_type: String,
    pub service_address: String,
    /// Requested date, as submitted (e.g. "2026-08-14").
    pub scheduled_date: String,
    /// Requested time slot, as submitted (e.g. "09:00").
    pub scheduled_time: String,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub payment_status: FinancialStatus,
    /// Reference of the payment that settled this appointment.
    pub payment_id: Option<String>,
}

/// Validated input for booking an appointment.
#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub customer_name: String,
    pub customer_email: Email,
    pub customer_phone: String,
    pub service_type: String,
    pub service_address: String,
    pub scheduled_date: String,
    pub scheduled_time: String,
    pub notes: Option<String>,
}

/// The fields of an appointment that stay mutable after creation.
/// Absent fields are left untouched by the merge.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentPatch {
    pub status: Option<AppointmentStatus>,
    pub notes: Option<String>,
    pub payment_status: Option<FinancialStatus>,
    pub payment_id: Option<String>,
}

/// A payment recorded against an appointment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: PaymentId,
    pub appointment_id: AppointmentId,
    /// Gateway reference for the charge, when one was issued.
    pub square_payment_id: Option<String>,
    pub amount: Cents,
    pub currency: CurrencyCode,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

/// Input for recording a payment. Currency and status default to
/// USD/pending when absent.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPayment {
    pub appointment_id: AppointmentId,
    pub square_payment_id: Option<String>,
    pub amount: Cents,
    pub currency: Option<CurrencyCode>,
    pub status: Option<PaymentStatus>,
}

/// The fields of a payment that stay mutable after creation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPatch {
    pub square_payment_id: Option<String>,
    pub amount: Option<Cents>,
    pub currency: Option<CurrencyCode>,
    pub status: Option<PaymentStatus>,
}
