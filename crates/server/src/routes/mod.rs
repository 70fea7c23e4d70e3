//! HTTP route handlers for the JSON API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                          - Health check
//!
//! # Auth
//! POST /api/register                    - Create an account (logs in)
//! POST /api/login                       - Login
//! POST /api/logout                      - Logout
//! GET  /api/user                        - Current user (requires auth)
//!
//! # Contact
//! POST /api/contact                     - Submit the contact form (public)
//! GET  /api/contact                     - List submissions (admin)
//!
//! # Appointments
//! POST  /api/appointments               - Book an appointment (requires auth)
//! GET   /api/appointments               - List appointments (requires auth)
//! GET   /api/appointments/{id}          - Appointment detail (requires auth)
//! PATCH /api/appointments/{id}          - Update status/notes (admin)
//! GET   /api/appointments/{id}/payments - Payments for an appointment (requires auth)
//!
//! # Payments
//! POST /api/payments                    - Record a payment (requires auth)
//! POST /api/square/initialize           - Web Payments credentials (requires auth)
//! POST /api/square/process              - Charge a card source (requires auth)
//! ```

pub mod appointments;
pub mod auth;
pub mod contact;
pub mod payments;
pub mod square;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create all API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Auth
        .route("/api/register", post(auth::register))
        .route("/api/login", post(auth::login))
        .route("/api/logout", post(auth::logout))
        .route("/api/user", get(auth::me))
        // Contact
        .route("/api/contact", post(contact::submit).get(contact::list))
        // Appointments
        .route(
            "/api/appointments",
            post(appointments::create).get(appointments::list),
        )
        .route(
            "/api/appointments/{id}",
            get(appointments::show).patch(appointments::update),
        )
        .route(
            "/api/appointments/{id}/payments",
            get(payments::list_for_appointment),
        )
        // Payments
        .route("/api/payments", post(payments::create))
        .route("/api/square/initialize", post(square::initialize))
        .route("/api/square/process", post(square::process))
}
