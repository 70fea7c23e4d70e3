//! Payment gateway boundary.
//!
//! The routes only ever talk to [`PaymentGateway`], so swapping the
//! sandbox for a real Square client is a one-type change behind this
//! trait.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use lilys_lawn_core::{Cents, PaymentStatus};

/// Errors that can occur while charging a payment source.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// No payment source token was supplied.
    #[error("payment source is required")]
    MissingSource,

    /// The gateway refused the charge.
    #[error("charge declined: {0}")]
    Declined(String),
}

/// Outcome of a gateway charge.
#[derive(Debug, Clone)]
pub struct GatewayCharge {
    /// Gateway-issued reference for the charge.
    pub reference: String,
    /// Final status of the charge.
    pub status: PaymentStatus,
}

/// A payment provider capable of charging a tokenized source.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Charge `amount` against the tokenized `source_id`.
    async fn process_payment(
        &self,
        source_id: &str,
        amount: Cents,
    ) -> Result<GatewayCharge, GatewayError>;
}

/// Stand-in for the real Square client. Accepts any non-empty source
/// token and reports the charge as completed with a generated
/// reference.
#[derive(Debug, Clone, Copy, Default)]
pub struct SandboxGateway;

#[async_trait]
impl PaymentGateway for SandboxGateway {
    async fn process_payment(
        &self,
        source_id: &str,
        _amount: Cents,
    ) -> Result<GatewayCharge, GatewayError> {
        if source_id.trim().is_empty() {
            return Err(GatewayError::MissingSource);
        }

        Ok(GatewayCharge {
            reference: format!("sim_{}", Uuid::new_v4().simple()),
            status: PaymentStatus::Completed,
        })
    }
}
