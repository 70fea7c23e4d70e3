//! Payment store operations, including the settlement cascade.

use chrono::Utc;

use lilys_lawn_core::{AppointmentId, FinancialStatus, PaymentId, PaymentStatus};

use super::{Store, StoreError};
use crate::models::{NewPayment, Payment, PaymentPatch};

impl Store {
    /// Record a payment. Status defaults to `pending` and currency to
    /// USD when absent; no settlement happens here.
    pub fn create_payment(&self, new: NewPayment) -> Payment {
        let created_at = Utc::now();
        self.payments_table().insert_with(|id| Payment {
            id: PaymentId::new(id),
            appointment_id: new.appointment_id,
            square_payment_id: new.square_payment_id.clone(),
            amount: new.amount,
            currency: new.currency.unwrap_or_default(),
            status: new.status.unwrap_or_default(),
            created_at,
        })
    }

    /// Get a payment by id.
    #[must_use]
    pub fn payment(&self, id: PaymentId) -> Option<Payment> {
        self.payments_table().get(id.as_i64())
    }

    /// All payments recorded against one appointment.
    #[must_use]
    pub fn payments_by_appointment(&self, appointment_id: AppointmentId) -> Vec<Payment> {
        self.payments_table()
            .values()
            .filter(|payment| payment.appointment_id == appointment_id)
            .cloned()
            .collect()
    }

    /// Merge a patch into an existing payment. Same shallow-merge
    /// semantics as the appointment patch.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the id is unknown.
    pub fn update_payment(
        &self,
        id: PaymentId,
        patch: PaymentPatch,
    ) -> Result<Payment, StoreError> {
        let mut payments = self.payments_table();
        let Some(payment) = payments.get_mut(id.as_i64()) else {
            return Err(StoreError::NotFound);
        };

        if let Some(square_payment_id) = patch.square_payment_id {
            payment.square_payment_id = Some(square_payment_id);
        }
        if let Some(amount) = patch.amount {
            payment.amount = amount;
        }
        if let Some(currency) = patch.currency {
            payment.currency = currency;
        }
        if let Some(status) = patch.status {
            payment.status = status;
        }

        Ok(payment.clone())
    }

    /// Record a completed payment and settle its appointment in one
    /// step.
    ///
    /// Both writes happen inside a single critical section — the
    /// appointments lock is taken first, then the payments lock — so no
    /// reader can observe a completed payment against a still-pending
    /// appointment. The appointment's `payment_id` is set to the
    /// gateway reference, falling back to the payment's own id when no
    /// reference was issued.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound`, before any mutation, if the
    /// appointment does not exist.
    pub fn record_completed_payment(&self, new: NewPayment) -> Result<Payment, StoreError> {
        let mut appointments = self.appointments_table();
        let Some(appointment) = appointments.get_mut(new.appointment_id.as_i64()) else {
            return Err(StoreError::NotFound);
        };

        let created_at = Utc::now();
        let payment = self.payments_table().insert_with(|id| Payment {
            id: PaymentId::new(id),
            appointment_id: new.appointment_id,
            square_payment_id: new.square_payment_id.clone(),
            amount: new.amount,
            currency: new.currency.unwrap_or_default(),
            status: PaymentStatus::Completed,
            created_at,
        });

        let reference = payment
            .square_payment_id
            .clone()
            .unwrap_or_else(|| payment.id.to_string());
        appointment.payment_status = FinancialStatus::Paid;
        appointment.payment_id = Some(reference);

        Ok(payment)
    }
}
