//! Appointment store operations.

use chrono::Utc;

use lilys_lawn_core::{AppointmentId, AppointmentStatus, FinancialStatus};

use super::{Store, StoreError};
use crate::models::{Appointment, AppointmentPatch, NewAppointment};

impl Store {
    /// Book an appointment.
    ///
    /// Lifecycle fields always start at their initial values
    /// (`scheduled` / `pending` / no payment); the input type has no way
    /// to supply them.
    pub fn create_appointment(&self, new: NewAppointment) -> Appointment {
        let created_at = Utc::now();
        self.appointments_table().insert_with(|id| Appointment {
            id: AppointmentId::new(id),
            customer_name: new.customer_name.clone(),
            customer_email: new.customer_email.clone(),
            customer_phone: new.customer_phone.clone(),
            service_type: new.service_type.clone(),
            service_address: new.service_address.clone(),
            scheduled_date: new.scheduled_date.clone(),
            scheduled_time: new.scheduled_time.clone(),
            status: AppointmentStatus::Scheduled,
            notes: new.notes.clone(),
            created_at,
            payment_status: FinancialStatus::Pending,
            payment_id: None,
        })
    }

    /// Get an appointment by id.
    #[must_use]
    pub fn appointment(&self, id: AppointmentId) -> Option<Appointment> {
        self.appointments_table().get(id.as_i64())
    }

    /// All appointments, in insertion order.
    #[must_use]
    pub fn appointments(&self) -> Vec<Appointment> {
        self.appointments_table().all()
    }

    /// Merge a patch into an existing appointment. Shallow, field-level
    /// overwrite; absent patch fields leave the record untouched.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the id is unknown.
    pub fn update_appointment(
        &self,
        id: AppointmentId,
        patch: AppointmentPatch,
    ) -> Result<Appointment, StoreError> {
        let mut appointments = self.appointments_table();
        let Some(appointment) = appointments.get_mut(id.as_i64()) else {
            return Err(StoreError::NotFound);
        };

        if let Some(status) = patch.status {
            appointment.status = status;
        }
        if let Some(notes) = patch.notes {
            appointment.notes = Some(notes);
        }
        if let Some(payment_status) = patch.payment_status {
            appointment.payment_status = payment_status;
        }
        if let Some(payment_id) = patch.payment_id {
            appointment.payment_id = Some(payment_id);
        }

        Ok(appointment.clone())
    }
}
