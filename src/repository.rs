//! The appointment book: authoritative in-memory list + persistence mirror.
//!
//! List order is insertion order; edits replace fields in place and never
//! reorder. Every mutation persists the whole list through the store.
//! Callers validate drafts before handing them in — the book itself never
//! re-checks field rules.

use thiserror::Error;
use uuid::Uuid;

use crate::models::{Appointment, AppointmentDraft};
use crate::store::{AppointmentStore, StoreError};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Appointment not found: {id}")]
    NotFound { id: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct AppointmentBook {
    appointments: Vec<Appointment>,
    store: AppointmentStore,
}

impl AppointmentBook {
    /// Opens the book, loading whatever the store holds (empty on a fresh or
    /// unreadable store).
    pub fn open(store: AppointmentStore) -> Self {
        let appointments = store.load();
        tracing::debug!(count = appointments.len(), "Appointment book opened");
        Self {
            appointments,
            store,
        }
    }

    /// Creates a record from an already-validated draft: fresh UUIDv4 id,
    /// appended at the end, list persisted. Only the persist can fail.
    pub fn create(&mut self, draft: AppointmentDraft) -> Result<Appointment, StoreError> {
        let record = draft.into_record(Uuid::new_v4().to_string());
        self.appointments.push(record.clone());
        self.store.save(&self.appointments)?;
        tracing::info!(id = %record.id, "Appointment created");
        Ok(record)
    }

    /// Replaces all fields but `id` of the record with the given id, at its
    /// existing list position. `NotFound` leaves state untouched.
    pub fn update(&mut self, id: &str, draft: AppointmentDraft) -> Result<(), RepositoryError> {
        let Some(pos) = self.appointments.iter().position(|a| a.id == id) else {
            return Err(RepositoryError::NotFound { id: id.to_string() });
        };
        self.appointments[pos] = draft.into_record(id.to_string());
        self.store.save(&self.appointments)?;
        tracing::info!(id, "Appointment updated");
        Ok(())
    }

    /// Removes the record with the given id if present; persists either way.
    /// Returns whether a record was removed. A save failure here is logged
    /// and swallowed — the in-memory list stays authoritative and the next
    /// successful save catches the file up.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.appointments.len();
        self.appointments.retain(|a| a.id != id);
        let removed = self.appointments.len() != before;

        if let Err(e) = self.store.save(&self.appointments) {
            tracing::warn!(error = %e, id, "Failed to persist after delete");
        }
        if removed {
            tracing::info!(id, "Appointment deleted");
        }
        removed
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    /// All records, insertion order.
    pub fn list(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }
}
