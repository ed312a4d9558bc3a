//! Appointment record and the draft the form submits.
//!
//! Serde renames keep the persisted JSON layout camelCase (`firstName`,
//! `lastName`, `birthDate`), matching what earlier versions of the app wrote.

use serde::{Deserialize, Serialize};

/// One patient-visit entry. `id` is generated at creation and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub date: String,
    pub time: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub dni: String,
    pub phone: String,
    #[serde(rename = "birthDate")]
    pub birth_date: String,
    pub notes: String,
}

impl Appointment {
    /// The record's submittable fields, for populating the edit form.
    pub fn draft(&self) -> AppointmentDraft {
        AppointmentDraft {
            date: self.date.clone(),
            time: self.time.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            dni: self.dni.clone(),
            phone: self.phone.clone(),
            birth_date: self.birth_date.clone(),
            notes: self.notes.clone(),
        }
    }
}

/// Input for creating or editing an appointment — everything but `id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentDraft {
    pub date: String,
    pub time: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub dni: String,
    pub phone: String,
    #[serde(rename = "birthDate")]
    pub birth_date: String,
    pub notes: String,
}

impl AppointmentDraft {
    /// Same draft with surrounding whitespace stripped from every field.
    pub fn trimmed(self) -> Self {
        Self {
            date: self.date.trim().to_string(),
            time: self.time.trim().to_string(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            dni: self.dni.trim().to_string(),
            phone: self.phone.trim().to_string(),
            birth_date: self.birth_date.trim().to_string(),
            notes: self.notes.trim().to_string(),
        }
    }

    /// Attach an id, producing a full record.
    pub fn into_record(self, id: String) -> Appointment {
        Appointment {
            id,
            date: self.date,
            time: self.time,
            first_name: self.first_name,
            last_name: self.last_name,
            dni: self.dni,
            phone: self.phone,
            birth_date: self.birth_date,
            notes: self.notes,
        }
    }
}
