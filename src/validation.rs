//! Field validation for appointment drafts.
//!
//! All applicable errors are collected in one pass — required-field errors in
//! field declaration order, then the phone and DNI format errors. Emptiness
//! and format can both fire for the same field. Pure, no side effects.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::AppointmentDraft;

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{9,15}$").unwrap());
static DNI_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{7,8}[A-Za-z]$").unwrap());

/// Form fields, serialized under the names the UI uses to route inline errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Date,
    Time,
    FirstName,
    LastName,
    Dni,
    Phone,
    BirthDate,
    Notes,
}

/// One inline error, tagged with the field it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    fn new(field: Field, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

/// Validates a draft, returning every violated rule.
///
/// `notes` is unconstrained. Fields are checked against their trimmed value,
/// so a whitespace-only field counts as empty.
pub fn validate(draft: &AppointmentDraft) -> Vec<FieldError> {
    let mut errors = Vec::new();

    let required: [(Field, &str, &str); 7] = [
        (Field::Date, draft.date.trim(), "La fecha es obligatoria."),
        (Field::Time, draft.time.trim(), "La hora es obligatoria."),
        (
            Field::FirstName,
            draft.first_name.trim(),
            "El nombre es obligatorio.",
        ),
        (
            Field::LastName,
            draft.last_name.trim(),
            "Los apellidos son obligatorios.",
        ),
        (Field::Dni, draft.dni.trim(), "El DNI es obligatorio."),
        (Field::Phone, draft.phone.trim(), "El teléfono es obligatorio."),
        (
            Field::BirthDate,
            draft.birth_date.trim(),
            "La fecha de nacimiento es obligatoria.",
        ),
    ];

    for (field, value, message) in required {
        if value.is_empty() {
            errors.push(FieldError::new(field, message));
        }
    }

    let phone = draft.phone.trim();
    if !phone.is_empty() && !PHONE_RE.is_match(phone) {
        errors.push(FieldError::new(
            Field::Phone,
            "El teléfono debe ser numérico (9 a 15 dígitos).",
        ));
    }

    let dni = draft.dni.trim();
    if !dni.is_empty() && !DNI_RE.is_match(dni) {
        errors.push(FieldError::new(
            Field::Dni,
            "Formato DNI inválido. Ej: 12345678Z",
        ));
    }

    errors
}
