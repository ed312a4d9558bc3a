//! Form controller: explicit Create/Editing state over the appointment book.
//!
//! The embedding UI reads user input into an [`AppointmentDraft`], calls one
//! of the operations here, and renders whatever comes back — inline errors,
//! an outcome message, the draft to populate the edit form. The controller
//! never touches the rendering surface itself.
//!
//! User-facing strings live here as the outcome message catalogue so the
//! shell shows them verbatim.

use crate::models::{Appointment, AppointmentDraft};
use crate::repository::{AppointmentBook, RepositoryError};
use crate::store::StoreError;
use crate::validation::{self, FieldError};

/// Which submit path the form is on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    /// No edit in progress; submit creates a new record.
    Create,
    /// Submit updates the record with this id.
    Editing(String),
}

/// Result of a form submit.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation failed; repository untouched, mode unchanged.
    Invalid(Vec<FieldError>),
    /// New record created.
    Created(Appointment),
    /// Existing record updated in place.
    Updated { id: String },
    /// The record being edited no longer exists (deleted elsewhere); the
    /// stale edit session has been cleared.
    EditTargetMissing,
    /// The in-memory list changed but could not be written to disk.
    StoreFailed(StoreError),
}

impl SubmitOutcome {
    /// Message for the form's message area.
    pub fn message(&self) -> &'static str {
        match self {
            SubmitOutcome::Invalid(_) => "Revisa los campos marcados en rojo.",
            SubmitOutcome::Created(_) => "Cita guardada correctamente",
            SubmitOutcome::Updated { .. } => "Cita modificada correctamente",
            SubmitOutcome::EditTargetMissing => {
                "No se encontró la cita para modificar (puede haberse eliminado)."
            }
            SubmitOutcome::StoreFailed(_) => {
                "No se pudo guardar la cita en el almacenamiento local."
            }
        }
    }

    /// Whether the message area should style this as an error.
    pub fn is_error(&self) -> bool {
        !matches!(self, SubmitOutcome::Created(_) | SubmitOutcome::Updated { .. })
    }
}

/// Result of a per-row delete action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOutcome {
    /// A record with that id existed and was removed.
    pub removed: bool,
    /// The deleted id was the one being edited; the edit session was
    /// cleared and the UI should reset the form.
    pub edited_record_deleted: bool,
}

/// Message shown when a delete closes the open edit session.
pub const MSG_EDITED_RECORD_DELETED: &str = "La cita que estabas editando fue eliminada.";
/// Message shown when the "Modificar" target cannot be found.
pub const MSG_EDIT_TARGET_NOT_FOUND: &str = "No se encontró la cita para modificar.";
/// Hint shown while an edit session is open.
pub const MSG_EDITING_HINT: &str =
    "Editando cita… modifica los datos y pulsa “Guardar cita”.";

pub struct FormController {
    book: AppointmentBook,
    mode: FormMode,
}

impl FormController {
    pub fn new(book: AppointmentBook) -> Self {
        Self {
            book,
            mode: FormMode::Create,
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    /// The underlying book, for rendering the table.
    pub fn book(&self) -> &AppointmentBook {
        &self.book
    }

    /// Starts editing the record with the given id. Returns its fields for
    /// form population, or `None` (mode unchanged) if the record is gone —
    /// the UI then shows [`MSG_EDIT_TARGET_NOT_FOUND`]. Never mutates the
    /// repository.
    pub fn begin_edit(&mut self, id: &str) -> Option<AppointmentDraft> {
        let draft = self.book.find_by_id(id)?.draft();
        self.mode = FormMode::Editing(id.to_string());
        Some(draft)
    }

    /// Submits the form. Trims, validates, then creates or updates depending
    /// on the current mode. Any non-`Invalid` outcome except `StoreFailed`
    /// means the UI should clear the form; the mode is back at `Create`
    /// whenever the in-memory list changed.
    pub fn submit(&mut self, draft: AppointmentDraft) -> SubmitOutcome {
        let draft = draft.trimmed();

        let errors = validation::validate(&draft);
        if !errors.is_empty() {
            return SubmitOutcome::Invalid(errors);
        }

        match self.mode.clone() {
            FormMode::Create => match self.book.create(draft) {
                Ok(record) => SubmitOutcome::Created(record),
                Err(e) => SubmitOutcome::StoreFailed(e),
            },
            FormMode::Editing(id) => {
                self.mode = FormMode::Create;
                match self.book.update(&id, draft) {
                    Ok(()) => SubmitOutcome::Updated { id },
                    Err(RepositoryError::NotFound { .. }) => SubmitOutcome::EditTargetMissing,
                    Err(RepositoryError::Store(e)) => SubmitOutcome::StoreFailed(e),
                }
            }
        }
    }

    /// Explicit cancel/clear: back to create mode. Clearing the form fields
    /// is the UI's side of the action.
    pub fn cancel(&mut self) {
        self.mode = FormMode::Create;
    }

    /// Deletes by id. If the deleted record was being edited, the edit
    /// session is cleared too and the outcome says so.
    pub fn delete(&mut self, id: &str) -> DeleteOutcome {
        let removed = self.book.delete(id);

        let edited_record_deleted =
            matches!(&self.mode, FormMode::Editing(editing) if editing == id);
        if edited_record_deleted {
            self.mode = FormMode::Create;
        }

        DeleteOutcome {
            removed,
            edited_record_deleted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::AppointmentStore;
    use crate::validation::Field;

    fn draft(first_name: &str, phone: &str) -> AppointmentDraft {
        AppointmentDraft {
            date: "2024-01-10".into(),
            time: "09:00".into(),
            first_name: first_name.into(),
            last_name: "Ruiz".into(),
            dni: "12345678Z".into(),
            phone: phone.into(),
            birth_date: "1990-05-01".into(),
            notes: String::new(),
        }
    }

    fn controller(dir: &tempfile::TempDir) -> FormController {
        let store = AppointmentStore::at_path(dir.path().join("appointments.json"));
        FormController::new(AppointmentBook::open(store))
    }

    #[test]
    fn submit_valid_draft_creates_record() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctl = controller(&dir);

        let outcome = ctl.submit(draft("Ana", "612345678"));
        let SubmitOutcome::Created(record) = outcome else {
            panic!("expected Created, got {outcome:?}");
        };
        assert_eq!(record.first_name, "Ana");
        assert_eq!(ctl.book().len(), 1);
        assert_eq!(ctl.mode(), &FormMode::Create);
    }

    #[test]
    fn submit_invalid_draft_touches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctl = controller(&dir);

        let mut bad = draft("Ana", "612345678");
        bad.phone = "12345".into();
        let outcome = ctl.submit(bad);

        let SubmitOutcome::Invalid(errors) = outcome else {
            panic!("expected Invalid, got {outcome:?}");
        };
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::Phone);
        assert!(ctl.book().is_empty());
    }

    #[test]
    fn invalid_submit_keeps_edit_mode() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctl = controller(&dir);

        let SubmitOutcome::Created(record) = ctl.submit(draft("Ana", "612345678")) else {
            panic!("create failed");
        };
        ctl.begin_edit(&record.id).unwrap();

        let mut bad = draft("Ana", "612345678");
        bad.dni = "bad".into();
        assert!(matches!(ctl.submit(bad), SubmitOutcome::Invalid(_)));
        assert_eq!(ctl.mode(), &FormMode::Editing(record.id));
    }

    #[test]
    fn begin_edit_loads_fields_without_mutating() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctl = controller(&dir);

        let SubmitOutcome::Created(record) = ctl.submit(draft("Ana", "612345678")) else {
            panic!("create failed");
        };

        let loaded = ctl.begin_edit(&record.id).unwrap();
        assert_eq!(loaded.first_name, "Ana");
        assert_eq!(ctl.mode(), &FormMode::Editing(record.id));
        assert_eq!(ctl.book().len(), 1);
    }

    #[test]
    fn begin_edit_unknown_id_stays_in_create_mode() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctl = controller(&dir);

        assert!(ctl.begin_edit("missing").is_none());
        assert_eq!(ctl.mode(), &FormMode::Create);
    }

    #[test]
    fn submit_in_edit_mode_updates_and_resets() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctl = controller(&dir);

        let SubmitOutcome::Created(record) = ctl.submit(draft("Ana", "612345678")) else {
            panic!("create failed");
        };
        ctl.begin_edit(&record.id).unwrap();

        let outcome = ctl.submit(draft("Ana", "600000000"));
        assert!(matches!(outcome, SubmitOutcome::Updated { ref id } if *id == record.id));
        assert_eq!(ctl.mode(), &FormMode::Create);
        assert_eq!(ctl.book().len(), 1);
        assert_eq!(ctl.book().list()[0].phone, "600000000");
        assert_eq!(ctl.book().list()[0].id, record.id);
    }

    #[test]
    fn submit_for_deleted_edit_target_reports_missing_and_resets() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctl = controller(&dir);

        let SubmitOutcome::Created(record) = ctl.submit(draft("Ana", "612345678")) else {
            panic!("create failed");
        };
        ctl.begin_edit(&record.id).unwrap();

        // Simulates the record disappearing under the open edit session.
        ctl.book.delete(&record.id);

        let outcome = ctl.submit(draft("Ana", "600000000"));
        assert!(matches!(outcome, SubmitOutcome::EditTargetMissing));
        assert!(outcome.is_error());
        assert_eq!(ctl.mode(), &FormMode::Create);
        assert!(ctl.book().is_empty());
    }

    #[test]
    fn delete_of_edited_record_clears_edit_session() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctl = controller(&dir);

        let SubmitOutcome::Created(record) = ctl.submit(draft("Ana", "612345678")) else {
            panic!("create failed");
        };
        ctl.begin_edit(&record.id).unwrap();

        let outcome = ctl.delete(&record.id);
        assert!(outcome.removed);
        assert!(outcome.edited_record_deleted);
        assert_eq!(ctl.mode(), &FormMode::Create);
    }

    #[test]
    fn delete_of_other_record_keeps_edit_session() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctl = controller(&dir);

        let SubmitOutcome::Created(a) = ctl.submit(draft("Ana", "612345678")) else {
            panic!("create failed");
        };
        let SubmitOutcome::Created(b) = ctl.submit(draft("Berta", "612345679")) else {
            panic!("create failed");
        };
        ctl.begin_edit(&a.id).unwrap();

        let outcome = ctl.delete(&b.id);
        assert!(outcome.removed);
        assert!(!outcome.edited_record_deleted);
        assert_eq!(ctl.mode(), &FormMode::Editing(a.id));
    }

    #[test]
    fn cancel_resets_to_create_mode() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctl = controller(&dir);

        let SubmitOutcome::Created(record) = ctl.submit(draft("Ana", "612345678")) else {
            panic!("create failed");
        };
        ctl.begin_edit(&record.id).unwrap();
        ctl.cancel();
        assert_eq!(ctl.mode(), &FormMode::Create);
    }

    #[test]
    fn submit_trims_fields_before_validating_and_saving() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctl = controller(&dir);

        let mut padded = draft("Ana", "612345678");
        padded.first_name = "  Ana  ".into();
        padded.phone = " 612345678 ".into();

        let SubmitOutcome::Created(record) = ctl.submit(padded) else {
            panic!("expected trimmed draft to validate");
        };
        assert_eq!(record.first_name, "Ana");
        assert_eq!(record.phone, "612345678");
    }

    #[test]
    fn outcome_messages_match_the_catalogue() {
        assert_eq!(
            SubmitOutcome::Invalid(Vec::new()).message(),
            "Revisa los campos marcados en rojo."
        );
        assert_eq!(
            SubmitOutcome::Updated { id: "x".into() }.message(),
            "Cita modificada correctamente"
        );
        assert!(SubmitOutcome::EditTargetMissing.is_error());
        assert!(!SubmitOutcome::Updated { id: "x".into() }.is_error());
    }

    // End-to-end: create → edit phone → delete, state persisted throughout.
    #[test]
    fn full_lifecycle_against_a_reopened_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("appointments.json");

        let record_id;
        {
            let store = AppointmentStore::at_path(&path);
            let mut ctl = FormController::new(AppointmentBook::open(store));

            let SubmitOutcome::Created(record) = ctl.submit(draft("Ana", "612345678")) else {
                panic!("create failed");
            };
            record_id = record.id;
            assert_eq!(ctl.book().len(), 1);
        }

        {
            // Fresh controller over the same file: the edit flow.
            let store = AppointmentStore::at_path(&path);
            let mut ctl = FormController::new(AppointmentBook::open(store));
            assert_eq!(ctl.book().len(), 1);

            ctl.begin_edit(&record_id).unwrap();
            let outcome = ctl.submit(draft("Ana", "600000000"));
            assert!(matches!(outcome, SubmitOutcome::Updated { .. }));
        }

        {
            let store = AppointmentStore::at_path(&path);
            let mut ctl = FormController::new(AppointmentBook::open(store));
            assert_eq!(ctl.book().list()[0].phone, "600000000");
            assert_eq!(ctl.book().list()[0].id, record_id);

            let outcome = ctl.delete(&record_id);
            assert!(outcome.removed);
            assert!(ctl.book().is_empty());
        }

        let store = AppointmentStore::at_path(&path);
        assert!(store.load().is_empty());
    }
}
