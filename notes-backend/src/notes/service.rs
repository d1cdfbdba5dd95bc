//! NoteService — the CRUD façade over the `notes` table.
//!
//! Every id is checked before storage is touched. Mutations first confirm the
//! row exists so a missing note is reported as `NotFound` rather than a silent
//! no-op.

use notes_types::{Note, NotePayload};
use std::sync::Arc;

use super::error::NoteError;
use crate::db::Database;

#[derive(Clone)]
pub struct NoteService {
    db: Arc<Database>,
}

/// Reject ids that can never name a row
pub fn validate_id(id: i64) -> Result<i64, NoteError> {
    if id > 0 {
        Ok(id)
    } else {
        Err(NoteError::Validation(format!(
            "id must be a positive integer, got {}",
            id
        )))
    }
}

impl NoteService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub fn list_notes(&self) -> Result<Vec<Note>, NoteError> {
        Ok(self.db.list_notes()?)
    }

    pub fn create_note(&self, payload: &NotePayload) -> Result<Note, NoteError> {
        let id = self.db.insert_note(&payload.title, &payload.description)?;
        log::info!("[NOTES] Created note {}", id);
        Ok(Note::from_payload(id, payload))
    }

    pub fn get_note(&self, id: i64) -> Result<Note, NoteError> {
        let id = validate_id(id)?;
        self.db.get_note(id)?.ok_or_else(|| {
            log::debug!("[NOTES] Note {} not found", id);
            NoteError::NotFound
        })
    }

    /// Replace a note's fields.
    ///
    /// The returned note is built from the id the UPDATE reported and the
    /// request payload; storage is not re-read afterwards.
    pub fn update_note(&self, id: i64, payload: &NotePayload) -> Result<Note, NoteError> {
        let id = self.get_note(id)?.id;

        // Row can vanish between the existence check and the write.
        let updated_id = self
            .db
            .update_note(id, &payload.title, &payload.description)?
            .ok_or(NoteError::NotFound)?;

        log::info!("[NOTES] Updated note {}", updated_id);
        Ok(Note::from_payload(updated_id, payload))
    }

    /// Delete a note, returning the snapshot read just before the delete.
    pub fn delete_note(&self, id: i64) -> Result<Note, NoteError> {
        let note = self.get_note(id)?;
        self.db.delete_note(note.id)?;
        log::info!("[NOTES] Deleted note {}", note.id);
        Ok(note)
    }
}
