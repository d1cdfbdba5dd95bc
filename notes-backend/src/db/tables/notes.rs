//! Notes table database operations

use notes_types::Note;
use rusqlite::{params, OptionalExtension, Row};

use super::super::{Database, DbResult};

fn note_from_row(row: &Row<'_>) -> rusqlite::Result<Note> {
    Ok(Note {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
    })
}

impl Database {
    /// All notes in storage order
    pub fn list_notes(&self) -> DbResult<Vec<Note>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT id, title, description FROM notes")?;
        let notes = stmt
            .query_map([], note_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(notes)
    }

    /// Insert a note and return its generated id
    pub fn insert_note(&self, title: &str, description: &str) -> DbResult<i64> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO notes (title, description) VALUES (?1, ?2)",
            params![title, description],
        )?;
        Ok(conn.last_insert_rowid())
    }

    pub fn get_note(&self, id: i64) -> DbResult<Option<Note>> {
        let conn = self.conn()?;
        let note = conn
            .query_row(
                "SELECT id, title, description FROM notes WHERE id = ?1",
                params![id],
                note_from_row,
            )
            .optional()?;
        Ok(note)
    }

    /// Replace title and description. Returns the id reported by the
    /// UPDATE, or `None` when no row matched.
    pub fn update_note(&self, id: i64, title: &str, description: &str) -> DbResult<Option<i64>> {
        let conn = self.conn()?;
        let updated_id = conn
            .query_row(
                "UPDATE notes SET title = ?1, description = ?2 WHERE id = ?3 RETURNING id",
                params![title, description, id],
                |row| row.get(0),
            )
            .optional()?;
        Ok(updated_id)
    }

    /// Delete a note. Returns the number of rows removed.
    pub fn delete_note(&self, id: i64) -> DbResult<usize> {
        let conn = self.conn()?;
        let deleted = conn.execute("DELETE FROM notes WHERE id = ?1", params![id])?;
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let db = Database::open_in_memory().unwrap();
        let id = db.insert_note("A", "B").unwrap();
        assert_eq!(id, 1);

        let note = db.get_note(id).unwrap().expect("note should exist");
        assert_eq!(note.title, "A");
        assert_eq!(note.description, "B");
    }

    #[test]
    fn test_get_missing_is_none() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.get_note(42).unwrap().is_none());
    }

    #[test]
    fn test_update_returns_id_only_when_matched() {
        let db = Database::open_in_memory().unwrap();
        let id = db.insert_note("A", "B").unwrap();

        assert_eq!(db.update_note(id, "C", "D").unwrap(), Some(id));
        assert_eq!(db.update_note(99, "C", "D").unwrap(), None);

        let note = db.get_note(id).unwrap().unwrap();
        assert_eq!(note.title, "C");
        assert_eq!(note.description, "D");
    }

    #[test]
    fn test_delete_counts_rows() {
        let db = Database::open_in_memory().unwrap();
        let id = db.insert_note("A", "B").unwrap();

        assert_eq!(db.delete_note(id).unwrap(), 1);
        assert_eq!(db.delete_note(id).unwrap(), 0);
        assert!(db.list_notes().unwrap().is_empty());
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let db = Database::open_in_memory().unwrap();
        let first = db.insert_note("A", "B").unwrap();
        db.delete_note(first).unwrap();

        let second = db.insert_note("C", "D").unwrap();
        assert!(second > first);
    }
}
