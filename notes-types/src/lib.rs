//! Shared wire types for the notes service and its HTTP clients.

use serde::{Deserialize, Serialize};

// =====================================================
// Request Types
// =====================================================

/// Body of `POST /notes/` and `PUT /notes/{id}/`.
///
/// Both fields are required. Empty strings are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotePayload {
    pub title: String,
    pub description: String,
}

impl NotePayload {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

// =====================================================
// Response Types
// =====================================================

/// A persisted note. `id` is assigned by storage and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub description: String,
}

impl Note {
    /// Build a note from an id and the payload that was written under it
    pub fn from_payload(id: i64, payload: &NotePayload) -> Self {
        Self {
            id,
            title: payload.title.clone(),
            description: payload.description.clone(),
        }
    }
}

/// Error body returned for every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
