use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use notes_types::ErrorDetail;
use thiserror::Error;

use crate::db::DbError;

pub const NOT_FOUND_MESSAGE: &str = "Note not found";

#[derive(Debug, Error)]
pub enum NoteError {
    /// Malformed input: non-positive id, missing field, bad JSON
    #[error("{0}")]
    Validation(String),
    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound,
    #[error("storage error: {0}")]
    Storage(#[from] DbError),
}

impl ResponseError for NoteError {
    fn status_code(&self) -> StatusCode {
        match self {
            NoteError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            NoteError::NotFound => StatusCode::NOT_FOUND,
            NoteError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let detail = match self {
            NoteError::Storage(e) => {
                log::error!("[NOTES] Storage failure: {}", e);
                ErrorDetail::new("Internal server error")
            }
            other => ErrorDetail::new(other.to_string()),
        };
        HttpResponse::build(self.status_code()).json(detail)
    }
}
