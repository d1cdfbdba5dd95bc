//! Notes domain — a single `notes` table exposed through `NoteService`.

pub mod error;
pub mod service;

pub use error::NoteError;
pub use service::NoteService;
