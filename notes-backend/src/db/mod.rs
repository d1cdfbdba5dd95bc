pub mod sqlite;
mod tables;

pub use sqlite::{Database, DbError, DbResult};
