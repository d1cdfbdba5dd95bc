//! SQLite connection pool and schema bootstrap.
//!
//! The pool is created once by the composition root and shared behind an
//! `Arc<Database>`. Table operations live in `db::tables`.

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

pub type DbConn = PooledConnection<SqliteConnectionManager>;
pub type DbResult<T> = Result<T, DbError>;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);
const CONNECTION_TIMEOUT: Duration = Duration::from_secs(10);

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS notes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        description TEXT NOT NULL
    );
";

#[derive(Debug, Error)]
pub enum DbError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),
    #[error("failed to create database directory: {0}")]
    Io(#[from] std::io::Error),
}

pub struct Database {
    pool: Pool<SqliteConnectionManager>,
}

impl Database {
    /// Open (or create) the database at `database_url` and ensure the schema exists.
    ///
    /// `:memory:` opens a private in-memory database instead.
    pub fn new(database_url: &str, pool_size: u32) -> DbResult<Self> {
        if database_url == ":memory:" {
            return Self::open_in_memory();
        }

        if let Some(parent) = Path::new(database_url).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let manager = SqliteConnectionManager::file(database_url).with_init(|conn| {
            conn.busy_timeout(BUSY_TIMEOUT)?;
            conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| {
                row.get::<_, String>(0)
            })?;
            Ok(())
        });

        let pool = Pool::builder()
            .max_size(pool_size.max(1))
            .connection_timeout(CONNECTION_TIMEOUT)
            .build(manager)?;

        let db = Self { pool };
        db.init_schema()?;
        Ok(db)
    }

    /// In-memory database behind a single pooled connection, so every
    /// `conn()` call sees the same data.
    pub fn open_in_memory() -> DbResult<Self> {
        let pool = Pool::builder()
            .max_size(1)
            .min_idle(Some(1))
            .idle_timeout(None)
            .max_lifetime(None)
            .connection_timeout(CONNECTION_TIMEOUT)
            .build(SqliteConnectionManager::memory())?;

        let db = Self { pool };
        db.init_schema()?;
        Ok(db)
    }

    /// Upper bound on open connections. Always 1 for in-memory databases.
    pub fn pool_size(&self) -> u32 {
        self.pool.max_size()
    }

    /// Check out a pooled connection. Callers must not hold more than one at a time.
    pub fn conn(&self) -> DbResult<DbConn> {
        Ok(self.pool.get()?)
    }

    fn init_schema(&self) -> DbResult<()> {
        let conn = self.conn()?;
        conn.execute_batch(SCHEMA)?;
        Ok(())
    }
}
