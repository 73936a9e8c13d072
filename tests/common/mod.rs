//! Shared test infrastructure: temporary SQLite databases with the
//! application schema applied.

use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use tempfile::TempDir;

use chatdata::db::{DbPool, MIGRATIONS};
use chatdata::models::customer_input::{self, CompleteCustomerInput, Language, StoredRecord};

/// Setup a test database with the schema applied.
///
/// Returns a tuple of (TempDir, Connection) where TempDir must be kept
/// alive for the Connection to remain valid.
#[allow(dead_code)]
pub fn setup_test_db() -> (TempDir, Connection) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = dir.path().join("test.db");
    let conn = Connection::open(&db_path).expect("Failed to open test DB");

    conn.execute_batch("PRAGMA foreign_keys=ON; PRAGMA journal_mode=WAL;")
        .expect("Failed to set pragmas");
    conn.execute_batch(MIGRATIONS)
        .expect("Failed to run migrations");

    (dir, conn)
}

/// Pool-backed variant for handler-level tests.
#[allow(dead_code)]
pub fn setup_test_pool() -> (TempDir, DbPool) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = dir.path().join("test.db");
    let manager = SqliteConnectionManager::file(&db_path);
    let pool = r2d2::Pool::builder()
        .max_size(2)
        .build(manager)
        .expect("Failed to create test pool");
    chatdata::db::run_migrations(&pool);
    (dir, pool)
}

/// Insert one staged input directly, returning the stored row.
#[allow(dead_code)]
pub fn stage_input(
    conn: &Connection,
    customer_id: i64,
    dialogue_id: i64,
    language: Language,
    text: &str,
) -> StoredRecord {
    customer_input::insert(
        conn,
        &CompleteCustomerInput {
            customer_id,
            dialogue_id,
            text: text.to_string(),
            language,
        },
    )
    .expect("Failed to insert input")
}
