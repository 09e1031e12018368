#![allow(dead_code)]

use rusqlite::Connection;
use std::sync::Once;

static INIT: Once = Once::new();

pub fn init_test_logging() {
    INIT.call_once(|| {
        tristate::logging::init_test_logging();
    });
}

pub fn test_db() -> Connection {
    init_test_logging();
    let conn = Connection::open_in_memory().expect("Failed to create test database");
    conn.execute_batch(
        "CREATE TABLE profiles (
            id         INTEGER PRIMARY KEY,
            nickname   TEXT,
            age        INTEGER,
            score      REAL,
            avatar     BLOB,
            updated_at TEXT
        )",
    )
    .expect("Failed to apply test schema");
    conn
}
