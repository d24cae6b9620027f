// Shared fixtures for moviedb-store integration tests.
// The schema is a precondition of the store, so tests provision it here the
// way an external collaborator would before handing the file to a DataSource.

#![allow(dead_code)]

use moviedb_store::DataSource;
use rusqlite::Connection;
use std::path::PathBuf;
use tempfile::TempDir;

const SCHEMA_SQL: &str = include_str!("../fixtures/schema.sql");
const CATALOG_SQL: &str = include_str!("../fixtures/catalog.sql");

/// A file-backed store living in its own temp directory
pub struct TestStore {
    _dir: TempDir,
    pub path: PathBuf,
}

impl TestStore {
    pub fn source(&self) -> DataSource {
        DataSource::new(&self.path)
    }

    /// Open a connection that bypasses the repositories, for direct reads and setup
    pub fn raw(&self) -> Connection {
        Connection::open(&self.path).expect("open raw connection")
    }

    pub fn execute(&self, sql: &str) {
        self.raw().execute_batch(sql).expect("fixture SQL");
    }
}

/// An existing database file with no tables at all
pub fn setup_without_tables() -> TestStore {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("movies.db");

    let conn = Connection::open(&path).expect("create store");
    conn.execute_batch("PRAGMA user_version = 1")
        .expect("write header");

    TestStore { _dir: dir, path }
}

/// Schema only, no rows
pub fn setup_empty_catalog() -> TestStore {
    let store = setup_without_tables();
    store.execute(SCHEMA_SQL);
    store
}

/// Schema plus genres {1 Drama, 2 Comedy} and movies {Drama, Comedy, Comedy}
pub fn setup_catalog() -> TestStore {
    let store = setup_empty_catalog();
    store.execute(CATALOG_SQL);
    store
}

/// A locator pointing at a file that does not exist
pub fn missing_store() -> (TempDir, DataSource) {
    let dir = TempDir::new().expect("temp dir");
    let source = DataSource::new(dir.path().join("nowhere.db"));
    (dir, source)
}
