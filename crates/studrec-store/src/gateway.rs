//! Persistence gateway
//!
//! `StudentGateway` is the durable-CRUD façade the presentation layer calls.
//! It owns no state beyond the database path: every operation opens its own
//! connection, performs one atomic statement, and releases the handle before
//! returning. The datastore file is the durable source of truth.

use std::path::{Path, PathBuf};

use rusqlite::Connection;
use studrec_core::Student;
use tracing::debug;

use crate::db;
use crate::errors::Result;
use crate::migrations;
use crate::repo::StudentRepo;

/// Default location of the datastore file
pub const DEFAULT_DB_PATH: &str = "students.db";

/// Stateless façade over the students datastore
pub struct StudentGateway {
    db_path: PathBuf,
}

impl StudentGateway {
    /// Create a gateway for the datastore at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: path.into(),
        }
    }

    /// Path of the datastore file
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Open and configure a scoped connection for one call
    fn connect(&self) -> Result<Connection> {
        let conn = db::open(&self.db_path)?;
        db::configure(&conn)?;
        Ok(conn)
    }

    /// Idempotently ensure the students table exists
    ///
    /// Safe to call on every startup; repeated calls change nothing and drop
    /// no data.
    ///
    /// # Errors
    ///
    /// Surfaces a storage fault if the file cannot be opened or the bootstrap
    /// SQL fails.
    pub fn init_schema(&self) -> Result<()> {
        debug!(path = %self.db_path.display(), "ensuring students schema");
        let mut conn = self.connect()?;
        migrations::apply_migrations(&mut conn)
    }

    /// Insert a new record
    ///
    /// Returns `Ok(true)` iff no row with that id pre-existed; `Ok(false)` on
    /// a duplicate id (the stored row is left untouched).
    pub fn create(&self, student: &Student) -> Result<bool> {
        let conn = self.connect()?;
        let inserted = StudentRepo::create(&conn, student)?;
        if inserted {
            debug!(id = student.id, "student created");
        } else {
            debug!(id = student.id, "duplicate id, create rejected");
        }
        Ok(inserted)
    }

    /// Fetch a record by id
    pub fn get(&self, id: i64) -> Result<Option<Student>> {
        let conn = self.connect()?;
        StudentRepo::get(&conn, id)
    }

    /// Overwrite the mutable fields of an existing record
    ///
    /// Returns `Ok(true)` iff a row was matched; the id is never altered.
    pub fn update(&self, student: &Student) -> Result<bool> {
        let conn = self.connect()?;
        let matched = StudentRepo::update(&conn, student)?;
        debug!(id = student.id, matched, "student update");
        Ok(matched)
    }

    /// Remove a record by id
    ///
    /// Returns `Ok(true)` iff a row existed and was removed.
    pub fn delete(&self, id: i64) -> Result<bool> {
        let conn = self.connect()?;
        let removed = StudentRepo::delete(&conn, id)?;
        debug!(id, removed, "student delete");
        Ok(removed)
    }
}
