//! Migration runner
//!
//! Applies migrations with checksums and idempotency. The spec's
//! `init_schema` contract is implemented here once and shared by every
//! caller: N applications produce the same schema and drop no data.

use crate::errors::{from_rusqlite, migration_error, Result};
use crate::migrations::embedded::get_migrations;
use rusqlite::Connection;
use sha2::{Digest, Sha256};

/// Apply all pending migrations to the database
pub fn apply_migrations(conn: &mut Connection) -> Result<()> {
    // Create schema_version table if it doesn't exist
    create_schema_version_table(conn)?;

    // Apply each embedded migration in order
    for migration in get_migrations() {
        apply_migration(conn, migration.id, migration.sql)?;
    }

    Ok(())
}

/// SHA256 digest of a migration's SQL, hex-encoded
///
/// Recorded in the ledger next to the migration id so tampered or drifted
/// bootstrap SQL is detectable after the fact.
fn compute_checksum(sql: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(sql.as_bytes());
    hex::encode(hasher.finalize())
}

/// Create the schema_version table if it doesn't exist
fn create_schema_version_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            id INTEGER PRIMARY KEY,
            migration_id TEXT NOT NULL UNIQUE,
            applied_at INTEGER NOT NULL,
            checksum TEXT
        )",
        [],
    )
    .map_err(from_rusqlite)?;

    Ok(())
}

/// Apply a single migration if not already applied
fn apply_migration(conn: &mut Connection, migration_id: &str, sql: &str) -> Result<()> {
    // Check the ledger. A missing row means "not applied"; anything else
    // wrong with the query is a storage fault and must not trigger a re-run.
    let already_applied = match conn.query_row(
        "SELECT 1 FROM schema_version WHERE migration_id = ?",
        [migration_id],
        |_| Ok(true),
    ) {
        Ok(found) => found,
        Err(rusqlite::Error::QueryReturnedNoRows) => false,
        Err(e) => return Err(from_rusqlite(e)),
    };

    if already_applied {
        // Idempotent: already applied
        return Ok(());
    }

    let checksum = compute_checksum(sql);

    // Migration SQL and its ledger entry commit together
    let tx = conn.transaction().map_err(from_rusqlite)?;

    tx.execute_batch(sql)
        .map_err(|e| migration_error(migration_id, &e.to_string()))?;

    tx.execute(
        "INSERT INTO schema_version (migration_id, applied_at, checksum)
         VALUES (?, strftime('%s','now'), ?)",
        rusqlite::params![migration_id, checksum],
    )
    .map_err(from_rusqlite)?;

    tx.commit().map_err(from_rusqlite)?;

    Ok(())
}
