//! Error handling for studrec-store
//!
//! Expected outcomes (duplicate key, not found) are values, never errors:
//! `create` returns `Ok(false)` on a primary-key conflict and `get` returns
//! `Ok(None)` on a miss. `StoreError` is reserved for storage faults.

use thiserror::Error;

/// Result type alias using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// Storage fault taxonomy
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying datastore unreachable or corrupt
    #[error("Storage fault in {op}: {message}")]
    Storage { op: String, message: String },

    /// Schema bootstrap failed
    #[error("Migration {migration_id} failed: {reason}")]
    Migration {
        migration_id: String,
        reason: String,
    },
}

/// Create a storage error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> StoreError {
    StoreError::Storage {
        op: "sqlite".to_string(),
        message: err.to_string(),
    }
}

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> StoreError {
    StoreError::Migration {
        migration_id: migration_id.to_string(),
        reason: reason.to_string(),
    }
}
