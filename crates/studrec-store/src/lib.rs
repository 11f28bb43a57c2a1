//! Studrec Store - SQLite persistence for student records
//!
//! Provides:
//! - Connection helpers for file-backed and in-memory databases
//! - Idempotent, checksummed schema bootstrap via embedded migrations
//! - Row-level repository for the single `students` table
//! - `StudentGateway`, a stateless façade opening one scoped connection per call

pub mod db;
pub mod errors;
pub mod gateway;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use errors::{Result, StoreError};
pub use gateway::{StudentGateway, DEFAULT_DB_PATH};
