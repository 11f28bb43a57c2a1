//! Migration framework
//!
//! Provides:
//! - Migration runner with a checksummed ledger
//! - Idempotent application
//! - Embedded SQL migrations

mod embedded;
mod runner;

pub use runner::apply_migrations;
