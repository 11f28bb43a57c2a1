//! Logging facility
//!
//! Thin wrapper over tracing-subscriber with named profiles.

pub mod init;

pub use init::{init, Profile};
