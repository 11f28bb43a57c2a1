//! Studrec Core - Unidirectional state-management core for student records
//!
//! This crate provides the in-memory half of the system:
//! - The `Student` domain model
//! - `AppState` snapshots and the closed `Action` set
//! - A pure reducer mapping (state, action) to the next state
//! - A `Store` with dispatch and synchronous subscriber notification
//! - Caller-side validation rules for user-entered field values
//!
//! Persistence lives in `studrec-store`; composition happens in `studrec-cli`.

pub mod action;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod reducer;
pub mod rules;
pub mod state;
pub mod store;

// Re-export commonly used types
pub use action::Action;
pub use errors::{CoreError, Result};
pub use model::Student;
pub use reducer::reduce;
pub use state::AppState;
pub use store::{ListenerId, Store};
