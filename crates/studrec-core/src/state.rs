use std::collections::HashMap;

use crate::model::Student;

/// AppState - immutable snapshot of the application state
///
/// A new AppState is produced by the reducer on every dispatched action; the
/// previous snapshot is never mutated in place. The `students` map is a
/// session-local cache of records touched so far, not a full mirror of the
/// datastore - the SQLite file remains the durable source of truth.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    /// The record currently loaded into the form, if any
    pub current_student: Option<Student>,

    /// Records touched this session, keyed by student id
    pub students: HashMap<i64, Student>,

    /// Last user-facing error message, if any
    pub error: Option<String>,
}

impl AppState {
    /// Create the initial state: empty cache, no current student, no error
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a cached student by id
    pub fn student(&self, id: i64) -> Option<&Student> {
        self.students.get(&id)
    }

    /// Check whether any error message is set
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}
