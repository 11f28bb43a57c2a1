use crate::model::Student;

/// Closed set of state transitions
///
/// Every change to [`AppState`](crate::state::AppState) is described by one of
/// these variants and applied by the reducer. The set is closed on purpose:
/// the reducer matches exhaustively, so adding a variant is a compile error
/// until it is handled.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A record was created in the datastore; cache it and make it current
    AddStudent(Student),
    /// A record was overwritten in the datastore; replace the cached copy
    UpdateStudent(Student),
    /// A record was removed from the datastore; drop it from the cache
    DeleteStudent(i64),
    /// A record was fetched; make it current without touching the cache
    LoadStudent(Student),
    /// Record a user-facing error message
    SetError(String),
    /// Clear the error message
    ClearError,
}
