//! Pure state transition function
//!
//! `reduce` is the single point where an [`Action`] becomes a new
//! [`AppState`]. It performs no I/O and never fails; unknown situations do not
//! exist because the action set is closed and matched exhaustively.

use crate::action::Action;
use crate::state::AppState;

/// Compute the next state for the given action
///
/// The previous state is only read; the result is a fresh snapshot.
///
/// Transition table:
/// - `AddStudent(s)` / `UpdateStudent(s)`: cache `s` under its id
///   (last write wins), make it current, clear the error
/// - `DeleteStudent(id)`: drop `id` from the cache, clear current and error
/// - `LoadStudent(s)`: make `s` current, cache untouched, clear the error
/// - `SetError(msg)` / `ClearError`: only the error field changes
///
/// Note the delete asymmetry: `DeleteStudent` for an id absent from the cache
/// is a no-op on `students` but still clears `current_student` and `error`.
pub fn reduce(state: &AppState, action: &Action) -> AppState {
    match action {
        Action::AddStudent(student) | Action::UpdateStudent(student) => {
            let mut students = state.students.clone();
            students.insert(student.id, student.clone());
            AppState {
                current_student: Some(student.clone()),
                students,
                error: None,
            }
        }
        Action::DeleteStudent(id) => {
            let mut students = state.students.clone();
            students.remove(id);
            AppState {
                current_student: None,
                students,
                error: None,
            }
        }
        Action::LoadStudent(student) => AppState {
            current_student: Some(student.clone()),
            students: state.students.clone(),
            error: None,
        },
        Action::SetError(message) => AppState {
            current_student: state.current_student.clone(),
            students: state.students.clone(),
            error: Some(message.clone()),
        },
        Action::ClearError => AppState {
            current_student: state.current_student.clone(),
            students: state.students.clone(),
            error: None,
        },
    }
}
