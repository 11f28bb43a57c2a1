//! Plain-text rendering of state snapshots
//!
//! Stands in for the form's five fields: each dispatched action re-renders
//! the current record from the subscription callback.

use studrec_core::AppState;

/// Print the current record (or its absence) from a state snapshot
pub fn print_state(state: &AppState) {
    match &state.current_student {
        Some(student) => {
            println!("ID:       {}", student.id);
            println!("PIB:      {}", student.pib);
            println!("Address:  {}", student.address);
            println!("Faculty:  {}", student.faculty);
            println!("Email:    {}", student.email);
        }
        None => println!("No current student"),
    }
}
