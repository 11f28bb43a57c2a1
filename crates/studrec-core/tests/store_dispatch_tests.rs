// Integration tests for the Store dispatch/subscribe contract
// Covers the state round-trip and delete-asymmetry properties

use std::cell::RefCell;
use std::rc::Rc;

use studrec_core::{Action, AppState, Store, Student};

#[test]
fn test_add_student_round_trip() {
    let mut store = Store::new();
    let student = Student::with_details(1, "Ivan Petrenko", "Kyiv", "CS", "ip@x.com");

    store.dispatch(Action::AddStudent(student.clone()));

    assert_eq!(store.state().current_student.as_ref(), Some(&student));
    assert_eq!(store.state().student(1), Some(&student));
    assert!(store.state().error.is_none());
}

#[test]
fn test_delete_absent_id_clears_current_student() {
    let mut store = Store::new();
    store.dispatch(Action::AddStudent(Student::new(1, "Ivan Petrenko")));

    // id 42 was never added
    store.dispatch(Action::DeleteStudent(42));

    assert!(store.state().current_student.is_none());
    assert_eq!(store.state().students.len(), 1);
}

#[test]
fn test_add_same_id_twice_keeps_second_payload() {
    let mut store = Store::new();
    store.dispatch(Action::AddStudent(Student::new(2, "First Pib")));

    let second = Student::with_details(2, "Second Pib", "Lviv", "Math", "sp@x.com");
    store.dispatch(Action::AddStudent(second.clone()));

    assert_eq!(store.state().students.len(), 1);
    assert_eq!(store.state().student(2), Some(&second));
    assert_eq!(store.state().current_student, Some(second));
}

#[test]
fn test_subscriber_receives_every_snapshot() {
    let mut store = Store::new();
    let snapshots: Rc<RefCell<Vec<AppState>>> = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&snapshots);
    store.subscribe(move |state: &AppState| sink.borrow_mut().push(state.clone()));

    store.dispatch(Action::AddStudent(Student::new(1, "Ivan Petrenko")));
    store.dispatch(Action::SetError("This id is used".to_string()));
    store.dispatch(Action::ClearError);

    let seen = snapshots.borrow();
    assert_eq!(seen.len(), 3);
    assert!(seen[0].error.is_none());
    assert_eq!(seen[1].error.as_deref(), Some("This id is used"));
    assert!(seen[2].error.is_none());
    // Error transitions never touched the cache or the current record
    assert_eq!(seen[1].students, seen[0].students);
    assert_eq!(seen[1].current_student, seen[0].current_student);
}

#[test]
fn test_unsubscribed_listener_stops_receiving() {
    let mut store = Store::new();
    let count = Rc::new(RefCell::new(0u32));

    let sink = Rc::clone(&count);
    let id = store.subscribe(move |_| *sink.borrow_mut() += 1);

    store.dispatch(Action::ClearError);
    store.unsubscribe(id);
    store.dispatch(Action::ClearError);

    assert_eq!(*count.borrow(), 1);
}
