// Integration tests for the per-call-connection gateway
// Each gateway operation opens its own connection against the same file, so
// these tests exercise durability across calls, not just within one handle.

use studrec_core::Student;
use studrec_store::StudentGateway;

fn setup_gateway(dir: &tempfile::TempDir) -> StudentGateway {
    let gateway = StudentGateway::new(dir.path().join("students.db"));
    gateway.init_schema().unwrap();
    gateway
}

#[test]
fn test_create_then_get_across_connections() {
    let dir = tempfile::tempdir().unwrap();
    let gateway = setup_gateway(&dir);

    let student = Student::with_details(1, "Ivan Petrenko", "Kyiv", "CS", "ip@x.com");
    assert!(gateway.create(&student).unwrap());

    // Fresh connection under the hood
    let stored = gateway.get(1).unwrap().expect("Student should exist");
    assert_eq!(stored, student);
}

#[test]
fn test_full_record_lifecycle() {
    // The spec's concrete scenario: create, get, update, get, delete, get
    let dir = tempfile::tempdir().unwrap();
    let gateway = setup_gateway(&dir);

    let student = Student::with_details(1, "Ivan Petrenko", "Kyiv", "CS", "ip@x.com");
    assert!(gateway.create(&student).unwrap());
    assert_eq!(gateway.get(1).unwrap(), Some(student.clone()));

    let edited = Student::with_details(1, "Ivan P.", "Kyiv", "CS", "ip@x.com");
    assert!(gateway.update(&edited).unwrap());
    assert_eq!(gateway.get(1).unwrap().unwrap().pib, "Ivan P.");

    assert!(gateway.delete(1).unwrap());
    assert_eq!(gateway.get(1).unwrap(), None);
}

#[test]
fn test_duplicate_create_is_a_value_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let gateway = setup_gateway(&dir);

    let first = Student::new(1, "Ivan Petrenko");
    assert!(gateway.create(&first).unwrap());

    let second = Student::new(1, "Somebody Else");
    assert!(!gateway.create(&second).unwrap());

    // First row not overwritten
    assert_eq!(gateway.get(1).unwrap().unwrap().pib, "Ivan Petrenko");
}

#[test]
fn test_absent_ids_report_false_or_none() {
    let dir = tempfile::tempdir().unwrap();
    let gateway = setup_gateway(&dir);

    assert!(gateway.get(404).unwrap().is_none());
    assert!(!gateway.update(&Student::new(404, "Nobody Home")).unwrap());
    assert!(!gateway.delete(404).unwrap());
}

#[test]
fn test_init_schema_repeated_keeps_data() {
    let dir = tempfile::tempdir().unwrap();
    let gateway = setup_gateway(&dir);

    gateway.create(&Student::new(1, "Ivan Petrenko")).unwrap();

    for _ in 0..5 {
        gateway.init_schema().unwrap();
    }

    assert_eq!(gateway.get(1).unwrap().unwrap().pib, "Ivan Petrenko");
}

#[test]
fn test_unopenable_path_surfaces_storage_fault() {
    let dir = tempfile::tempdir().unwrap();
    // A directory component that does not exist and cannot be implicitly created
    let gateway = StudentGateway::new(dir.path().join("missing").join("students.db"));

    assert!(gateway.init_schema().is_err());
}
