// Property tests for the reducer
// The reducer must be pure and total; these properties hold for arbitrary
// student payloads and action interleavings.

use proptest::prelude::*;

use studrec_core::{reduce, Action, AppState, Student};

fn arb_student() -> impl Strategy<Value = Student> {
    (
        0i64..1000,
        "[A-Za-z][A-Za-z ]{0,20}",
        ".{0,12}",
        ".{0,8}",
        ".{0,16}",
    )
        .prop_map(|(id, pib, address, faculty, email)| {
            Student::with_details(id, pib, address, faculty, email)
        })
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        arb_student().prop_map(Action::AddStudent),
        arb_student().prop_map(Action::UpdateStudent),
        (0i64..1000).prop_map(Action::DeleteStudent),
        arb_student().prop_map(Action::LoadStudent),
        ".{0,24}".prop_map(Action::SetError),
        Just(Action::ClearError),
    ]
}

proptest! {
    #[test]
    fn add_then_lookup_returns_payload(student in arb_student()) {
        let next = reduce(&AppState::new(), &Action::AddStudent(student.clone()));
        prop_assert_eq!(next.student(student.id), Some(&student));
        prop_assert_eq!(next.current_student, Some(student));
        prop_assert!(next.error.is_none());
    }

    #[test]
    fn reducer_never_mutates_input(state_actions in proptest::collection::vec(arb_action(), 0..8), probe in arb_action()) {
        let mut state = AppState::new();
        for action in &state_actions {
            state = reduce(&state, action);
        }
        let before = state.clone();
        let _ = reduce(&state, &probe);
        prop_assert_eq!(state, before);
    }

    #[test]
    fn delete_always_clears_current_and_error(actions in proptest::collection::vec(arb_action(), 0..8), id in 0i64..1000) {
        let mut state = AppState::new();
        for action in &actions {
            state = reduce(&state, action);
        }
        let next = reduce(&state, &Action::DeleteStudent(id));
        prop_assert!(next.current_student.is_none());
        prop_assert!(next.error.is_none());
        prop_assert!(next.student(id).is_none());
    }

    #[test]
    fn last_write_wins_for_same_id(first in arb_student(), second_pib in "[A-Za-z ]{1,20}") {
        let second = Student::new(first.id, second_pib);
        let state = reduce(&AppState::new(), &Action::AddStudent(first));
        let next = reduce(&state, &Action::AddStudent(second.clone()));
        prop_assert_eq!(next.student(second.id), Some(&second));
    }

    #[test]
    fn error_transitions_touch_only_error(actions in proptest::collection::vec(arb_action(), 0..8), message in ".{0,24}") {
        let mut state = AppState::new();
        for action in &actions {
            state = reduce(&state, action);
        }
        let with_error = reduce(&state, &Action::SetError(message.clone()));
        prop_assert_eq!(&with_error.students, &state.students);
        prop_assert_eq!(&with_error.current_student, &state.current_student);
        prop_assert_eq!(with_error.error.as_deref(), Some(message.as_str()));

        let cleared = reduce(&with_error, &Action::ClearError);
        prop_assert_eq!(&cleared.students, &state.students);
        prop_assert_eq!(&cleared.current_student, &state.current_student);
        prop_assert!(cleared.error.is_none());
    }
}
