use error_or::traits::ErrorOrState;
use error_or::{Error, ErrorOr};

#[test]
fn value_state_reports_no_errors() {
    let value = ErrorOr::ok(1u8);
    let state: &dyn ErrorOrState = &value;

    assert!(!state.is_error());
    assert!(state.errors_opt().is_none());
    assert!(state.first_error_opt().is_none());
}

#[test]
fn error_state_exposes_errors() {
    let failed = ErrorOr::<String>::from_error(Error::gone("Token.Expired", "expired"));
    let state: &dyn ErrorOrState = &failed;

    assert!(state.is_error());
    assert_eq!(state.errors_opt().map(|e| e.len()), Some(1));
    assert_eq!(state.first_error_opt().map(Error::code), Some("Token.Expired"));
}

#[test]
fn heterogeneous_results_can_be_inspected_together() {
    let a = ErrorOr::ok(1u8);
    let b = ErrorOr::<String>::from_error(Error::conflict("A", "x"));
    let c = ErrorOr::<Vec<u8>>::from_error(Error::conflict("B", "y"));
    let states: [&dyn ErrorOrState; 3] = [&a, &b, &c];

    let failed: Vec<&str> =
        states.iter().filter_map(|s| s.first_error_opt()).map(Error::code).collect();
    assert_eq!(failed, vec!["A", "B"]);
}
