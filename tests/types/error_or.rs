use error_or::{ContractViolation, Error, ErrorList, ErrorOr};

fn two_errors() -> Vec<Error> {
    vec![
        Error::validation("email", "Email is required"),
        Error::validation("password", "Too short"),
    ]
}

#[test]
fn value_state_is_exclusive() {
    let v = ErrorOr::ok(5);
    assert!(v.is_value());
    assert!(!v.is_error());
    assert_eq!(*v.value(), 5);
    assert!(v.errors_or_empty().is_empty());
    assert_eq!(v.as_value(), Some(&5));
    assert!(v.as_errors().is_none());
}

#[test]
fn error_state_is_exclusive() {
    let e = ErrorOr::<i32>::from_errors(two_errors());
    assert!(e.is_error());
    assert!(!e.is_value());
    assert_eq!(e.errors().len(), 2);
    assert_eq!(e.errors_or_empty().len(), 2);
    assert_eq!(e.first_error().code(), "email");
    assert!(e.as_value().is_none());
}

#[test]
fn from_value_matches_ok() {
    assert_eq!(ErrorOr::from_value("x"), ErrorOr::ok("x"));
}

#[test]
fn from_error_and_from_error_list_agree() {
    let err = Error::not_found("User.NotFound", "missing");
    let a = ErrorOr::<()>::from_error(err.clone());
    let b = ErrorOr::<()>::from_error_list(ErrorList::new(err.clone()));
    let c: ErrorOr<()> = err.into();

    assert_eq!(a, b);
    assert_eq!(b, c);
}

#[test]
#[should_panic(expected = "Cannot create an ErrorOr from an empty collection of errors")]
fn from_errors_panics_on_empty() {
    let _ = ErrorOr::<i32>::from_errors(Vec::new());
}

#[test]
fn try_from_errors_reports_empty() {
    assert_eq!(
        ErrorOr::<i32>::try_from_errors(Vec::new()).unwrap_err(),
        ContractViolation::EmptyErrors
    );
    assert!(ErrorOr::<i32>::try_from_errors(two_errors()).unwrap().is_error());
}

#[test]
#[should_panic(expected = "The value cannot be accessed when errors have been recorded")]
fn value_on_errors_panics() {
    let e = ErrorOr::<i32>::from_error(Error::default());
    let _ = e.value();
}

#[test]
#[should_panic(expected = "The value cannot be accessed when errors have been recorded")]
fn into_value_on_errors_panics() {
    let _ = ErrorOr::<i32>::from_error(Error::default()).into_value();
}

#[test]
#[should_panic(expected = "The errors cannot be accessed when no errors have been recorded")]
fn errors_on_value_panics() {
    let _ = ErrorOr::ok(1).errors();
}

#[test]
#[should_panic(expected = "The errors cannot be accessed when no errors have been recorded")]
fn into_errors_on_value_panics() {
    let _ = ErrorOr::ok(1).into_errors();
}

#[test]
#[should_panic(expected = "The first error cannot be accessed when no errors have been recorded")]
fn first_error_on_value_panics() {
    let _ = ErrorOr::ok(1).first_error();
}

#[test]
fn try_accessors_return_violations() {
    let v = ErrorOr::ok(1);
    let e = ErrorOr::<i32>::from_error(Error::default());

    assert_eq!(v.try_value(), Ok(&1));
    assert_eq!(v.try_errors().unwrap_err(), ContractViolation::ErrorsOnValue);
    assert_eq!(v.try_first_error().unwrap_err(), ContractViolation::FirstErrorOnValue);
    assert_eq!(e.try_value().unwrap_err(), ContractViolation::ValueOnErrors);
    assert_eq!(e.try_first_error().unwrap(), &Error::default());
}

#[test]
fn violation_messages_render_through_display() {
    let violation = ContractViolation::EmptyErrors;
    assert_eq!(violation.to_string(), violation.message());
    assert!(ContractViolation::ValueOnErrors.to_string().contains("is_error()"));
}

#[test]
fn result_conversions_round_trip() {
    let ok: ErrorOr<u8> = Ok::<u8, Error>(3).into();
    let err: ErrorOr<u8> = Err::<u8, Error>(Error::gone("a", "b")).into();
    let list_err: ErrorOr<u8> = Err::<u8, ErrorList>(ErrorList::new(Error::gone("a", "b"))).into();

    assert_eq!(ok.clone().into_result(), Ok(3));
    assert_eq!(err, list_err);
    assert_eq!(err.as_result().unwrap_err().len(), 1);

    let back: Result<u8, ErrorList> = ok.into();
    assert_eq!(back, Ok(3));
}

#[test]
fn equality_compares_discriminant_then_payload() {
    let v1 = ErrorOr::<i32>::ok(1);
    let e1 = ErrorOr::<i32>::from_errors(two_errors());
    let mut reversed = two_errors();
    reversed.reverse();
    let e2 = ErrorOr::<i32>::from_errors(reversed);

    assert_eq!(v1, ErrorOr::ok(1));
    assert_ne!(v1, ErrorOr::ok(2));
    assert_ne!(v1, e1);
    assert_eq!(e1, ErrorOr::from_errors(two_errors()));
    assert_ne!(e1, e2);
}

#[test]
fn error_or_is_send_sync_when_value_is() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ErrorOr<String>>();
    assert_send_sync::<ErrorOr<Vec<u8>>>();
}
