use error_or::problem::group_by_code;
use error_or::{Error, ErrorOr, ErrorType};

fn parse(input: &str) -> ErrorOr<i32> {
    match input.parse::<i32>() {
        Ok(n) => ErrorOr::ok(n),
        Err(_) => Error::validation("Input.NotANumber", "Input must be a number").into(),
    }
}

fn double(n: i32) -> ErrorOr<i32> {
    n.checked_mul(2)
        .map(ErrorOr::ok)
        .unwrap_or_else(|| Error::failure("Math.Overflow", "Overflow").into())
}

fn format_value(n: i32) -> String {
    format!("value: {n}")
}

fn run(input: &str) -> String {
    ErrorOr::ok(input)
        .then(parse)
        .then(double)
        .map(format_value)
        .fold(|s| s, |errors| format!("error: {}", errors.first().code()))
}

#[test]
fn happy_path_pipeline() {
    assert_eq!(run("21"), "value: 42");
}

#[test]
fn short_circuited_pipeline_reports_first_failing_step() {
    assert_eq!(run("abc"), "error: Input.NotANumber");
    assert_eq!(run("2000000000"), "error: Math.Overflow");
}

#[test]
fn recovery_mid_pipeline() {
    let out = ErrorOr::ok("abc")
        .then(parse)
        .or_value(0)
        .then(double)
        .map(format_value);
    assert_eq!(out, ErrorOr::ok("value: 0".to_string()));
}

struct Registration {
    email: &'static str,
    password: &'static str,
}

fn validate(registration: &Registration) -> ErrorOr<()> {
    let mut errors = Vec::new();
    if registration.email.is_empty() {
        errors.push(Error::validation("email", "Email is required"));
    }
    if registration.password.len() < 8 {
        errors.push(Error::validation("password", "Too short"));
    }
    match ErrorOr::try_from_errors(errors) {
        Ok(failed) => failed,
        Err(_) => ErrorOr::ok(()),
    }
}

#[test]
fn validation_errors_group_by_field() {
    let result = validate(&Registration { email: "", password: "abc" });

    assert!(result.errors().iter().all(|e| e.is_type(ErrorType::VALIDATION)));

    let grouped = group_by_code(result.errors());
    assert_eq!(grouped.len(), 2);
    assert_eq!(grouped["email"], vec!["Email is required".to_string()]);
    assert_eq!(grouped["password"], vec!["Too short".to_string()]);
}

#[test]
fn valid_registration_passes() {
    let result = validate(&Registration { email: "a@b.c", password: "correct horse" });
    assert_eq!(result, ErrorOr::ok(()));
}
