use error_or::convert::split_errors;
use error_or::prelude::*;

fn parse_age(raw: &str) -> ErrorOr<u8> {
    raw.trim()
        .parse::<u8>()
        .into_error_or_with(|e| Error::validation("Age.Invalid", e.to_string()))
}

fn check_adult(age: u8) -> ErrorOr<u8> {
    ErrorOr::ok(age).fail_if_with(
        |age| *age < 18,
        |age| {
            Error::forbidden("Age.TooYoung", format!("{age} is under 18"))
                .with_metadata("age", *age)
        },
    )
}

fn validate_field(name: &str, value: &str) -> ErrorOr<String> {
    if value.is_empty() {
        ErrorOr::from_error(Error::validation(name.to_string(), format!("{name} is required")))
    } else {
        ErrorOr::ok(value.to_string())
    }
}

fn main() {
    println!("Running Quick Start examples...");

    // 1. Chaining steps
    println!("\n1. Chaining steps:");
    for raw in ["42", "12", "abc"] {
        let outcome = parse_age(raw)
            .then(check_adult)
            .map(|age| format!("welcome, age {age}"))
            .fold(|msg| msg, |errors| format!("rejected: {}", errors.first()));
        println!("{raw:>5} -> {outcome}");
    }

    // 2. Recovering from errors
    println!("\n2. Recovering from errors:");
    let age = parse_age("n/a")
        .else_do(|errors| println!("falling back after {} error(s)", errors.len()))
        .or_value(30);
    println!("age = {}", age.value());

    // 3. Collecting errors
    println!("\n3. Collecting errors:");
    let fields = [("name", "Ada"), ("email", ""), ("city", "")];
    let collected: ErrorOr<Vec<String>> =
        fields.iter().map(|(name, value)| validate_field(name, value)).collect();

    if collected.is_error() {
        println!("Found {} errors:", collected.errors().len());
        for item in split_errors(collected) {
            if let Err(err) = item {
                println!("- [{}] {}", err.error_type(), err);
            }
        }
    }
}
