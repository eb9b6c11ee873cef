//! HTTP API Error Responses Pattern
//!
//! Turning handler results into RFC 9457 problem-details responses with the
//! matching status codes.

use error_or::problem::{ProblemDetails, ProblemOptions};
use error_or::prelude::*;
use serde_json::json;

struct User {
    id: u32,
    email: String,
}

struct NewUser<'a> {
    email: &'a str,
    password: &'a str,
}

fn validate(input: &NewUser<'_>) -> ErrorOr<Success> {
    let mut errors = Vec::new();
    if !input.email.contains('@') {
        errors.push(Error::validation("email", "Email is malformed"));
    }
    if input.password.len() < 8 {
        errors.push(Error::validation("password", "Password is too short"));
    }
    if !input.password.chars().any(|c| c.is_ascii_digit()) {
        errors.push(Error::validation("password", "Password needs a digit"));
    }
    error_or::convert::collect_errors(errors)
}

fn create_user(input: &NewUser<'_>) -> ErrorOr<Created> {
    validate(input)
        .fail_if_with(
            |_| input.email == "taken@example.com",
            |_| Error::conflict("User.Duplicate", "Email already registered")
                .with_metadata("email", input.email),
        )
        .map(|_| Created)
}

fn get_user(id: u32) -> ErrorOr<User> {
    match id {
        0 => ErrorOr::from_error(Error::custom(29, "Rate.Limited", "Too many requests, retry later")),
        1 => ErrorOr::ok(User { id, email: "ada@example.com".to_string() }),
        _ => ErrorOr::from_error(
            Error::not_found("User.NotFound", format!("User {id} does not exist"))
                .with_metadata("user_id", id),
        ),
    }
}

fn options() -> ProblemOptions {
    ProblemOptions::default()
        .include_error_metadata(true)
        .map_status(|e| (e.code() == "Rate.Limited").then_some(429))
        .map_title(|e| (e.code() == "Rate.Limited").then(|| "Too Many Requests".to_string()))
}

// Convert to HTTP response
fn respond<T, F>(result: ErrorOr<T>, ok_status: u16, body: F) -> (u16, String)
where
    F: FnOnce(T) -> serde_json::Value,
{
    let problem = ProblemDetails::from_state(&result, &options());
    match problem {
        Some(problem) => {
            let rendered = serde_json::to_string_pretty(&problem)
                .unwrap_or_else(|e| format!("{{\"title\":\"{e}\"}}"));
            (problem.status, rendered)
        },
        None => (ok_status, body(result.into_value()).to_string()),
    }
}

fn main() {
    for id in [1, 7, 0] {
        let (status, body) =
            respond(get_user(id), 200, |user| json!({ "id": user.id, "email": user.email }));
        println!("GET /users/{id}\nStatus: {status}\n{body}\n");
    }

    let requests = [
        NewUser { email: "grace@example.com", password: "hunter22" },
        NewUser { email: "taken@example.com", password: "correct9horse" },
        NewUser { email: "nobody", password: "short" },
    ];
    for input in &requests {
        let (status, body) = respond(create_user(input), 201, |_| json!({ "created": true }));
        println!("POST /users ({})\nStatus: {status}\n{body}\n", input.email);
    }
}
