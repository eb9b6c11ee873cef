use error_or::problem::{ProblemDetails, ProblemOptions};
use error_or::{Created, Error, ErrorList, ErrorOr, ErrorType, Success};
use serde_json::json;

#[test]
fn error_round_trips_with_metadata() {
    let err = Error::conflict("User.Duplicate", "Email already taken")
        .with_metadata("email", "a@b.c")
        .with_metadata("attempts", 2)
        .with_metadata("locked", true);

    let value = serde_json::to_value(&err).unwrap();
    assert_eq!(
        value,
        json!({
            "code": "User.Duplicate",
            "description": "Email already taken",
            "type": 3,
            "metadata": { "attempts": 2, "email": "a@b.c", "locked": true }
        })
    );

    let back: Error = serde_json::from_value(value).unwrap();
    assert_eq!(back, err);
}

#[test]
fn empty_metadata_is_omitted() {
    let value = serde_json::to_value(Error::not_found("User.NotFound", "missing")).unwrap();
    assert_eq!(value, json!({ "code": "User.NotFound", "description": "missing", "type": 4 }));
}

#[test]
fn missing_or_null_metadata_deserializes_as_none() {
    let a: Error =
        serde_json::from_value(json!({ "code": "c", "description": "d", "type": 0 })).unwrap();
    let b: Error = serde_json::from_value(
        json!({ "code": "c", "description": "d", "type": 0, "metadata": null }),
    )
    .unwrap();

    assert!(a.metadata().is_none());
    assert_eq!(a, b);
}

#[test]
fn custom_numeric_type_is_accepted() {
    let err: Error =
        serde_json::from_value(json!({ "code": "c", "description": "d", "type": 42 })).unwrap();
    assert_eq!(err.error_type(), ErrorType::from_i32(42));
}

#[test]
fn custom_category_round_trips() {
    let err = Error::custom(42, "Payment.Declined", "Card was declined")
        .with_metadata("attempt", 3);

    let text = serde_json::to_string(&err).unwrap();
    let back: Error = serde_json::from_str(&text).unwrap();

    assert_eq!(back, err);
    assert_eq!(back.numeric_type(), 42);
}

#[test]
fn invalid_errors_are_rejected() {
    let invalid = [
        json!({ "description": "d", "type": 0 }),
        json!({ "code": "", "description": "d", "type": 0 }),
        json!({ "code": "   ", "description": "d", "type": 0 }),
        json!({ "code": "c", "type": 0 }),
        json!({ "code": "c", "description": "", "type": 0 }),
        json!({ "code": "c", "description": "d" }),
        json!({ "code": "c", "description": "d", "type": -1 }),
        json!({ "code": "c", "description": "d", "type": 0, "extra": 1 }),
        json!({ "code": "c", "description": "d", "type": 0, "metadata": { "ratio": 1.5 } }),
    ];

    for input in invalid {
        assert!(serde_json::from_value::<Error>(input.clone()).is_err(), "accepted {input}");
    }
}

#[test]
fn rejection_messages_name_the_field() {
    let missing_code =
        serde_json::from_value::<Error>(json!({ "description": "d", "type": 0 })).unwrap_err();
    assert!(missing_code.to_string().contains("Expected value for code"));

    let bad_type = serde_json::from_value::<Error>(
        json!({ "code": "c", "description": "d", "type": -3 }),
    )
    .unwrap_err();
    assert!(bad_type.to_string().contains("The specified error type is invalid"));
}

#[test]
fn error_or_value_round_trips() {
    let ok = ErrorOr::ok(vec![1, 2]);
    let value = serde_json::to_value(&ok).unwrap();
    assert_eq!(value, json!({ "value": [1, 2] }));
    assert_eq!(serde_json::from_value::<ErrorOr<Vec<i32>>>(value).unwrap(), ok);
}

#[test]
fn error_or_errors_round_trip() {
    let failed =
        ErrorOr::<i32>::from_errors(vec![Error::validation("a", "x"), Error::gone("b", "y")]);
    let value = serde_json::to_value(&failed).unwrap();
    assert_eq!(
        value,
        json!({ "errors": [
            { "code": "a", "description": "x", "type": 2 },
            { "code": "b", "description": "y", "type": 7 }
        ] })
    );
    assert_eq!(serde_json::from_value::<ErrorOr<i32>>(value).unwrap(), failed);
}

#[test]
fn empty_error_list_is_rejected() {
    assert!(serde_json::from_value::<ErrorOr<i32>>(json!({ "errors": [] })).is_err());
    assert!(serde_json::from_value::<ErrorList>(json!([])).is_err());
}

#[test]
fn markers_round_trip() {
    let created = ErrorOr::ok(Created);
    let text = serde_json::to_string(&created).unwrap();
    assert_eq!(serde_json::from_str::<ErrorOr<Created>>(&text).unwrap(), created);
    let unit = serde_json::to_string(&Success).unwrap();
    assert_eq!(serde_json::from_str::<Success>(&unit).unwrap(), Success);
}

#[test]
fn validation_problem_shape() {
    let mut errors = ErrorList::new(Error::validation("email", "Email is required"));
    errors.push(Error::validation("password", "Too short"));

    let problem = ProblemDetails::from_errors(&errors, &ProblemOptions::default());
    let value = serde_json::to_value(problem).unwrap();
    assert_eq!(
        value,
        json!({
            "type": "https://tools.ietf.org/html/rfc9110#section-15.5.1",
            "title": "Bad Request",
            "status": 400,
            "errors": {
                "email": ["Email is required"],
                "password": ["Too short"]
            }
        })
    );
}

#[test]
fn detailed_problem_shape_with_extensions() {
    let errors =
        ErrorList::new(Error::not_found("User.NotFound", "No such user").with_metadata("id", 7));
    let options = ProblemOptions::default().include_error_metadata(true);

    let value = serde_json::to_value(ProblemDetails::from_errors(&errors, &options)).unwrap();
    assert_eq!(value["status"], 404);
    assert_eq!(value["detail"], "See the errors property for more information.");
    assert_eq!(value["id"], 7);
    assert_eq!(value["errors"][0]["code"], "User.NotFound");
    assert_eq!(value["errors"][0]["metadata"]["id"], 7);
}
