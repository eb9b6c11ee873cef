use error_or::{ContractViolation, ErrorType};

#[test]
fn builtin_categories_have_stable_integers() {
    let expected = [
        (ErrorType::FAILURE, 0),
        (ErrorType::UNEXPECTED, 1),
        (ErrorType::VALIDATION, 2),
        (ErrorType::CONFLICT, 3),
        (ErrorType::NOT_FOUND, 4),
        (ErrorType::UNAUTHORIZED, 5),
        (ErrorType::FORBIDDEN, 6),
        (ErrorType::GONE, 7),
        (ErrorType::PRECONDITION_FAILED, 8),
        (ErrorType::UNSUPPORTED_MEDIA_TYPE, 9),
        (ErrorType::UNPROCESSABLE_ENTITY, 10),
        (ErrorType::UNAVAILABLE_FOR_LEGAL_REASONS, 11),
        (ErrorType::BAD_GATEWAY, 12),
        (ErrorType::SERVICE_UNAVAILABLE, 13),
        (ErrorType::GATEWAY_TIMEOUT, 14),
    ];

    for (ty, n) in expected {
        assert_eq!(ty.as_i32(), n);
        assert_eq!(i32::from(ty), n);
        assert_eq!(ErrorType::try_from(n), Ok(ty));
        assert!(ty.is_builtin());
    }
    assert_eq!(ErrorType::BUILTIN.len(), 15);
}

#[test]
fn custom_categories_are_not_builtin() {
    let custom = ErrorType::from_i32(15);
    assert!(!custom.is_builtin());
    assert_eq!(custom.name(), None);
    assert_eq!(custom.default_code(), "General.Custom");
    assert_eq!(custom.to_string(), "Custom(15)");
}

#[test]
fn negative_integers_are_not_categories() {
    assert_eq!(ErrorType::try_from_i32(-1), Err(ContractViolation::NegativeErrorType));
    assert_eq!(ErrorType::try_from(i32::MIN), Err(ContractViolation::NegativeErrorType));
    assert_eq!(ErrorType::try_from_i32(0), Ok(ErrorType::FAILURE));
}

#[test]
#[should_panic(expected = "The specified error type is invalid")]
fn from_i32_panics_on_negative() {
    let _ = ErrorType::from_i32(-7);
}

#[test]
fn display_uses_category_name() {
    assert_eq!(ErrorType::NOT_FOUND.to_string(), "NotFound");
    assert_eq!(ErrorType::UNAVAILABLE_FOR_LEGAL_REASONS.to_string(), "UnavailableForLegalReasons");
}

#[test]
fn default_is_failure() {
    assert_eq!(ErrorType::default(), ErrorType::FAILURE);
}
