use core::fmt;

/// Misuse of the [`ErrorOr`](crate::ErrorOr) API.
///
/// These are programmer errors, not domain errors. The panicking accessors
/// (`value`, `errors`, `first_error`, `from_errors`) and constructors
/// (`ErrorType::from_i32`, `Error::custom`) panic with this message; their
/// `try_*` twins return it instead.
///
/// # Examples
///
/// ```
/// use error_or::{ContractViolation, ErrorOr};
///
/// let ok = ErrorOr::ok(5);
/// assert_eq!(ok.try_errors().unwrap_err(), ContractViolation::ErrorsOnValue);
///
/// let empty = ErrorOr::<i32>::try_from_errors(Vec::new());
/// assert_eq!(empty.unwrap_err(), ContractViolation::EmptyErrors);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractViolation {
    /// An error state was requested from an empty error collection.
    EmptyErrors,
    /// The value was accessed while errors are recorded.
    ValueOnErrors,
    /// The error list was accessed on a value.
    ErrorsOnValue,
    /// The first error was accessed on a value.
    FirstErrorOnValue,
    /// A negative integer was used as an error category.
    NegativeErrorType,
}

impl ContractViolation {
    pub const fn message(self) -> &'static str {
        match self {
            Self::EmptyErrors => {
                "Cannot create an ErrorOr from an empty collection of errors. Provide at least one error."
            },
            Self::ValueOnErrors => {
                "The value cannot be accessed when errors have been recorded. Check is_error() before accessing the value."
            },
            Self::ErrorsOnValue => {
                "The errors cannot be accessed when no errors have been recorded. Check is_error() before accessing the errors."
            },
            Self::FirstErrorOnValue => {
                "The first error cannot be accessed when no errors have been recorded. Check is_error() before accessing the first error."
            },
            Self::NegativeErrorType => {
                "The specified error type is invalid. Custom error types must be zero or greater."
            },
        }
    }

    #[cold]
    #[track_caller]
    pub(crate) fn raise(self) -> ! {
        panic!("{}", self.message())
    }
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl core::error::Error for ContractViolation {}
