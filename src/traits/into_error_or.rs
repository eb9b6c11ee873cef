//! Trait for converting types into an [`ErrorOr`].
//!
//! # Implementations
//!
//! - [`Error`] - a single-error state
//! - [`ErrorList`] - an error state holding the list
//! - `Vec<Error>` - an error state; panics when empty
//! - `Result<T, E>` where `E: Into<ErrorList>` - value or error state
//! - `ErrorOr<T>` - identity
//!
//! # Examples
//!
//! ```
//! use error_or::{traits::IntoErrorOr, Error, ErrorOr};
//!
//! let from_error: ErrorOr<u8> = Error::unexpected("Io.Read", "read failed").into_error_or();
//! let from_result: ErrorOr<u8> = Ok::<u8, Error>(3).into_error_or();
//!
//! assert!(from_error.is_error());
//! assert_eq!(from_result, ErrorOr::ok(3));
//! ```
use crate::types::alloc_type::Vec;
use crate::types::{Error, ErrorList, ErrorOr};

/// Converts a type into an [`ErrorOr<T>`].
///
/// Plain values are wrapped with [`ErrorOr::ok`]; a blanket implementation
/// for every `T` would overlap with the error sources below.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be converted into `ErrorOr<{T}>`",
    label = "this type does not implement `IntoErrorOr<{T}>`",
    note = "wrap plain values with `ErrorOr::ok`"
)]
pub trait IntoErrorOr<T> {
    fn into_error_or(self) -> ErrorOr<T>;
}

impl<T> IntoErrorOr<T> for Error {
    #[inline]
    fn into_error_or(self) -> ErrorOr<T> {
        ErrorOr::from_error(self)
    }
}

impl<T> IntoErrorOr<T> for ErrorList {
    #[inline]
    fn into_error_or(self) -> ErrorOr<T> {
        ErrorOr::from_error_list(self)
    }
}

impl<T> IntoErrorOr<T> for Vec<Error> {
    /// # Panics
    ///
    /// Panics with [`ContractViolation::EmptyErrors`](crate::ContractViolation::EmptyErrors)
    /// when the vector is empty.
    #[inline]
    #[track_caller]
    fn into_error_or(self) -> ErrorOr<T> {
        ErrorOr::from_errors(self)
    }
}

impl<T, E> IntoErrorOr<T> for Result<T, E>
where
    E: Into<ErrorList>,
{
    #[inline]
    fn into_error_or(self) -> ErrorOr<T> {
        match self {
            Ok(value) => ErrorOr::Value(value),
            Err(errors) => ErrorOr::Errors(errors.into()),
        }
    }
}

impl<T> IntoErrorOr<T> for ErrorOr<T> {
    #[inline]
    fn into_error_or(self) -> ErrorOr<T> {
        self
    }
}
