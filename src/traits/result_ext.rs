//! Extension traits for lifting `Result` and `Option` into [`ErrorOr`].
//!
//! These cover the sources that do not already carry an [`Error`]: the
//! foreign error (or the missing value) is mapped lazily, only on failure.
//!
//! # Examples
//!
//! ```
//! use error_or::traits::{OptionExt, ResultExt};
//! use error_or::{Error, ErrorOr};
//!
//! let port: ErrorOr<u16> = "80a"
//!     .parse::<u16>()
//!     .into_error_or_with(|e| Error::validation("Config.Port", e.to_string()));
//! assert_eq!(port.first_error().code(), "Config.Port");
//!
//! let user: ErrorOr<&str> = None.ok_or_error(Error::not_found("User.NotFound", "missing"));
//! assert!(user.is_error());
//! ```

use crate::types::{Error, ErrorOr};

/// Converts a `Result` with a foreign error type into an [`ErrorOr`].
pub trait ResultExt<T, E> {
    /// Maps the error with `f`; `f` is only called on `Err`.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::traits::ResultExt;
    /// use error_or::{Error, ErrorOr};
    ///
    /// let parsed = "42"
    ///     .parse::<i32>()
    ///     .into_error_or_with(|_| Error::validation("n", "not a number"));
    /// assert_eq!(parsed, ErrorOr::ok(42));
    /// ```
    fn into_error_or_with<F>(self, f: F) -> ErrorOr<T>
    where
        F: FnOnce(E) -> Error;

    /// Replaces any error with `error`.
    fn or_error(self, error: Error) -> ErrorOr<T>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn into_error_or_with<F>(self, f: F) -> ErrorOr<T>
    where
        F: FnOnce(E) -> Error,
    {
        match self {
            Ok(value) => ErrorOr::Value(value),
            Err(error) => ErrorOr::from_error(f(error)),
        }
    }

    #[inline]
    fn or_error(self, error: Error) -> ErrorOr<T> {
        self.into_error_or_with(move |_| error)
    }
}

/// Converts an `Option` into an [`ErrorOr`], treating `None` as an error.
pub trait OptionExt<T> {
    fn ok_or_error(self, error: Error) -> ErrorOr<T>;

    /// Like [`ok_or_error`](Self::ok_or_error), building the error lazily.
    fn ok_or_error_with<F>(self, f: F) -> ErrorOr<T>
    where
        F: FnOnce() -> Error;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn ok_or_error(self, error: Error) -> ErrorOr<T> {
        self.ok_or_error_with(move || error)
    }

    #[inline]
    fn ok_or_error_with<F>(self, f: F) -> ErrorOr<T>
    where
        F: FnOnce() -> Error,
    {
        match self {
            Some(value) => ErrorOr::Value(value),
            None => ErrorOr::from_error(f()),
        }
    }
}
