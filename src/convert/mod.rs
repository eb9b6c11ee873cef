//! Conversion helpers between `ErrorOr`, `Result` and `Option`.
//!
//! These adapters make it straightforward to adopt `error-or` incrementally:
//! wrap existing results on the way in, and flatten back to `Result` or
//! `Option` when handing values to APIs that do not know about [`ErrorOr`].
//!
//! # Examples
//!
//! ```
//! use error_or::convert::*;
//! use error_or::{Error, ErrorOr};
//!
//! let result: Result<i32, Error> = Ok(42);
//! let error_or = result_to_error_or(result);
//! assert!(error_or.is_value());
//!
//! let back = error_or_to_result(ErrorOr::<i32>::from_error(Error::default()));
//! assert_eq!(back.unwrap_err().len(), 1);
//! ```

use core::iter::FusedIterator;

use crate::types::{Error, ErrorList, ErrorOr, ErrorVec, Success};

/// Converts a `Result` into an [`ErrorOr`].
///
/// # Examples
///
/// ```
/// use error_or::convert::result_to_error_or;
/// use error_or::{Error, ErrorOr};
///
/// let failed: Result<u8, Error> = Err(Error::forbidden("Doc.Locked", "locked"));
/// assert!(result_to_error_or(failed).is_error());
/// ```
#[inline]
pub fn result_to_error_or<T, E>(result: Result<T, E>) -> ErrorOr<T>
where
    E: Into<ErrorList>,
{
    match result {
        Ok(value) => ErrorOr::Value(value),
        Err(errors) => ErrorOr::Errors(errors.into()),
    }
}

/// Converts an [`ErrorOr`] into a `Result` carrying the whole error list.
#[inline]
pub fn error_or_to_result<T>(error_or: ErrorOr<T>) -> Result<T, ErrorList> {
    error_or.into_result()
}

/// Converts an [`ErrorOr`] into a `Result` carrying only the first error.
///
/// # Examples
///
/// ```
/// use error_or::convert::error_or_to_first_result;
/// use error_or::{Error, ErrorOr};
///
/// let e = ErrorOr::<()>::from_errors(vec![
///     Error::validation("a", "first"),
///     Error::validation("b", "second"),
/// ]);
/// assert_eq!(error_or_to_first_result(e).unwrap_err().code(), "a");
/// ```
#[inline]
pub fn error_or_to_first_result<T>(error_or: ErrorOr<T>) -> Result<T, Error> {
    error_or.into_result().map_err(ErrorList::into_first)
}

/// Converts an `Option` into an [`ErrorOr`], using `error` for `None`.
#[inline]
pub fn option_to_error_or<T>(option: Option<T>, error: Error) -> ErrorOr<T> {
    match option {
        Some(value) => ErrorOr::Value(value),
        None => ErrorOr::from_error(error),
    }
}

/// Discards the errors, keeping only the value.
#[inline]
pub fn error_or_to_option<T>(error_or: ErrorOr<T>) -> Option<T> {
    match error_or {
        ErrorOr::Value(value) => Some(value),
        ErrorOr::Errors(_) => None,
    }
}

/// Collects validation errors into a single result.
///
/// # Returns
///
/// * `ErrorOr::Value(Success)` if the iterator yields no errors
/// * `ErrorOr::Errors(..)` holding every error, in order, otherwise
///
/// # Examples
///
/// ```
/// use error_or::convert::collect_errors;
/// use error_or::Error;
///
/// let password = "abc";
/// let mut errors = Vec::new();
/// if password.len() < 8 {
///     errors.push(Error::validation("Password.TooShort", "Too short"));
/// }
/// if !password.chars().any(|c| c.is_ascii_digit()) {
///     errors.push(Error::validation("Password.NoDigit", "Needs a digit"));
/// }
///
/// assert_eq!(collect_errors(errors).errors().len(), 2);
/// assert!(collect_errors(Vec::new()).is_value());
/// ```
#[inline]
pub fn collect_errors<I>(errors: I) -> ErrorOr<Success>
where
    I: IntoIterator<Item = Error>,
{
    let items: ErrorVec<Error> = errors.into_iter().collect();
    match ErrorList::try_from(items) {
        Ok(list) => ErrorOr::Errors(list),
        Err(_) => ErrorOr::Value(Success),
    }
}

/// Iterator returned by [`split_errors`].
pub struct SplitErrorsIter<T> {
    inner: SplitInner<T>,
}

enum SplitInner<T> {
    Value(Option<T>),
    Errors(smallvec::IntoIter<[Error; 1]>),
}

impl<T> Iterator for SplitErrorsIter<T> {
    type Item = Result<T, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            SplitInner::Value(opt) => opt.take().map(Ok),
            SplitInner::Errors(iter) => iter.next().map(Err),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            SplitInner::Value(opt) => {
                let len = usize::from(opt.is_some());
                (len, Some(len))
            },
            SplitInner::Errors(iter) => iter.size_hint(),
        }
    }
}

impl<T> ExactSizeIterator for SplitErrorsIter<T> {}
impl<T> FusedIterator for SplitErrorsIter<T> {}

/// Splits an [`ErrorOr`] into individual `Result` values.
///
/// Yields `Ok(value)` once for a value, or `Err(e)` for each error in order.
///
/// # Examples
///
/// ```
/// use error_or::convert::split_errors;
/// use error_or::{Error, ErrorOr};
///
/// let results: Vec<_> = split_errors(ErrorOr::ok(42)).collect();
/// assert_eq!(results, vec![Ok(42)]);
///
/// let e = ErrorOr::<i32>::from_errors(vec![
///     Error::validation("a", "x"),
///     Error::validation("b", "y"),
/// ]);
/// assert_eq!(split_errors(e).filter(Result::is_err).count(), 2);
/// ```
pub fn split_errors<T>(error_or: ErrorOr<T>) -> SplitErrorsIter<T> {
    let inner = match error_or {
        ErrorOr::Value(value) => SplitInner::Value(Some(value)),
        ErrorOr::Errors(errors) => SplitInner::Errors(errors.into_iter()),
    };
    SplitErrorsIter { inner }
}

/// Collects results, accumulating every error instead of stopping at the first.
///
/// The collection is a value only if every item is a value. Otherwise the
/// errors of all failed items are concatenated in iteration order.
///
/// # Examples
///
/// ```
/// use error_or::{Error, ErrorOr};
///
/// let all_ok: ErrorOr<Vec<i32>> = vec![ErrorOr::ok(1), ErrorOr::ok(2)].into_iter().collect();
/// assert_eq!(all_ok, ErrorOr::ok(vec![1, 2]));
///
/// let mixed: ErrorOr<Vec<i32>> = vec![
///     ErrorOr::ok(1),
///     ErrorOr::from_error(Error::validation("a", "x")),
///     ErrorOr::from_error(Error::validation("b", "y")),
/// ]
/// .into_iter()
/// .collect();
/// assert_eq!(mixed.errors().len(), 2);
/// ```
impl<T, V> FromIterator<ErrorOr<T>> for ErrorOr<V>
where
    V: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = ErrorOr<T>>>(iter: I) -> Self {
        let mut errors: ErrorVec<Error> = ErrorVec::new();
        let values: V = iter
            .into_iter()
            .filter_map(|item| match item {
                ErrorOr::Value(value) => Some(value),
                ErrorOr::Errors(list) => {
                    errors.extend(list);
                    None
                },
            })
            .collect();

        match ErrorList::try_from(errors) {
            Ok(list) => ErrorOr::Errors(list),
            Err(_) => ErrorOr::Value(values),
        }
    }
}
