use crate::types::{Error, ErrorList, ErrorOr};

/// Type-erased view of an [`ErrorOr`] state.
///
/// Lets boundary code inspect whether a result failed, and why, without
/// knowing the value type. The trait is object safe.
///
/// # Examples
///
/// ```
/// use error_or::{traits::ErrorOrState, Error, ErrorOr};
///
/// fn failed_codes(results: &[&dyn ErrorOrState]) -> Vec<String> {
///     results
///         .iter()
///         .filter_map(|r| r.first_error_opt())
///         .map(|e| e.code().to_string())
///         .collect()
/// }
///
/// let a = ErrorOr::ok(1u8);
/// let b = ErrorOr::<String>::from_error(Error::gone("Token.Expired", "expired"));
///
/// assert_eq!(failed_codes(&[&a, &b]), vec!["Token.Expired"]);
/// ```
pub trait ErrorOrState {
    /// Returns `true` if errors are recorded.
    fn is_error(&self) -> bool;

    /// The error list, or `None` for a value.
    fn errors_opt(&self) -> Option<&ErrorList>;

    /// The representative error, or `None` for a value.
    #[inline]
    fn first_error_opt(&self) -> Option<&Error> {
        self.errors_opt().map(ErrorList::first)
    }
}

impl<T> ErrorOrState for ErrorOr<T> {
    #[inline]
    fn is_error(&self) -> bool {
        ErrorOr::is_error(self)
    }

    #[inline]
    fn errors_opt(&self) -> Option<&ErrorList> {
        self.as_errors()
    }
}

impl<S: ErrorOrState + ?Sized> ErrorOrState for &S {
    #[inline]
    fn is_error(&self) -> bool {
        (**self).is_error()
    }

    #[inline]
    fn errors_opt(&self) -> Option<&ErrorList> {
        (**self).errors_opt()
    }
}
