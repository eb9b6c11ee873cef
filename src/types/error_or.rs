use crate::types::contract::ContractViolation;
use crate::types::error::Error;
use crate::types::error_list::ErrorList;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value, or a non-empty ordered list of [`Error`]s.
///
/// `ErrorOr<T>` is the carrier for fallible pipelines: each step is chained
/// with a combinator, steps are skipped once the pipeline holds errors, and
/// the terminal [`fold`](Self::fold) / [`switch`](Self::switch) decides how to
/// render the outcome.
///
/// The error variant holds an [`ErrorList`], which cannot be empty, so
/// "marked as error but without errors" is not representable.
///
/// # Serde Support
///
/// With the `serde` feature, `ErrorOr` serializes as `{"value": ...}` or
/// `{"errors": [...]}`, so both the discriminant and the payload round-trip.
///
/// # Examples
///
/// ```
/// use error_or::{Error, ErrorOr};
///
/// fn parse(input: &str) -> ErrorOr<i32> {
///     input
///         .parse::<i32>()
///         .map_err(|_| Error::validation("input", "Not a number"))
///         .into()
/// }
///
/// let doubled = ErrorOr::ok("21").then(parse).map(|n| n * 2);
/// assert_eq!(doubled, ErrorOr::ok(42));
///
/// let failed = ErrorOr::ok("abc").then(parse).map(|n| n * 2);
/// assert_eq!(failed.first_error().code(), "input");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorOr<T> {
    Value(T),
    Errors(ErrorList),
}

impl<T> ErrorOr<T> {
    /// Wraps a computed value.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::ErrorOr;
    ///
    /// let v = ErrorOr::ok(42);
    /// assert!(!v.is_error());
    /// assert_eq!(*v.value(), 42);
    /// ```
    #[inline]
    pub fn ok(value: T) -> Self {
        Self::Value(value)
    }

    /// Alias for [`ok`](Self::ok).
    #[inline]
    pub fn from_value(value: T) -> Self {
        Self::Value(value)
    }

    /// Wraps a single error.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::{Error, ErrorOr};
    ///
    /// let e = ErrorOr::<i32>::from_error(Error::not_found("User.NotFound", "missing"));
    /// assert!(e.is_error());
    /// assert_eq!(e.errors().len(), 1);
    /// ```
    #[inline]
    pub fn from_error(error: Error) -> Self {
        Self::Errors(ErrorList::new(error))
    }

    /// Wraps an already non-empty error list.
    #[inline]
    pub fn from_error_list(errors: ErrorList) -> Self {
        Self::Errors(errors)
    }

    /// Wraps a collection of errors.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::EmptyErrors`] when `errors` is empty.
    /// Use [`try_from_errors`](Self::try_from_errors) to get the violation as a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::{Error, ErrorOr};
    ///
    /// let e = ErrorOr::<()>::from_errors(vec![
    ///     Error::validation("email", "Email is required"),
    ///     Error::validation("password", "Too short"),
    /// ]);
    /// assert_eq!(e.errors().len(), 2);
    /// ```
    #[inline]
    #[track_caller]
    pub fn from_errors<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = Error>,
    {
        Self::Errors(ErrorList::from_iter_or_panic(errors))
    }

    /// Fallible twin of [`from_errors`](Self::from_errors).
    #[inline]
    pub fn try_from_errors<I>(errors: I) -> Result<Self, ContractViolation>
    where
        I: IntoIterator<Item = Error>,
    {
        ErrorList::try_from_iter(errors).map(Self::Errors)
    }

    /// Returns `true` if the state is the error list.
    #[must_use]
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Errors(_))
    }

    /// Returns `true` if the state is a value.
    #[must_use]
    #[inline]
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Borrows the value.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::ValueOnErrors`] when errors are recorded.
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &T {
        match self {
            Self::Value(value) => value,
            Self::Errors(_) => ContractViolation::ValueOnErrors.raise(),
        }
    }

    /// Consumes the receiver, returning the value.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::ValueOnErrors`] when errors are recorded.
    #[inline]
    #[track_caller]
    pub fn into_value(self) -> T {
        match self {
            Self::Value(value) => value,
            Self::Errors(_) => ContractViolation::ValueOnErrors.raise(),
        }
    }

    /// Borrows the error list.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::ErrorsOnValue`] on a value.
    #[inline]
    #[track_caller]
    pub fn errors(&self) -> &ErrorList {
        match self {
            Self::Value(_) => ContractViolation::ErrorsOnValue.raise(),
            Self::Errors(errors) => errors,
        }
    }

    /// Consumes the receiver, returning the error list.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::ErrorsOnValue`] on a value.
    #[inline]
    #[track_caller]
    pub fn into_errors(self) -> ErrorList {
        match self {
            Self::Value(_) => ContractViolation::ErrorsOnValue.raise(),
            Self::Errors(errors) => errors,
        }
    }

    /// Returns the errors, or an empty slice on a value. Never panics.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::{Error, ErrorOr};
    ///
    /// assert!(ErrorOr::ok(1).errors_or_empty().is_empty());
    /// assert_eq!(ErrorOr::<i32>::from_error(Error::default()).errors_or_empty().len(), 1);
    /// ```
    #[inline]
    pub fn errors_or_empty(&self) -> &[Error] {
        match self {
            Self::Value(_) => &[],
            Self::Errors(errors) => errors.as_slice(),
        }
    }

    /// Borrows the representative (first) error.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::FirstErrorOnValue`] on a value.
    #[inline]
    #[track_caller]
    pub fn first_error(&self) -> &Error {
        match self {
            Self::Value(_) => ContractViolation::FirstErrorOnValue.raise(),
            Self::Errors(errors) => errors.first(),
        }
    }

    /// Borrows the value, or `None` when errors are recorded.
    #[inline]
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Errors(_) => None,
        }
    }

    /// Borrows the error list, or `None` on a value.
    #[inline]
    pub fn as_errors(&self) -> Option<&ErrorList> {
        match self {
            Self::Value(_) => None,
            Self::Errors(errors) => Some(errors),
        }
    }

    /// Non-panicking twin of [`value`](Self::value).
    #[inline]
    pub fn try_value(&self) -> Result<&T, ContractViolation> {
        self.as_value().ok_or(ContractViolation::ValueOnErrors)
    }

    /// Non-panicking twin of [`errors`](Self::errors).
    #[inline]
    pub fn try_errors(&self) -> Result<&ErrorList, ContractViolation> {
        self.as_errors().ok_or(ContractViolation::ErrorsOnValue)
    }

    /// Non-panicking twin of [`first_error`](Self::first_error).
    #[inline]
    pub fn try_first_error(&self) -> Result<&Error, ContractViolation> {
        self.as_errors()
            .map(ErrorList::first)
            .ok_or(ContractViolation::FirstErrorOnValue)
    }

    /// Converts into a standard `Result`, keeping the whole error list.
    #[inline]
    pub fn into_result(self) -> Result<T, ErrorList> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Errors(errors) => Err(errors),
        }
    }

    /// Borrowing form of [`into_result`](Self::into_result).
    #[inline]
    pub fn as_result(&self) -> Result<&T, &ErrorList> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Errors(errors) => Err(errors),
        }
    }

    /// Chains a fallible step.
    ///
    /// On a value, calls `f` and returns its result. On errors, `f` is never
    /// called and the same error list is moved into the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::{Error, ErrorOr};
    ///
    /// let halve = |n: i32| {
    ///     if n % 2 == 0 {
    ///         ErrorOr::ok(n / 2)
    ///     } else {
    ///         ErrorOr::from_error(Error::validation("n", "odd"))
    ///     }
    /// };
    ///
    /// assert_eq!(ErrorOr::ok(8).then(halve).then(halve), ErrorOr::ok(2));
    /// assert!(ErrorOr::ok(6).then(halve).then(halve).is_error());
    /// ```
    #[inline]
    pub fn then<U, F>(self, f: F) -> ErrorOr<U>
    where
        F: FnOnce(T) -> ErrorOr<U>,
    {
        match self {
            Self::Value(value) => f(value),
            Self::Errors(errors) => ErrorOr::Errors(errors),
        }
    }

    /// Chains an infallible step, wrapping its result as a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::ErrorOr;
    ///
    /// assert_eq!(ErrorOr::ok(5).map(|n| n.to_string()), ErrorOr::ok("5".to_string()));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> ErrorOr<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Value(value) => ErrorOr::Value(f(value)),
            Self::Errors(errors) => ErrorOr::Errors(errors),
        }
    }

    /// Runs `f` for its effect on a value and returns the receiver unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::ErrorOr;
    ///
    /// let mut seen = None;
    /// let v = ErrorOr::ok(3).then_do(|n| seen = Some(*n));
    /// assert_eq!(v, ErrorOr::ok(3));
    /// assert_eq!(seen, Some(3));
    /// ```
    #[inline]
    pub fn then_do<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Value(value) = &self {
            f(value);
        }
        self
    }

    /// Recovers from errors with another `ErrorOr`.
    ///
    /// This is the primitive every `else_*` method is built on. On a value
    /// the fallback is never invoked.
    #[inline]
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce(ErrorList) -> ErrorOr<T>,
    {
        match self {
            Self::Value(value) => Self::Value(value),
            Self::Errors(errors) => f(errors),
        }
    }

    /// Recovers from errors with a value computed from them.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::{Error, ErrorOr};
    ///
    /// let recovered = ErrorOr::<usize>::from_error(Error::default())
    ///     .else_value(|errors| errors.len());
    /// assert_eq!(recovered, ErrorOr::ok(1));
    /// ```
    #[inline]
    pub fn else_value<F>(self, f: F) -> Self
    where
        F: FnOnce(ErrorList) -> T,
    {
        self.or_else(|errors| Self::Value(f(errors)))
    }

    /// Replaces the errors with a single error computed from them.
    #[inline]
    pub fn else_error<F>(self, f: F) -> Self
    where
        F: FnOnce(ErrorList) -> Error,
    {
        self.or_else(|errors| Self::from_error(f(errors)))
    }

    /// Replaces the errors with another error list computed from them.
    #[inline]
    pub fn else_errors<F>(self, f: F) -> Self
    where
        F: FnOnce(ErrorList) -> ErrorList,
    {
        self.or_else(|errors| Self::Errors(f(errors)))
    }

    /// Replaces the errors with a literal default value.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::{Error, ErrorOr};
    ///
    /// assert_eq!(ErrorOr::from_error(Error::default()).or_value(0), ErrorOr::ok(0));
    /// assert_eq!(ErrorOr::ok(7).or_value(0), ErrorOr::ok(7));
    /// ```
    #[inline]
    pub fn or_value(self, value: T) -> Self {
        self.or_else(|_| Self::Value(value))
    }

    /// Replaces the errors with a literal error.
    #[inline]
    pub fn or_error(self, error: Error) -> Self {
        self.or_else(|_| Self::from_error(error))
    }

    /// Runs `f` for its effect on errors and returns the receiver unchanged.
    #[inline]
    pub fn else_do<F>(self, f: F) -> Self
    where
        F: FnOnce(&ErrorList),
    {
        if let Self::Errors(errors) = &self {
            f(errors);
        }
        self
    }

    /// Turns a value into `error` when `predicate` holds.
    ///
    /// On errors the predicate is never invoked.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::{Error, ErrorOr};
    ///
    /// let too_big = Error::validation("n", "too big");
    ///
    /// let failed = ErrorOr::ok(5).fail_if(|n| *n > 3, too_big.clone());
    /// assert_eq!(failed.first_error(), &too_big);
    ///
    /// let passed = ErrorOr::ok(5).fail_if(|n| *n > 10, too_big);
    /// assert_eq!(passed, ErrorOr::ok(5));
    /// ```
    #[inline]
    pub fn fail_if<P>(self, predicate: P, error: Error) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.fail_if_with(predicate, move |_| error)
    }

    /// Like [`fail_if`](Self::fail_if), building the error from the offending value.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::{Error, ErrorOr};
    ///
    /// let failed = ErrorOr::ok(12).fail_if_with(
    ///     |n| *n > 10,
    ///     |n| Error::validation("n", format!("{n} is greater than 10")),
    /// );
    /// assert_eq!(failed.first_error().description(), "12 is greater than 10");
    /// ```
    #[inline]
    pub fn fail_if_with<P, B>(self, predicate: P, builder: B) -> Self
    where
        P: FnOnce(&T) -> bool,
        B: FnOnce(&T) -> Error,
    {
        match self {
            Self::Value(value) => {
                if predicate(&value) {
                    Self::from_error(builder(&value))
                } else {
                    Self::Value(value)
                }
            },
            errors => errors,
        }
    }

    /// Reduces to a single result by invoking exactly one branch.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::{Error, ErrorOr};
    ///
    /// let render =
    ///     |r: ErrorOr<i32>| r.fold(|n| format!("ok {n}"), |e| format!("{} errors", e.len()));
    ///
    /// assert_eq!(render(ErrorOr::ok(1)), "ok 1");
    /// assert_eq!(render(ErrorOr::from_error(Error::default())), "1 errors");
    /// ```
    #[inline]
    pub fn fold<R, V, E>(self, on_value: V, on_errors: E) -> R
    where
        V: FnOnce(T) -> R,
        E: FnOnce(ErrorList) -> R,
    {
        match self {
            Self::Value(value) => on_value(value),
            Self::Errors(errors) => on_errors(errors),
        }
    }

    /// Like [`fold`](Self::fold), passing only the first error.
    #[inline]
    pub fn fold_first<R, V, E>(self, on_value: V, on_first_error: E) -> R
    where
        V: FnOnce(T) -> R,
        E: FnOnce(Error) -> R,
    {
        self.fold(on_value, |errors| on_first_error(errors.into_first()))
    }

    /// Branches into side-effecting callbacks.
    #[inline]
    pub fn switch<V, E>(self, on_value: V, on_errors: E)
    where
        V: FnOnce(T),
        E: FnOnce(ErrorList),
    {
        self.fold(on_value, on_errors)
    }

    /// Like [`switch`](Self::switch), passing only the first error.
    #[inline]
    pub fn switch_first<V, E>(self, on_value: V, on_first_error: E)
    where
        V: FnOnce(T),
        E: FnOnce(Error),
    {
        self.fold_first(on_value, on_first_error)
    }
}

impl<T> From<Error> for ErrorOr<T> {
    #[inline]
    fn from(error: Error) -> Self {
        Self::from_error(error)
    }
}

impl<T> From<ErrorList> for ErrorOr<T> {
    #[inline]
    fn from(errors: ErrorList) -> Self {
        Self::Errors(errors)
    }
}

impl<T> From<Result<T, Error>> for ErrorOr<T> {
    #[inline]
    fn from(result: Result<T, Error>) -> Self {
        match result {
            Ok(value) => Self::Value(value),
            Err(error) => Self::from_error(error),
        }
    }
}

impl<T> From<Result<T, ErrorList>> for ErrorOr<T> {
    #[inline]
    fn from(result: Result<T, ErrorList>) -> Self {
        match result {
            Ok(value) => Self::Value(value),
            Err(errors) => Self::Errors(errors),
        }
    }
}

impl<T> From<ErrorOr<T>> for Result<T, ErrorList> {
    #[inline]
    fn from(error_or: ErrorOr<T>) -> Self {
        error_or.into_result()
    }
}
