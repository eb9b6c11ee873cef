//! Async-step variants of the [`ErrorOr`] combinators.
//!
//! Each method has the same branching rule as its synchronous twin; the
//! step returns a future, which is awaited only on the selected branch.
//!
//! Step futures cannot borrow from the `&T` / `&ErrorList` handed to the
//! side-effect and predicate steps: copy out what the future needs first.

use core::future::Future;

use crate::types::{Error, ErrorList, ErrorOr};

impl<T> ErrorOr<T> {
    /// Chains an async fallible step.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::{Error, ErrorOr};
    ///
    /// async fn load(id: u32) -> ErrorOr<String> {
    ///     if id == 0 {
    ///         return Error::not_found("User.NotFound", "No such user").into();
    ///     }
    ///     ErrorOr::ok(format!("user-{id}"))
    /// }
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// assert_eq!(ErrorOr::ok(7).then_async(load).await, ErrorOr::ok("user-7".to_string()));
    /// assert!(ErrorOr::ok(0).then_async(load).await.is_error());
    /// # }
    /// ```
    pub async fn then_async<U, F, Fut>(self, f: F) -> ErrorOr<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = ErrorOr<U>>,
    {
        match self {
            Self::Value(value) => f(value).await,
            Self::Errors(errors) => ErrorOr::Errors(errors),
        }
    }

    pub async fn map_async<U, F, Fut>(self, f: F) -> ErrorOr<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Value(value) => ErrorOr::Value(f(value).await),
            Self::Errors(errors) => ErrorOr::Errors(errors),
        }
    }

    /// Awaits `f` for its effect on a value and returns the receiver unchanged.
    pub async fn then_do_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Self::Value(value) = &self {
            f(value).await;
        }
        self
    }

    pub async fn or_else_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(ErrorList) -> Fut,
        Fut: Future<Output = ErrorOr<T>>,
    {
        match self {
            Self::Value(value) => Self::Value(value),
            Self::Errors(errors) => f(errors).await,
        }
    }

    /// Recovers from errors with a value computed asynchronously.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::{Error, ErrorOr};
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let fetched = ErrorOr::<&str>::from_error(Error::not_found("Cache.Miss", "miss"))
    ///     .else_value_async(|_| async { "from origin" })
    ///     .await;
    /// assert_eq!(fetched, ErrorOr::ok("from origin"));
    /// # }
    /// ```
    pub async fn else_value_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(ErrorList) -> Fut,
        Fut: Future<Output = T>,
    {
        match self {
            Self::Value(value) => Self::Value(value),
            Self::Errors(errors) => Self::Value(f(errors).await),
        }
    }

    pub async fn else_error_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(ErrorList) -> Fut,
        Fut: Future<Output = Error>,
    {
        match self {
            Self::Value(value) => Self::Value(value),
            Self::Errors(errors) => Self::from_error(f(errors).await),
        }
    }

    pub async fn else_errors_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(ErrorList) -> Fut,
        Fut: Future<Output = ErrorList>,
    {
        match self {
            Self::Value(value) => Self::Value(value),
            Self::Errors(errors) => Self::Errors(f(errors).await),
        }
    }

    /// Awaits `f` for its effect on errors and returns the receiver unchanged.
    pub async fn else_do_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(&ErrorList) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Self::Errors(errors) = &self {
            f(errors).await;
        }
        self
    }

    /// Turns a value into `error` when the async predicate holds.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::{Error, ErrorOr};
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let taken = ErrorOr::ok("alice")
    ///     .fail_if_async(|name| {
    ///         let exists = *name == "alice";
    ///         async move { exists }
    ///     }, Error::conflict("User.Duplicate", "Username taken"))
    ///     .await;
    /// assert_eq!(taken.first_error().code(), "User.Duplicate");
    /// # }
    /// ```
    pub async fn fail_if_async<P, PFut>(self, predicate: P, error: Error) -> Self
    where
        P: FnOnce(&T) -> PFut,
        PFut: Future<Output = bool>,
    {
        match self {
            Self::Value(value) => {
                if predicate(&value).await {
                    Self::from_error(error)
                } else {
                    Self::Value(value)
                }
            },
            errors => errors,
        }
    }

    /// Like [`fail_if_async`](Self::fail_if_async), building the error
    /// asynchronously from the offending value.
    pub async fn fail_if_with_async<P, PFut, B, BFut>(self, predicate: P, builder: B) -> Self
    where
        P: FnOnce(&T) -> PFut,
        PFut: Future<Output = bool>,
        B: FnOnce(&T) -> BFut,
        BFut: Future<Output = Error>,
    {
        match self {
            Self::Value(value) => {
                if predicate(&value).await {
                    Self::from_error(builder(&value).await)
                } else {
                    Self::Value(value)
                }
            },
            errors => errors,
        }
    }

    pub async fn fold_async<R, V, VFut, E, EFut>(self, on_value: V, on_errors: E) -> R
    where
        V: FnOnce(T) -> VFut,
        VFut: Future<Output = R>,
        E: FnOnce(ErrorList) -> EFut,
        EFut: Future<Output = R>,
    {
        match self {
            Self::Value(value) => on_value(value).await,
            Self::Errors(errors) => on_errors(errors).await,
        }
    }

    pub async fn fold_first_async<R, V, VFut, E, EFut>(self, on_value: V, on_first_error: E) -> R
    where
        V: FnOnce(T) -> VFut,
        VFut: Future<Output = R>,
        E: FnOnce(Error) -> EFut,
        EFut: Future<Output = R>,
    {
        match self {
            Self::Value(value) => on_value(value).await,
            Self::Errors(errors) => on_first_error(errors.into_first()).await,
        }
    }

    pub async fn switch_async<V, VFut, E, EFut>(self, on_value: V, on_errors: E)
    where
        V: FnOnce(T) -> VFut,
        VFut: Future<Output = ()>,
        E: FnOnce(ErrorList) -> EFut,
        EFut: Future<Output = ()>,
    {
        self.fold_async(on_value, on_errors).await
    }

    pub async fn switch_first_async<V, VFut, E, EFut>(self, on_value: V, on_first_error: E)
    where
        V: FnOnce(T) -> VFut,
        VFut: Future<Output = ()>,
        E: FnOnce(Error) -> EFut,
        EFut: Future<Output = ()>,
    {
        self.fold_first_async(on_value, on_first_error).await
    }
}
