//! Extension trait for `Future<Output = ErrorOr<T>>`.
//!
//! Lets a pipeline keep chaining while its receiver is still pending, for
//! both synchronous and async steps, mirroring the combinators on
//! [`ErrorOr`] itself.

use core::future::Future;

use crate::types::{Error, ErrorList, ErrorOr};

use super::sequence::Sequence;

/// Combinators for futures that resolve to an [`ErrorOr`].
///
/// Synchronous steps return a [`Sequence`]; async steps return an opaque
/// future. Either way nothing runs until the result is awaited, and the
/// branching rules are those of the matching [`ErrorOr`] method.
///
/// The method names overlap with `futures::FutureExt`; import only one of the
/// two traits in a given scope.
///
/// # Examples
///
/// ```rust
/// use error_or::prelude_async::*;
///
/// async fn fetch_age(id: u32) -> ErrorOr<u32> {
///     match id {
///         1 => ErrorOr::ok(17),
///         _ => Error::not_found("User.NotFound", "No such user").into(),
///     }
/// }
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let message = fetch_age(1)
///     .fail_if(|age| *age < 18, Error::forbidden("User.Underage", "Too young"))
///     .map(|age| format!("age {age}"))
///     .fold(|m| m, |errors| errors.first().code().to_string())
///     .await;
///
/// assert_eq!(message, "User.Underage");
/// # }
/// ```
pub trait FutureErrorOrExt<T>: Future<Output = ErrorOr<T>> + Sized {
    /// Chains a fallible step onto the pending result.
    fn then<U, F>(self, f: F) -> Sequence<Self, impl FnOnce(ErrorOr<T>) -> ErrorOr<U>>
    where
        F: FnOnce(T) -> ErrorOr<U>,
    {
        Sequence::new(self, move |resolved: ErrorOr<T>| resolved.then(f))
    }

    fn map<U, F>(self, f: F) -> Sequence<Self, impl FnOnce(ErrorOr<T>) -> ErrorOr<U>>
    where
        F: FnOnce(T) -> U,
    {
        Sequence::new(self, move |resolved: ErrorOr<T>| resolved.map(f))
    }

    fn then_do<F>(self, f: F) -> Sequence<Self, impl FnOnce(ErrorOr<T>) -> ErrorOr<T>>
    where
        F: FnOnce(&T),
    {
        Sequence::new(self, move |resolved: ErrorOr<T>| resolved.then_do(f))
    }

    fn or_else<F>(self, f: F) -> Sequence<Self, impl FnOnce(ErrorOr<T>) -> ErrorOr<T>>
    where
        F: FnOnce(ErrorList) -> ErrorOr<T>,
    {
        Sequence::new(self, move |resolved: ErrorOr<T>| resolved.or_else(f))
    }

    fn else_value<F>(self, f: F) -> Sequence<Self, impl FnOnce(ErrorOr<T>) -> ErrorOr<T>>
    where
        F: FnOnce(ErrorList) -> T,
    {
        Sequence::new(self, move |resolved: ErrorOr<T>| resolved.else_value(f))
    }

    fn else_error<F>(self, f: F) -> Sequence<Self, impl FnOnce(ErrorOr<T>) -> ErrorOr<T>>
    where
        F: FnOnce(ErrorList) -> Error,
    {
        Sequence::new(self, move |resolved: ErrorOr<T>| resolved.else_error(f))
    }

    fn else_errors<F>(self, f: F) -> Sequence<Self, impl FnOnce(ErrorOr<T>) -> ErrorOr<T>>
    where
        F: FnOnce(ErrorList) -> ErrorList,
    {
        Sequence::new(self, move |resolved: ErrorOr<T>| resolved.else_errors(f))
    }

    fn or_value(self, value: T) -> Sequence<Self, impl FnOnce(ErrorOr<T>) -> ErrorOr<T>> {
        Sequence::new(self, move |resolved: ErrorOr<T>| resolved.or_value(value))
    }

    fn or_error(self, error: Error) -> Sequence<Self, impl FnOnce(ErrorOr<T>) -> ErrorOr<T>> {
        Sequence::new(self, move |resolved: ErrorOr<T>| resolved.or_error(error))
    }

    fn else_do<F>(self, f: F) -> Sequence<Self, impl FnOnce(ErrorOr<T>) -> ErrorOr<T>>
    where
        F: FnOnce(&ErrorList),
    {
        Sequence::new(self, move |resolved: ErrorOr<T>| resolved.else_do(f))
    }

    fn fail_if<P>(
        self,
        predicate: P,
        error: Error,
    ) -> Sequence<Self, impl FnOnce(ErrorOr<T>) -> ErrorOr<T>>
    where
        P: FnOnce(&T) -> bool,
    {
        Sequence::new(self, move |resolved: ErrorOr<T>| resolved.fail_if(predicate, error))
    }

    fn fail_if_with<P, B>(
        self,
        predicate: P,
        builder: B,
    ) -> Sequence<Self, impl FnOnce(ErrorOr<T>) -> ErrorOr<T>>
    where
        P: FnOnce(&T) -> bool,
        B: FnOnce(&T) -> Error,
    {
        Sequence::new(self, move |resolved: ErrorOr<T>| {
            resolved.fail_if_with(predicate, builder)
        })
    }

    /// Reduces the pending result by invoking exactly one branch.
    fn fold<R, V, E>(
        self,
        on_value: V,
        on_errors: E,
    ) -> Sequence<Self, impl FnOnce(ErrorOr<T>) -> R>
    where
        V: FnOnce(T) -> R,
        E: FnOnce(ErrorList) -> R,
    {
        Sequence::new(self, move |resolved: ErrorOr<T>| resolved.fold(on_value, on_errors))
    }

    fn fold_first<R, V, E>(
        self,
        on_value: V,
        on_first_error: E,
    ) -> Sequence<Self, impl FnOnce(ErrorOr<T>) -> R>
    where
        V: FnOnce(T) -> R,
        E: FnOnce(Error) -> R,
    {
        Sequence::new(self, move |resolved: ErrorOr<T>| {
            resolved.fold_first(on_value, on_first_error)
        })
    }

    fn switch<V, E>(self, on_value: V, on_errors: E) -> Sequence<Self, impl FnOnce(ErrorOr<T>)>
    where
        V: FnOnce(T),
        E: FnOnce(ErrorList),
    {
        Sequence::new(self, move |resolved: ErrorOr<T>| resolved.switch(on_value, on_errors))
    }

    fn switch_first<V, E>(
        self,
        on_value: V,
        on_first_error: E,
    ) -> Sequence<Self, impl FnOnce(ErrorOr<T>)>
    where
        V: FnOnce(T),
        E: FnOnce(Error),
    {
        Sequence::new(self, move |resolved: ErrorOr<T>| {
            resolved.switch_first(on_value, on_first_error)
        })
    }

    /// Chains an async fallible step onto the pending result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use error_or::prelude_async::*;
    ///
    /// async fn parse(input: &'static str) -> ErrorOr<i32> {
    ///     input.parse::<i32>().into_error_or_with(|_| Error::validation("n", "NaN"))
    /// }
    ///
    /// async fn double(n: i32) -> ErrorOr<i32> {
    ///     ErrorOr::ok(n * 2)
    /// }
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// assert_eq!(parse("21").then_async(double).await, ErrorOr::ok(42));
    /// assert!(parse("x").then_async(double).await.is_error());
    /// # }
    /// ```
    fn then_async<U, F, Fut>(self, f: F) -> impl Future<Output = ErrorOr<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = ErrorOr<U>>,
    {
        async move { self.await.then_async(f).await }
    }

    fn map_async<U, F, Fut>(self, f: F) -> impl Future<Output = ErrorOr<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        async move { self.await.map_async(f).await }
    }

    fn then_do_async<F, Fut>(self, f: F) -> impl Future<Output = ErrorOr<T>>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move { self.await.then_do_async(f).await }
    }

    fn or_else_async<F, Fut>(self, f: F) -> impl Future<Output = ErrorOr<T>>
    where
        F: FnOnce(ErrorList) -> Fut,
        Fut: Future<Output = ErrorOr<T>>,
    {
        async move { self.await.or_else_async(f).await }
    }

    fn else_value_async<F, Fut>(self, f: F) -> impl Future<Output = ErrorOr<T>>
    where
        F: FnOnce(ErrorList) -> Fut,
        Fut: Future<Output = T>,
    {
        async move { self.await.else_value_async(f).await }
    }

    fn else_error_async<F, Fut>(self, f: F) -> impl Future<Output = ErrorOr<T>>
    where
        F: FnOnce(ErrorList) -> Fut,
        Fut: Future<Output = Error>,
    {
        async move { self.await.else_error_async(f).await }
    }

    fn else_errors_async<F, Fut>(self, f: F) -> impl Future<Output = ErrorOr<T>>
    where
        F: FnOnce(ErrorList) -> Fut,
        Fut: Future<Output = ErrorList>,
    {
        async move { self.await.else_errors_async(f).await }
    }

    fn else_do_async<F, Fut>(self, f: F) -> impl Future<Output = ErrorOr<T>>
    where
        F: FnOnce(&ErrorList) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move { self.await.else_do_async(f).await }
    }

    fn fail_if_async<P, PFut>(self, predicate: P, error: Error) -> impl Future<Output = ErrorOr<T>>
    where
        P: FnOnce(&T) -> PFut,
        PFut: Future<Output = bool>,
    {
        async move { self.await.fail_if_async(predicate, error).await }
    }

    fn fail_if_with_async<P, PFut, B, BFut>(
        self,
        predicate: P,
        builder: B,
    ) -> impl Future<Output = ErrorOr<T>>
    where
        P: FnOnce(&T) -> PFut,
        PFut: Future<Output = bool>,
        B: FnOnce(&T) -> BFut,
        BFut: Future<Output = Error>,
    {
        async move { self.await.fail_if_with_async(predicate, builder).await }
    }

    fn fold_async<R, V, VFut, E, EFut>(self, on_value: V, on_errors: E) -> impl Future<Output = R>
    where
        V: FnOnce(T) -> VFut,
        VFut: Future<Output = R>,
        E: FnOnce(ErrorList) -> EFut,
        EFut: Future<Output = R>,
    {
        async move { self.await.fold_async(on_value, on_errors).await }
    }

    fn fold_first_async<R, V, VFut, E, EFut>(
        self,
        on_value: V,
        on_first_error: E,
    ) -> impl Future<Output = R>
    where
        V: FnOnce(T) -> VFut,
        VFut: Future<Output = R>,
        E: FnOnce(Error) -> EFut,
        EFut: Future<Output = R>,
    {
        async move { self.await.fold_first_async(on_value, on_first_error).await }
    }

    fn switch_async<V, VFut, E, EFut>(self, on_value: V, on_errors: E) -> impl Future<Output = ()>
    where
        V: FnOnce(T) -> VFut,
        VFut: Future<Output = ()>,
        E: FnOnce(ErrorList) -> EFut,
        EFut: Future<Output = ()>,
    {
        async move { self.await.switch_async(on_value, on_errors).await }
    }

    fn switch_first_async<V, VFut, E, EFut>(
        self,
        on_value: V,
        on_first_error: E,
    ) -> impl Future<Output = ()>
    where
        V: FnOnce(T) -> VFut,
        VFut: Future<Output = ()>,
        E: FnOnce(Error) -> EFut,
        EFut: Future<Output = ()>,
    {
        async move { self.await.switch_first_async(on_value, on_first_error).await }
    }
}

impl<Fut, T> FutureErrorOrExt<T> for Fut where Fut: Future<Output = ErrorOr<T>> {}
