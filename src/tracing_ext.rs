//! Tracing integration for error-or.
//!
//! Emits one `warn`-level event per recorded error, with the error's code,
//! category and description as structured fields, and passes the result
//! through unchanged so the call can sit anywhere in a pipeline.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-or = { version = "0.1", features = ["tracing"] }
//! ```
//!
//! # Examples
//!
//! ```
//! use error_or::tracing_ext::TraceErrorsExt;
//! use error_or::{Error, ErrorOr};
//!
//! let result = ErrorOr::<u32>::from_error(Error::unexpected("Db.Timeout", "query timed out"))
//!     .trace_errors()
//!     .or_value(0);
//!
//! assert_eq!(result, ErrorOr::ok(0));
//! ```

use tracing::warn;

use crate::types::{ErrorList, ErrorOr};

#[cfg(feature = "async")]
pub use self::future::{FutureTraceExt, TraceErrorsFuture};

/// Logs the errors of an [`ErrorOr`] without consuming it.
pub trait TraceErrorsExt: Sized {
    /// Emits one event per error, in order, then returns `self`.
    ///
    /// A value emits nothing.
    fn trace_errors(self) -> Self;
}

impl<T> TraceErrorsExt for ErrorOr<T> {
    #[inline]
    fn trace_errors(self) -> Self {
        if let ErrorOr::Errors(errors) = &self {
            emit_errors(errors);
        }
        self
    }
}

fn emit_errors(errors: &ErrorList) {
    let total = errors.len();
    for (index, error) in errors.iter().enumerate() {
        warn!(
            code = error.code(),
            error_type = %error.error_type(),
            description = error.description(),
            index,
            total,
            "error recorded"
        );
    }
}

#[cfg(feature = "async")]
mod future {
    use core::future::Future;
    use core::pin::Pin;
    use core::task::{Context, Poll};

    use pin_project_lite::pin_project;
    use tracing::Span;

    use super::emit_errors;
    use crate::types::ErrorOr;

    /// Extension trait for pending results that logs their errors on resolution.
    ///
    /// # Example
    ///
    /// ```rust
    /// use error_or::tracing_ext::FutureTraceExt;
    /// use error_or::{Error, ErrorOr};
    /// use tracing::info_span;
    ///
    /// async fn fetch_user(id: u64) -> ErrorOr<String> {
    ///     let missing = Error::not_found("User.NotFound", "missing");
    ///     async move { ErrorOr::<String>::from_error(missing) }
    ///         .in_span(info_span!("fetch_user", user_id = id))
    ///         .await
    /// }
    /// ```
    pub trait FutureTraceExt<T>: Future<Output = ErrorOr<T>> + Sized {
        /// Logs errors inside the span that is current when this is called.
        fn trace_errors(self) -> TraceErrorsFuture<Self> {
            TraceErrorsFuture { inner: self, span: Span::current() }
        }

        /// Polls the inner future inside `span` and logs errors there.
        fn in_span(self, span: Span) -> TraceErrorsFuture<Self> {
            TraceErrorsFuture { inner: self, span }
        }
    }

    impl<F, T> FutureTraceExt<T> for F where F: Future<Output = ErrorOr<T>> {}

    pin_project! {
        /// Future wrapper that logs the resolved errors within a span.
        ///
        /// Created by [`FutureTraceExt::trace_errors`] or [`FutureTraceExt::in_span`].
        #[must_use = "futures do nothing unless polled"]
        pub struct TraceErrorsFuture<F> {
            #[pin]
            inner: F,
            span: Span,
        }
    }

    impl<F, T> Future for TraceErrorsFuture<F>
    where
        F: Future<Output = ErrorOr<T>>,
    {
        type Output = ErrorOr<T>;

        fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
            let this = self.project();
            let _entered = this.span.enter();

            match this.inner.poll(cx) {
                Poll::Ready(resolved) => {
                    if let ErrorOr::Errors(errors) = &resolved {
                        emit_errors(errors);
                    }
                    Poll::Ready(resolved)
                },
                Poll::Pending => Poll::Pending,
            }
        }
    }
}
