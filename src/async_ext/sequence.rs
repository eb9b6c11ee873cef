//! Future that applies one synchronous step to a pending [`ErrorOr`].
//!
//! [`Sequence`] is what every synchronous combinator of
//! [`FutureErrorOrExt`](super::FutureErrorOrExt) returns: it awaits the inner
//! future, then hands the resolved `ErrorOr` to a single `FnOnce`.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::types::ErrorOr;

pin_project! {
    /// A Future that awaits an `ErrorOr` and applies a step to it.
    ///
    /// The step runs exactly once, when the inner future resolves. Which
    /// branch of the step does any work is up to the step itself, so the
    /// short-circuit rules of the synchronous combinators carry over.
    ///
    /// # Cancel Safety
    ///
    /// `Sequence` is cancel-safe if the inner future is cancel-safe. The step
    /// is only called when `poll` observes `Poll::Ready`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use error_or::prelude_async::*;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let doubled = async { ErrorOr::ok(21) }.map(|n| n * 2).await;
    /// assert_eq!(doubled, ErrorOr::ok(42));
    /// # }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct Sequence<Fut, F> {
        #[pin]
        future: Fut,
        step: Option<F>,
    }
}

impl<Fut, F> Sequence<Fut, F> {
    /// Creates a new `Sequence` from a pending result and the step to apply.
    #[inline]
    pub fn new(future: Fut, step: F) -> Self {
        Self { future, step: Some(step) }
    }
}

impl<Fut, F, T, R> Future for Sequence<Fut, F>
where
    Fut: Future<Output = ErrorOr<T>>,
    F: FnOnce(ErrorOr<T>) -> R,
{
    type Output = R;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        if this.step.is_none() {
            panic!("`Sequence` polled after completion");
        }

        match this.future.poll(cx) {
            Poll::Ready(resolved) => match this.step.take() {
                Some(step) => Poll::Ready(step(resolved)),
                None => unreachable!(),
            },
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<Fut, F, T, R> FusedFuture for Sequence<Fut, F>
where
    Fut: FusedFuture<Output = ErrorOr<T>>,
    F: FnOnce(ErrorOr<T>) -> R,
{
    fn is_terminated(&self) -> bool {
        self.step.is_none() || self.future.is_terminated()
    }
}
