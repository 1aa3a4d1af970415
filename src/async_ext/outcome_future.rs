//! Future wrapper that resolves to an [`Outcome`].
//!
//! [`OutcomeFuture`] polls an inner future whose output implements
//! [`IntoOutcome`] and converts that output on completion. A panic raised
//! while polling is caught and coerced the same way the sync adapter does.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::panic::{self, AssertUnwindSafe};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::traits::IntoOutcome;
use crate::types::{ChainedError, Outcome};
use crate::wrap::coerce_panic;

pin_project! {
    /// A future resolving to an [`Outcome`].
    ///
    /// Created by [`with_result_async`] or
    /// [`FutureOutcomeExt::into_outcome`](super::FutureOutcomeExt::into_outcome).
    ///
    /// # Cancel Safety
    ///
    /// `OutcomeFuture` is cancel-safe if the inner future is cancel-safe.
    /// Dropping it drops the inner future; nothing else is aborted.
    #[must_use = "futures do nothing unless polled"]
    pub struct OutcomeFuture<Fut> {
        #[pin]
        future: Option<Fut>,
        failure: Option<ChainedError>,
    }
}

impl<Fut> OutcomeFuture<Fut> {
    /// Wraps `future`.
    #[inline]
    pub fn new(future: Fut) -> Self {
        Self { future: Some(future), failure: None }
    }

    /// Creates a future that resolves to `error` on its first poll.
    #[inline]
    pub fn failed(error: ChainedError) -> Self {
        Self { future: None, failure: Some(error) }
    }
}

impl<Fut> Future for OutcomeFuture<Fut>
where
    Fut: Future,
    Fut::Output: IntoOutcome,
{
    type Output = Outcome<<Fut::Output as IntoOutcome>::Output>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        if let Some(error) = this.failure.take() {
            return Poll::Ready(Outcome::Failure(error));
        }

        let future = this
            .future
            .as_mut()
            .as_pin_mut()
            .expect("OutcomeFuture polled after completion; this is a bug");

        match panic::catch_unwind(AssertUnwindSafe(|| future.poll(cx))) {
            Ok(Poll::Pending) => Poll::Pending,
            Ok(Poll::Ready(output)) => {
                this.future.set(None);
                Poll::Ready(output.into_outcome())
            },
            Err(payload) => {
                this.future.set(None);
                Poll::Ready(Outcome::Failure(coerce_panic(payload)))
            },
        }
    }
}

impl<Fut> FusedFuture for OutcomeFuture<Fut>
where
    Fut: Future,
    Fut::Output: IntoOutcome,
{
    fn is_terminated(&self) -> bool {
        self.future.is_none() && self.failure.is_none()
    }
}

/// Wraps an async function so every call returns an [`OutcomeFuture`].
///
/// Calling the wrapped function never blocks: it invokes `f` and hands back
/// the future. A panic raised synchronously by `f` yields a future that is
/// already failed.
///
/// # Examples
///
/// ```
/// use error_trail::async_ext::with_result_async;
/// use std::io;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let fetch = with_result_async(|id: u32| async move {
///     if id == 0 {
///         Err(io::Error::other("no such record"))
///     } else {
///         Ok(id * 10)
///     }
/// });
///
/// assert_eq!(fetch(4).await.data(), Some(&40));
/// assert!(fetch(0).await.is_failure());
/// # }
/// ```
pub fn with_result_async<F, A, Fut>(f: F) -> impl Fn(A) -> OutcomeFuture<Fut>
where
    F: Fn(A) -> Fut,
    Fut: Future,
    Fut::Output: IntoOutcome,
{
    move |args| match panic::catch_unwind(AssertUnwindSafe(|| f(args))) {
        Ok(future) => OutcomeFuture::new(future),
        Err(payload) => OutcomeFuture::failed(coerce_panic(payload)),
    }
}
