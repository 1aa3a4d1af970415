//! Extension trait for futures whose output can become an [`Outcome`].
//!
//! Provides `.into_outcome()`, the async counterpart of
//! [`IntoOutcome`](crate::traits::IntoOutcome).

use core::future::Future;

use crate::traits::IntoOutcome;

use super::outcome_future::OutcomeFuture;

/// Extension trait converting a future's output into an [`Outcome`](crate::Outcome).
///
/// Panics raised while the future is polled are caught and coerced into a
/// failure, as [`with_result`](crate::with_result) does for sync calls.
///
/// # Examples
///
/// ```rust
/// use error_trail::prelude_async::*;
/// use std::io;
///
/// async fn load() -> Result<u8, io::Error> {
///     Err(io::Error::other("unreachable host"))
/// }
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let outcome = load().into_outcome().await;
/// assert_eq!(outcome.error().unwrap().message(), "unreachable host");
/// # }
/// ```
pub trait FutureOutcomeExt: Future + Sized
where
    Self::Output: IntoOutcome,
{
    /// Wraps the future in an [`OutcomeFuture`].
    fn into_outcome(self) -> OutcomeFuture<Self>;
}

impl<Fut> FutureOutcomeExt for Fut
where
    Fut: Future,
    Fut::Output: IntoOutcome,
{
    #[inline]
    fn into_outcome(self) -> OutcomeFuture<Self> {
        OutcomeFuture::new(self)
    }
}
