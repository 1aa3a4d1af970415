//! Tracing integration for error-trail.
//!
//! Records the active `tracing` span in a failure chain: on failure, a
//! [`SpanError`] naming the span is appended as a new cause.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-trail = { version = "0.1", features = ["tracing"] }
//! ```

use core::error::Error;
use core::fmt::{self, Display};

use tracing::Span;

use crate::types::alloc_type::String;
use crate::types::{ChainInput, ChainedError, Outcome};

/// Name recorded on the marker left when a span frame is added.
pub const IN_SPAN: &str = "in_span";

/// Cause naming the span a failure passed through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanError {
    span: String,
}

impl SpanError {
    /// Captures the name of `span`, or `"unknown"` for a disabled span.
    pub fn new(span: &Span) -> Self {
        let name = span.metadata().map(|m| m.name()).unwrap_or("unknown");
        Self { span: String::from(name) }
    }

    /// The captured span name.
    #[inline]
    pub fn span_name(&self) -> &str {
        &self.span
    }
}

impl Display for SpanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "in span '{}'", self.span)
    }
}

impl Error for SpanError {}

#[track_caller]
fn with_span_frame(chain: ChainedError, span: &Span) -> ChainedError {
    ChainedError::new_from_operation(
        IN_SPAN,
        [ChainInput::Chain(chain), ChainInput::new(SpanError::new(span))],
    )
}

/// Extension trait recording a span in an [`Outcome`]'s failure chain.
///
/// # Example
///
/// ```rust
/// use error_trail::tracing_ext::OutcomeSpanExt;
/// use error_trail::err;
/// use std::io;
///
/// let outcome = err::<()>(io::Error::other("write failed")).in_current_span();
/// assert_eq!(outcome.error().unwrap().cause_count(), 2);
/// ```
pub trait OutcomeSpanExt<T> {
    /// Appends the current span to a failure.
    fn in_current_span(self) -> Outcome<T>;

    /// Appends `span` to a failure.
    fn in_span(self, span: &Span) -> Outcome<T>;
}

impl<T> OutcomeSpanExt<T> for Outcome<T> {
    #[track_caller]
    fn in_current_span(self) -> Outcome<T> {
        self.in_span(&Span::current())
    }

    #[track_caller]
    fn in_span(self, span: &Span) -> Outcome<T> {
        match self {
            Outcome::Success(data) => Outcome::Success(data),
            Outcome::Failure(chain) => Outcome::Failure(with_span_frame(chain, span)),
        }
    }
}

#[cfg(feature = "async")]
pub use self::future::{FutureOutcomeSpanExt, SpanOutcomeFuture};

#[cfg(feature = "async")]
mod future {
    use core::future::Future;
    use core::pin::Pin;
    use core::task::{Context, Poll};

    use pin_project_lite::pin_project;
    use tracing::Span;

    use crate::types::Outcome;

    /// Extension trait for futures that records a span on failure.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use error_trail::tracing_ext::FutureOutcomeSpanExt;
    /// use tracing::Instrument;
    ///
    /// let outcome = fetch_user(id)
    ///     .into_outcome()
    ///     .with_span_frame()
    ///     .instrument(tracing::info_span!("fetch_user"))
    ///     .await;
    /// ```
    pub trait FutureOutcomeSpanExt<T>: Future<Output = Outcome<T>> + Sized {
        /// Records the span current at the time of this call on failure.
        fn with_span_frame(self) -> SpanOutcomeFuture<Self> {
            SpanOutcomeFuture { inner: self, span: Span::current() }
        }

        /// Records `span` on failure.
        fn with_span(self, span: Span) -> SpanOutcomeFuture<Self> {
            SpanOutcomeFuture { inner: self, span }
        }
    }

    impl<F, T> FutureOutcomeSpanExt<T> for F where F: Future<Output = Outcome<T>> {}

    pin_project! {
        /// Future wrapper that records a span on failure.
        ///
        /// Created by [`FutureOutcomeSpanExt::with_span_frame`] or
        /// [`FutureOutcomeSpanExt::with_span`].
        #[must_use = "futures do nothing unless polled"]
        pub struct SpanOutcomeFuture<F> {
            #[pin]
            inner: F,
            span: Span,
        }
    }

    impl<F, T> Future for SpanOutcomeFuture<F>
    where
        F: Future<Output = Outcome<T>>,
    {
        type Output = Outcome<T>;

        fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
            let this = self.project();

            match this.inner.poll(cx) {
                Poll::Ready(Outcome::Failure(chain)) => {
                    Poll::Ready(Outcome::Failure(super::with_span_frame(chain, this.span)))
                },
                other => other,
            }
        }
    }
}
