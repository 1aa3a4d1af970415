//! Adapter turning fallible or panicking calls into [`Outcome`]s.
//!
//! [`with_result`] wraps a function so that every call returns an
//! [`Outcome`]: an `Ok` becomes [`ok`](crate::ok), an `Err` goes through
//! [`err`](crate::err), and a panic raised during the call is caught and
//! coerced into a failure. Panics are recovered only here; nothing else in the
//! crate catches them.
//!
//! Panic payloads are coerced as follows:
//!
//! - the chain behind an [`Outcome::unwrap`] panic, or a [`ChainedError`]
//!   payload, is extended by one checkpoint, keeping its causes;
//! - a `Box<dyn Error + Send + Sync>` becomes a cause frame;
//! - anything else, including string panics, becomes [`UnknownError`]. The
//!   original payload is dropped.
//!
//! Functions taking several arguments are wrapped over a tuple.
//!
//! # Examples
//!
//! ```
//! use error_trail::with_result;
//!
//! let parse = with_result(|input: &str| input.parse::<u16>());
//!
//! assert_eq!(parse("8080").data(), Some(&8080));
//! assert!(parse("http").is_failure());
//! ```

use alloc::boxed::Box;
use core::any::Any;
use core::error::Error;
use core::fmt::{self, Display};
use std::panic::{self, AssertUnwindSafe};

use crate::traits::IntoOutcome;
use crate::types::chained_error::ChainedError;
use crate::types::outcome::{take_raised, Outcome, UNWRAP_PANIC_PREFIX};

/// Message of the error substituted for panic payloads that are not errors.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// Error standing in for a panic payload that carried no error value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnknownError;

impl Display for UnknownError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(UNKNOWN_ERROR_MESSAGE)
    }
}

impl Error for UnknownError {}

/// Runs `f` once, converting its return value or panic into an [`Outcome`].
///
/// # Examples
///
/// ```
/// use error_trail::wrap::catch_outcome;
/// use std::convert::Infallible;
///
/// let caught = catch_outcome(|| -> Result<(), Infallible> { panic!("lost") });
/// assert_eq!(caught.error().unwrap().message(), "Unknown error");
/// ```
pub fn catch_outcome<F, R>(f: F) -> Outcome<R::Output>
where
    F: FnOnce() -> R,
    R: IntoOutcome,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(returned) => returned.into_outcome(),
        Err(payload) => Outcome::Failure(coerce_panic(payload)),
    }
}

/// Wraps `f` so every call returns an [`Outcome`].
///
/// `f` may return a `Result<T, E>` or an `Outcome<T>`. A panic inside `f` is
/// caught and coerced into a failure.
///
/// # Examples
///
/// ```
/// use error_trail::with_result;
/// use std::io;
///
/// let divide = with_result(|(a, b): (i32, i32)| {
///     if b == 0 {
///         Err(io::Error::other("division by zero"))
///     } else {
///         Ok(a / b)
///     }
/// });
///
/// assert_eq!(divide((10, 2)).unwrap_or(0), 5);
/// assert_eq!(divide((1, 0)).error().unwrap().message(), "division by zero");
/// ```
pub fn with_result<F, A, R>(f: F) -> impl Fn(A) -> Outcome<R::Output>
where
    F: Fn(A) -> R,
    R: IntoOutcome,
{
    move |args| catch_outcome(|| f(args))
}

/// Wraps `f` together with the invocation context it is called with.
///
/// The returned function owns `context` and passes it by reference to every
/// call of `f`.
///
/// # Examples
///
/// ```
/// use error_trail::with_result_in;
/// use std::num::ParseIntError;
///
/// struct Limits {
///     max: u32,
/// }
///
/// let clamp = with_result_in(Limits { max: 100 }, |limits, input: &str| {
///     Ok::<_, ParseIntError>(input.parse::<u32>()?.min(limits.max))
/// });
///
/// assert_eq!(clamp("250").data(), Some(&100));
/// assert!(clamp("-1").is_failure());
/// ```
pub fn with_result_in<C, F, A, R>(context: C, f: F) -> impl Fn(A) -> Outcome<R::Output>
where
    F: Fn(&C, A) -> R,
    R: IntoOutcome,
{
    move |args| catch_outcome(|| f(&context, args))
}

/// Converts a caught panic payload into a chain.
pub(crate) fn coerce_panic(payload: Box<dyn Any + Send + 'static>) -> ChainedError {
    if let Some(chain) = unwrapped_chain(&*payload) {
        #[cfg(feature = "tracing")]
        tracing::debug!(error = %chain, "recovered chained error from unwrap panic");
        return ChainedError::from_existing(chain);
    }

    let payload = match payload.downcast::<ChainedError>() {
        Ok(chain) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(error = %chain, "recovered chained error from panic");
            return ChainedError::from_existing(*chain);
        },
        Err(payload) => payload,
    };

    match payload.downcast::<Box<dyn Error + Send + Sync + 'static>>() {
        Ok(error) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(error = %error, "recovered boxed error from panic");
            ChainedError::from_boxed(*error)
        },
        Err(_payload) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                payload = panic_message(&*_payload).unwrap_or("<non-string payload>"),
                "coerced panic payload into unknown error"
            );
            ChainedError::from_error(UnknownError)
        },
    }
}

fn unwrapped_chain(payload: &(dyn Any + Send)) -> Option<ChainedError> {
    let message = payload.downcast_ref::<String>()?;
    if !message.starts_with(UNWRAP_PANIC_PREFIX) {
        return None;
    }
    take_raised(message)
}

#[cfg(feature = "tracing")]
fn panic_message(payload: &(dyn Any + Send)) -> Option<&str> {
    payload
        .downcast_ref::<&'static str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
}
