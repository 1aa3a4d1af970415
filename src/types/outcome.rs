//! Typed success/failure value whose failures always carry a [`ChainedError`].
//!
//! [`Outcome`] is constructed with [`ok`] and [`err`] and composed with
//! [`map_err`](Outcome::map_err) (extend the failure chain) and
//! [`and_then`](Outcome::and_then) (transform the success, skipping failures).
//! Every operator returns a new value; nothing is mutated in place.
//!
//! # Examples
//!
//! ```
//! use error_trail::{err, ok, Outcome};
//! use std::io;
//!
//! let doubled = ok(21).and_then(|n| n * 2);
//! assert_eq!(doubled.unwrap_or(0), 42);
//!
//! let failed: Outcome<i32> = err(io::Error::other("connection reset"))
//!     .map_err(|cause| io::Error::other(format!("fetch failed: {cause}")));
//! assert_eq!(failed.unwrap_or(0), 0);
//! ```

use core::error::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "std")]
use crate::types::alloc_type::String;
use crate::types::chained_error::{ChainInput, ChainedError};
use crate::types::frame::Frame;

/// Name recorded on the marker `map_err` leaves in a chain.
pub const MAP_ERR: &str = "map_err";

/// A success payload or a chained failure.
///
/// Exactly one of [`data`](Outcome::data) / [`error`](Outcome::error) is
/// present.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Success(T),
    Failure(ChainedError),
}

/// Wraps `data` as a success.
#[inline]
pub fn ok<T>(data: T) -> Outcome<T> {
    Outcome::Success(data)
}

/// Wraps `error` as a failure.
///
/// An error that already is a [`ChainedError`] is extended with an anonymous
/// checkpoint; any other error starts a new chain.
///
/// # Examples
///
/// ```
/// use error_trail::err;
/// use std::io;
///
/// let first = err::<()>(io::Error::other("timeout"));
/// let again = err::<()>(first.into_error().unwrap());
///
/// let chain = again.error().unwrap();
/// assert_eq!(chain.cause_count(), 1);
/// assert_eq!(chain.checkpoints().count(), 1);
/// ```
#[track_caller]
pub fn err<T>(error: impl Error + Send + Sync + 'static) -> Outcome<T> {
    match ChainInput::new(error) {
        ChainInput::Chain(chain) => Outcome::Failure(ChainedError::from_existing(chain)),
        input => Outcome::Failure(ChainedError::merge([input])),
    }
}

impl<T> Outcome<T> {
    /// Returns `true` for a success.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for a failure.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The success payload, if any.
    #[inline]
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    /// The failure chain, if any.
    #[inline]
    pub fn error(&self) -> Option<&ChainedError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Consumes the outcome, returning the success payload.
    #[inline]
    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    /// Consumes the outcome, returning the failure chain.
    #[inline]
    pub fn into_error(self) -> Option<ChainedError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts to a standard `Result` for use with `?`.
    #[inline]
    pub fn into_result(self) -> Result<T, ChainedError> {
        match self {
            Self::Success(data) => Ok(data),
            Self::Failure(error) => Err(error),
        }
    }

    /// Returns the success payload.
    ///
    /// # Panics
    ///
    /// Panics on a failure with a message naming the chain's causes. With the
    /// `std` feature the chain is also parked for the panicking thread, so the
    /// wrapping adapter ([`with_result`](crate::with_result)) recovers it
    /// unchanged.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Success(data) => data,
            Self::Failure(error) => raise(error),
        }
    }

    /// Returns the success payload or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(data) => data,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success payload or computes one from the failure.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(ChainedError) -> T,
    {
        match self {
            Self::Success(data) => data,
            Self::Failure(error) => f(error),
        }
    }

    /// Extends a failure's chain with the error `f` derives from it.
    ///
    /// `f` receives the most recent cause (not the chain wrapper). On success
    /// this is a no-op and `f` is not called. A panic inside `f` propagates.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_trail::err;
    /// use std::io;
    ///
    /// let failed = err::<()>(io::Error::other("read failed"))
    ///     .map_err(|cause| io::Error::other(format!("loading config: {cause}")));
    ///
    /// let chain = failed.error().unwrap();
    /// let messages: Vec<_> = chain.frames().map(|f| f.message()).collect();
    /// assert_eq!(messages, ["read failed", "loading config: read failed"]);
    /// ```
    #[track_caller]
    pub fn map_err<F, E2>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(&Frame) -> E2,
        E2: Error + Send + Sync + 'static,
    {
        match self {
            Self::Success(data) => Self::Success(data),
            Self::Failure(chain) => {
                let mapped = ChainInput::new(f(chain.current()));
                Self::Failure(ChainedError::new_from_operation(
                    MAP_ERR,
                    [ChainInput::Chain(chain), mapped],
                ))
            },
        }
    }

    /// Transforms a success payload; failures pass through untouched and `f`
    /// is never called for them.
    #[inline]
    pub fn and_then<N, F>(self, f: F) -> Outcome<N>
    where
        F: FnOnce(T) -> N,
    {
        match self {
            Self::Success(data) => ok(f(data)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }
}

/// Prefix of the panic message raised by [`Outcome::unwrap`].
pub const UNWRAP_PANIC_PREFIX: &str = "called `Outcome::unwrap()` on a failure: ";

#[cfg(feature = "std")]
std::thread_local! {
    static RAISED: core::cell::RefCell<Option<(String, ChainedError)>> =
        const { core::cell::RefCell::new(None) };
}

#[cfg(feature = "std")]
#[track_caller]
fn raise(error: ChainedError) -> ! {
    let message = alloc::format!("{}{}", UNWRAP_PANIC_PREFIX, error);
    RAISED.with(|slot| *slot.borrow_mut() = Some((message.clone(), error)));
    std::panic::panic_any(message)
}

#[cfg(not(feature = "std"))]
#[track_caller]
fn raise(error: ChainedError) -> ! {
    panic!("{}{}", UNWRAP_PANIC_PREFIX, error)
}

/// Takes the chain parked by the `unwrap` panic whose message is `message`.
///
/// Returns `None` for any other panic message; a parked chain that does not
/// match is left in place.
#[cfg(feature = "std")]
pub(crate) fn take_raised(message: &str) -> Option<ChainedError> {
    RAISED.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.as_ref().is_some_and(|(raised, _)| raised == message) {
            slot.take().map(|(_, chain)| chain)
        } else {
            None
        }
    })
}
