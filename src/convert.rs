//! Conversion helpers between `Result` and [`Outcome`].
//!
//! These adapters make it straightforward to adopt `error-trail` gradually:
//! wrap an existing `Result` on the way in, and hand a plain `Result` back to
//! APIs (or `?`) on the way out.
//!
//! # Examples
//!
//! ```
//! use error_trail::convert::*;
//! use error_trail::Outcome;
//!
//! let outcome = result_to_outcome("7".parse::<u8>());
//! assert_eq!(outcome.data(), Some(&7));
//!
//! let back = outcome_to_result(outcome);
//! assert_eq!(back.ok(), Some(7));
//!
//! let failed: Outcome<u8> = "x".parse::<u8>().into();
//! assert!(outcome_to_result(failed).is_err());
//! ```

use core::error::Error;

use crate::traits::IntoOutcome;
use crate::types::{ChainedError, Outcome};

/// Converts a `Result` into an [`Outcome`].
///
/// `Err` values go through [`err`](crate::err), so a `ChainedError` is
/// extended rather than nested.
#[track_caller]
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T>
where
    E: Error + Send + Sync + 'static,
{
    result.into_outcome()
}

/// Converts an [`Outcome`] into a `Result` carrying the chain.
///
/// # Examples
///
/// ```
/// use error_trail::convert::outcome_to_result;
/// use error_trail::{err, ChainedError, Outcome};
/// use std::io;
///
/// fn read() -> Result<u32, ChainedError> {
///     let outcome: Outcome<u32> = err(io::Error::other("short read"));
///     let value = outcome_to_result(outcome)?;
///     Ok(value)
/// }
///
/// assert_eq!(read().unwrap_err().message(), "short read");
/// ```
#[inline]
pub fn outcome_to_result<T>(outcome: Outcome<T>) -> Result<T, ChainedError> {
    outcome.into_result()
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Error + Send + Sync + 'static,
{
    #[track_caller]
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        result.into_outcome()
    }
}

impl<T> From<Outcome<T>> for Result<T, ChainedError> {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}
