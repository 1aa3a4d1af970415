//! Macros for building chains and propagating failures.
//!
//! - [`macro@crate::chain`] - Merges several errors into one
//!   [`ChainedError`](crate::ChainedError), flattening any that already are
//!   chains.
//! - [`macro@crate::try_outcome`] - Unwraps a success or returns the failure
//!   from the enclosing function through [`err`](crate::err).
//!
//! # Examples
//!
//! ```
//! use error_trail::{chain, try_outcome, ok, Outcome};
//! use std::io;
//!
//! fn double(raw: &str) -> Outcome<i64> {
//!     let value = try_outcome!(raw.parse::<i64>());
//!     ok(value * 2)
//! }
//!
//! assert_eq!(double("21").data(), Some(&42));
//! assert!(double("x").is_failure());
//!
//! let merged = chain!(io::Error::other("socket closed"), io::Error::other("retry exhausted"));
//! assert_eq!(merged.cause_count(), 2);
//! ```

/// Merges errors into one [`ChainedError`](crate::ChainedError).
///
/// Each argument is classified with [`ChainInput::new`](crate::ChainInput::new):
/// chains contribute all of their frames, any other error contributes one
/// cause. The chain's identity is taken from the first argument.
///
/// # Examples
///
/// ```
/// use error_trail::{chain, ChainedError};
/// use std::io;
///
/// let first = ChainedError::from_error(io::Error::other("disk full"));
/// let merged = chain!(first, io::Error::other("flush failed"));
///
/// let messages: Vec<_> = merged.frames().map(|f| f.message()).collect();
/// assert_eq!(messages, ["disk full", "flush failed"]);
/// assert_eq!(merged.message(), "disk full");
/// ```
#[macro_export]
macro_rules! chain {
    ($($error:expr),+ $(,)?) => {
        $crate::ChainedError::merge([$($crate::ChainInput::new($error)),+])
    };
}

/// Unwraps a success, or returns early with the failure.
///
/// Accepts anything implementing [`IntoOutcome`](crate::traits::IntoOutcome):
/// a `Result` with an error type, or an [`Outcome`](crate::Outcome). The
/// failure is returned through [`err`](crate::err), so an existing chain is
/// extended with a checkpoint rather than nested. The enclosing function must
/// return an `Outcome`.
///
/// # Examples
///
/// ```
/// use error_trail::{err, ok, try_outcome, Outcome};
/// use std::io;
///
/// fn connect(host: &str) -> Outcome<u16> {
///     if host.is_empty() {
///         return err(io::Error::other("empty host"));
///     }
///     ok(5432)
/// }
///
/// fn open(host: &str) -> Outcome<String> {
///     let port = try_outcome!(connect(host));
///     ok(format!("{host}:{port}"))
/// }
///
/// assert_eq!(open("db").data().map(String::as_str), Some("db:5432"));
///
/// let failed = open("");
/// let chain = failed.error().unwrap();
/// assert_eq!(chain.cause_count(), 1);
/// assert_eq!(chain.message(), "empty host");
/// ```
#[macro_export]
macro_rules! try_outcome {
    ($expr:expr $(,)?) => {
        match $crate::traits::IntoOutcome::into_outcome($expr) {
            $crate::Outcome::Success(value) => value,
            $crate::Outcome::Failure(error) => return $crate::err(error),
        }
    };
}
