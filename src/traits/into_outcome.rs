//! Trait for values that can be lifted into an [`Outcome`].
//!
//! # Implementations
//!
//! - `Result<T, E>` where `E` is an error: `Ok` becomes [`ok`], `Err` goes
//!   through [`err`] (so a `ChainedError` is extended, never nested).
//! - `Outcome<T>`: identity.
//!
//! A plain value can be returned as `Ok::<_, Infallible>(value)`.

use core::error::Error;

use crate::types::outcome::{err, ok, Outcome};

/// Converts a return value into an [`Outcome`].
///
/// # Examples
///
/// ```
/// use error_trail::{ok, traits::IntoOutcome};
/// use std::convert::Infallible;
///
/// assert_eq!(Ok::<_, Infallible>(7).into_outcome(), ok(7));
/// assert_eq!(ok("same").into_outcome(), ok("same"));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be converted into an `Outcome`",
    label = "this type does not implement `IntoOutcome`",
    note = "return a `Result<T, E>` with `E: Error + Send + Sync + 'static`, or an `Outcome<T>`"
)]
pub trait IntoOutcome {
    /// Success payload type.
    type Output;

    /// Converts `self` into an [`Outcome`].
    fn into_outcome(self) -> Outcome<Self::Output>;
}

impl<T, E> IntoOutcome for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    type Output = T;

    #[track_caller]
    #[inline]
    fn into_outcome(self) -> Outcome<T> {
        match self {
            Ok(value) => ok(value),
            Err(error) => err(error),
        }
    }
}

impl<T> IntoOutcome for Outcome<T> {
    type Output = T;

    #[inline]
    fn into_outcome(self) -> Outcome<T> {
        self
    }
}
