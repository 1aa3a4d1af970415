//! Fan-in of many outcomes into collected data and one combined failure.
//!
//! [`partition_results`] walks a batch of [`Outcome`]s in order, collecting
//! every success payload and every failure chain. No input short-circuits the
//! batch. The failures collapse into `None` (none seen), a single chain (one
//! seen), or an [`AggregateError`] preserving their order (several seen).
//!
//! The async forms live in [`async_ext`](crate::async_ext) behind the `async`
//! feature.
//!
//! # Examples
//!
//! ```
//! use error_trail::{err, ok, partition_results, PartitionedErrors};
//! use std::io;
//!
//! let batch = vec![ok(1), err(io::Error::other("row 2 invalid")), ok(3)];
//! let partitioned = partition_results(batch);
//!
//! assert_eq!(partitioned.data(), &[1, 3]);
//! assert!(matches!(partitioned.errors(), Some(PartitionedErrors::Single(_))));
//! ```

use core::error::Error;
use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::alloc_type::Vec;
use crate::types::chained_error::ChainedError;
use crate::types::outcome::Outcome;

/// Error value wrapping several failures from one batch, in input order.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateError {
    errors: Vec<ChainedError>,
}

impl AggregateError {
    /// Wraps `errors`, keeping their order.
    #[inline]
    pub fn new(errors: Vec<ChainedError>) -> Self {
        Self { errors }
    }

    /// The wrapped failures in input order.
    #[inline]
    pub fn errors(&self) -> &[ChainedError] {
        &self.errors
    }

    /// Number of wrapped failures.
    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns `true` when no failures are wrapped.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterates over the wrapped failures.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, ChainedError> {
        self.errors.iter()
    }

    /// Consumes the aggregate, returning the wrapped failures.
    #[inline]
    pub fn into_errors(self) -> Vec<ChainedError> {
        self.errors
    }
}

impl Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} errors occurred", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            f.write_str(if i == 0 { ": " } else { "; " })?;
            Display::fmt(error, f)?;
        }
        Ok(())
    }
}

impl Error for AggregateError {}

impl<'a> IntoIterator for &'a AggregateError {
    type Item = &'a ChainedError;
    type IntoIter = core::slice::Iter<'a, ChainedError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The failures of one partitioned batch.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartitionedErrors {
    /// Exactly one failure was seen.
    Single(ChainedError),
    /// Two or more failures were seen.
    Aggregate(AggregateError),
}

impl PartitionedErrors {
    /// Number of failures represented.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Aggregate(aggregate) => aggregate.len(),
        }
    }

    /// Always `false`; a batch without failures has no `PartitionedErrors`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The failures in input order.
    #[inline]
    pub fn as_slice(&self) -> &[ChainedError] {
        match self {
            Self::Single(error) => core::slice::from_ref(error),
            Self::Aggregate(aggregate) => aggregate.errors(),
        }
    }

    /// Iterates over the failures in input order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, ChainedError> {
        self.as_slice().iter()
    }

    /// Consumes the value, returning the failures in input order.
    pub fn into_vec(self) -> Vec<ChainedError> {
        match self {
            Self::Single(error) => alloc::vec![error],
            Self::Aggregate(aggregate) => aggregate.into_errors(),
        }
    }
}

impl Display for PartitionedErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(error) => Display::fmt(error, f),
            Self::Aggregate(aggregate) => Display::fmt(aggregate, f),
        }
    }
}

impl Error for PartitionedErrors {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Single(error) => error.source(),
            Self::Aggregate(_) => None,
        }
    }
}

/// Success payloads and combined failures of one batch.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionedResults<T> {
    data: Vec<T>,
    errors: Option<PartitionedErrors>,
}

impl<T> PartitionedResults<T> {
    /// Builds a partition from collected payloads and failures.
    pub fn from_parts(data: Vec<T>, mut errors: Vec<ChainedError>) -> Self {
        let errors = match errors.len() {
            0 => None,
            1 => errors.pop().map(PartitionedErrors::Single),
            _ => Some(PartitionedErrors::Aggregate(AggregateError::new(errors))),
        };
        Self { data, errors }
    }

    /// Success payloads in input order.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Combined failures, if any were seen.
    #[inline]
    pub fn errors(&self) -> Option<&PartitionedErrors> {
        self.errors.as_ref()
    }

    /// Returns `true` when the batch held no failures.
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.errors.is_none()
    }

    /// Consumes the partition, returning `(data, errors)`.
    #[inline]
    pub fn into_parts(self) -> (Vec<T>, Option<PartitionedErrors>) {
        (self.data, self.errors)
    }
}

impl<T> FromIterator<Outcome<T>> for PartitionedResults<T> {
    fn from_iter<I: IntoIterator<Item = Outcome<T>>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut data = Vec::with_capacity(iter.size_hint().0);
        let mut errors = Vec::new();

        for outcome in iter {
            match outcome {
                Outcome::Success(value) => data.push(value),
                Outcome::Failure(error) => errors.push(error),
            }
        }

        Self::from_parts(data, errors)
    }
}

/// Partitions a batch of outcomes into collected data and combined failures.
///
/// Every input is consumed; payloads and failures keep their input order.
#[inline]
pub fn partition_results<T, I>(results: I) -> PartitionedResults<T>
where
    I: IntoIterator<Item = Outcome<T>>,
{
    results.into_iter().collect()
}
