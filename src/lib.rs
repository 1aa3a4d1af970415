//! Typed success/failure outcomes whose failures carry a causal error chain.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `error_trail::*` or pick focused pieces as needed.
//!
//! - [`Outcome`] is built with [`ok`] / [`err`] and composed with
//!   [`Outcome::map_err`] and [`Outcome::and_then`].
//! - [`ChainedError`] owns the ordered causes a failure accumulated.
//! - [`with_result`] turns fallible or panicking functions into
//!   `Outcome`-returning ones.
//! - [`partition_results`] splits a batch into collected data and one
//!   combined failure.
//!
//! # Examples
//!
//! ## Extending a failure
//!
//! ```
//! use error_trail::{err, Outcome};
//! use std::io;
//!
//! let outcome: Outcome<u32> = err(io::Error::other("connection refused"))
//!     .map_err(|cause| io::Error::other(format!("fetching profile: {cause}")));
//!
//! let chain = outcome.error().unwrap();
//! assert_eq!(chain.cause_count(), 2);
//! assert_eq!(chain.message(), "connection refused");
//! assert_eq!(
//!     chain.to_string(),
//!     "fetching profile: connection refused -> connection refused"
//! );
//! ```
//!
//! ## Wrapping a function
//!
//! ```
//! use error_trail::with_result;
//!
//! let port = with_result(|raw: &str| raw.parse::<u16>());
//! assert_eq!(port("443").unwrap_or(0), 443);
//! assert_eq!(port("https").unwrap_or(0), 0);
//! ```
//!
//! ## Partitioning a batch
//!
//! ```
//! use error_trail::{err, ok, partition_results, PartitionedErrors};
//! use std::io;
//!
//! let partitioned = partition_results(vec![
//!     ok("a"),
//!     err(io::Error::other("b missing")),
//!     err(io::Error::other("c missing")),
//! ]);
//!
//! assert_eq!(partitioned.data(), &["a"]);
//! match partitioned.errors() {
//!     Some(PartitionedErrors::Aggregate(aggregate)) => {
//!         assert_eq!(aggregate.to_string(), "2 errors occurred: b missing; c missing");
//!     },
//!     other => panic!("expected an aggregate, got {other:?}"),
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between `Result` and `Outcome`
pub mod convert;
/// Deprecated `success` / `failure` aliases
pub mod legacy;
/// Chain building and early-return macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Conversion traits used by the adapters
pub mod traits;
/// Outcome, ChainedError, frame and partition types
pub mod types;

/// Panic-catching wrapping adapter (requires `std` feature)
#[cfg(feature = "std")]
pub mod wrap;

/// Async adapter and combinators (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

/// Tracing span integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use convert::*;
pub use traits::*;
pub use types::{
    err,
    error_formatter::{ChainFormatBuilder, ChainFormatConfig, ChainFormatter, ChainLayout},
    ok, partition_results, AggregateError, ChainInput, ChainedError, Checkpoints, ErrorVec, Frame,
    FrameKind, Frames, Outcome, PartitionedErrors, PartitionedResults,
};

#[cfg(feature = "std")]
pub use wrap::{catch_outcome, with_result, with_result_in, UnknownError};

#[cfg(feature = "async")]
pub use async_ext::{partition_results_all, partition_results_future, with_result_async};
