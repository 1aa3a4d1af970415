//! Async prelude - all async utilities in one import.
//!
//! This module re-exports everything from the sync [`prelude`](crate::prelude)
//! plus the async adapter and combinators.
//!
//! # Usage
//!
//! ```
//! use error_trail::prelude_async::*;
//! use std::io;
//!
//! async fn fetch(id: u32) -> Result<String, io::Error> {
//!     if id == 0 {
//!         return Err(io::Error::other("unknown id"));
//!     }
//!     Ok(format!("record-{id}"))
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let records = partition_results_all((0..3).map(|id| fetch(id).into_outcome())).await;
//! assert_eq!(records.data(), &["record-1", "record-2"]);
//! assert_eq!(records.errors().map(|e| e.len()), Some(1));
//! # }
//! ```
//!
//! # What's Included
//!
//! ## From Sync Prelude
//!
//! - **Constructors**: [`ok`], [`err`]
//! - **Adapters**: [`with_result`], [`with_result_in`]
//! - **Types**: [`Outcome`], [`ChainedError`], [`PartitionedResults`]
//! - **Traits**: [`IntoOutcome`]
//!
//! ## Async-Specific
//!
//! - **Traits**: [`FutureOutcomeExt`](crate::async_ext::FutureOutcomeExt) - `.into_outcome()` for futures
//! - **Types**: [`OutcomeFuture`](crate::async_ext::OutcomeFuture)
//! - **Functions**: [`with_result_async`], [`partition_results_future`], [`partition_results_all`]

// Re-export everything from sync prelude
pub use crate::prelude::*;

// Async-specific exports
#[cfg(feature = "async")]
pub use crate::async_ext::{
    partition_results_all, partition_results_future, with_result_async, FutureOutcomeExt,
    OutcomeFuture,
};
