//! Async extensions for error-trail.
//!
//! This module provides the async forms of the wrapping adapter and the
//! fan-in combinator. Any [`Future`](core::future::Future) is accepted; no
//! runtime is required by the crate itself.
//!
//! # Feature Flag
//!
//! Requires the `async` feature (enabled by default):
//!
//! ```toml
//! [dependencies]
//! error-trail = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```
//! use error_trail::prelude_async::*;
//! use std::num::ParseIntError;
//!
//! async fn parse_port(raw: &str) -> Result<u16, ParseIntError> {
//!     raw.parse()
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let ports = partition_results_all(vec![
//!     parse_port("80").into_outcome(),
//!     parse_port("http").into_outcome(),
//!     parse_port("443").into_outcome(),
//! ])
//! .await;
//!
//! assert_eq!(ports.data(), &[80, 443]);
//! assert!(ports.errors().is_some());
//! # }
//! ```

mod future_ext;
mod outcome_future;
mod partition;

pub use future_ext::FutureOutcomeExt;
pub use outcome_future::{with_result_async, OutcomeFuture};
pub use partition::{partition_results_all, partition_results_future};
