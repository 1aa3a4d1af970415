//! Chain, frame, outcome and partition types.
//!
//! # Examples
//!
//! ```
//! use error_trail::{err, ok, Outcome};
//! use std::num::ParseIntError;
//!
//! fn parse(input: &str) -> Outcome<i32> {
//!     match input.parse::<i32>() {
//!         Ok(value) => ok(value),
//!         Err(e) => err(e),
//!     }
//! }
//!
//! let failed = parse("x").map_err(|_| std::io::Error::other("bad config value"));
//! let chain = failed.error().unwrap();
//! assert_eq!(chain.cause_count(), 2);
//! assert!(chain.downcast_ref::<ParseIntError>().is_some());
//! println!("{}", chain.error_chain());
//! // Output: bad config value -> invalid digit found in string
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod chained_error;
pub mod error_formatter;
pub mod frame;
pub mod outcome;
pub mod partition;
pub mod trace;

pub use chained_error::*;
pub use frame::*;
pub use outcome::*;
pub use partition::*;

/// SmallVec-backed collection used for chain frames.
///
/// Uses inline storage for up to 2 elements to avoid heap allocations
/// for the common single-cause chain plus one checkpoint.
pub type ErrorVec<E> = SmallVec<[E; 2]>;
