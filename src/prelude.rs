//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use error_trail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Constructors**: [`ok`], [`err`]
//! - **Adapters**: [`with_result`], [`with_result_in`] (with `std`)
//! - **Combinators**: [`partition_results`]
//! - **Macros**: [`chain!`], [`try_outcome!`]
//! - **Types**: [`Outcome`], [`ChainedError`], [`ChainInput`], [`Frame`], [`PartitionedResults`]
//! - **Traits**: [`IntoOutcome`]
//!
//! # Examples
//!
//! ```
//! use error_trail::prelude::*;
//! use std::fs;
//!
//! let read = with_result(|path: &str| fs::read_to_string(path));
//!
//! let loaded = read("definitely/missing/config.toml")
//!     .map_err(|cause| std::io::Error::other(format!("loading configuration: {cause}")))
//!     .and_then(|text| text.len());
//!
//! assert!(loaded.is_failure());
//! assert_eq!(loaded.error().unwrap().cause_count(), 2);
//! ```

// Macros
pub use crate::{chain, try_outcome};

// Core types
pub use crate::types::partition::{partition_results, PartitionedErrors, PartitionedResults};
pub use crate::types::{err, ok, ChainInput, ChainedError, Frame, Outcome};

// Traits
pub use crate::traits::IntoOutcome;

// Adapters
#[cfg(feature = "std")]
pub use crate::wrap::{with_result, with_result_in};
