//! Conversion traits shared by the wrapping adapter and the macros.
//!
//! - [`IntoOutcome`]: anything a wrapped function may return that can be
//!   turned into an [`Outcome`](crate::Outcome).
//!
//! # Examples
//!
//! ```
//! use error_trail::traits::IntoOutcome;
//!
//! let parsed = "42".parse::<i32>().into_outcome();
//! assert_eq!(parsed.data(), Some(&42));
//!
//! let failed = "x".parse::<i32>().into_outcome();
//! assert_eq!(failed.error().unwrap().cause_count(), 1);
//! ```

pub mod into_outcome;

pub use into_outcome::IntoOutcome;
