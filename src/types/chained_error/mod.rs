//! Error value that owns an ordered trail of causal frames.
//!
//! A [`ChainedError`] is built once and never mutated; every extension
//! (`from_existing`, `merge`, `new_from_operation`) produces a new chain that
//! copies the prior frame list. The wrapped error objects themselves are
//! shared immutably between copies.
//!
//! Chains keep two views of their frames:
//!
//! - [`frames`](ChainedError::frames) yields only causes, in insertion order
//!   (oldest first). This is the view callers and tests inspect.
//! - [`raw_frames`](ChainedError::raw_frames) also contains the bookkeeping
//!   frames recording where the chain was extended.
//!
//! # Examples
//!
//! ```
//! use error_trail::{ChainInput, ChainedError};
//! use std::io;
//!
//! let first = ChainedError::from_error(io::Error::other("disk full"));
//! let merged = ChainedError::merge([
//!     ChainInput::from(first),
//!     ChainInput::new(io::Error::other("write aborted")),
//! ]);
//!
//! let messages: Vec<_> = merged.frames().map(|f| f.message()).collect();
//! assert_eq!(messages, ["disk full", "write aborted"]);
//! assert_eq!(merged.message(), "disk full");
//! ```

use alloc::boxed::Box;
use core::error::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::alloc_type::{Cow, String};
use crate::types::frame::Frame;
use crate::types::trace::{self, Trace};
use crate::types::ErrorVec;

mod input;
mod iter;
mod traits;

pub use input::ChainInput;
pub use iter::{Checkpoints, Frames};

/// An error that owns an ordered sequence of causal error frames.
///
/// The chain presents the identity (`name`, `message`, `trace`) of the first
/// input it was built from, so generic error consumers see the original
/// failure first.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "ChainRepr"))]
#[derive(Debug, Clone)]
pub struct ChainedError {
    pub(crate) frames: ErrorVec<Frame>,
    pub(crate) name: String,
    pub(crate) message: String,
    pub(crate) trace: Trace,
}

impl ChainedError {
    /// Wraps a single error as a new chain whose causes are `[error]`.
    ///
    /// An error that already is a chain is flattened rather than nested.
    #[track_caller]
    pub fn from_error<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::merge([ChainInput::new(error)])
    }

    /// Wraps a boxed error trait object, unboxing a chain if it holds one.
    #[track_caller]
    pub fn from_boxed(error: Box<dyn Error + Send + Sync + 'static>) -> Self {
        Self::merge([ChainInput::from_boxed(error)])
    }

    /// Extends `existing` with one anonymous checkpoint frame.
    ///
    /// The checkpoint marks the point where a failure flowed on without a new
    /// cause; it is not visible through [`frames`](Self::frames).
    #[track_caller]
    pub fn from_existing(existing: ChainedError) -> Self {
        Self::merge([ChainInput::Chain(existing), ChainInput::Frame(Frame::checkpoint())])
    }

    /// Flattens `inputs` into one chain.
    ///
    /// Chains contribute all of their frames, plain errors one frame each.
    /// The identity is taken from the first input.
    ///
    /// With no inputs the chain holds exactly one anonymous checkpoint and
    /// takes its identity. Checkpoints are bookkeeping, so such a chain has
    /// `cause_count() == 0` and an empty [`frames`](Self::frames); the
    /// checkpoint is reachable through [`raw_frames`](Self::raw_frames) and
    /// [`current`](Self::current), and the chain displays as
    /// `"Anonymous err() return"`.
    #[track_caller]
    pub fn merge<I>(inputs: I) -> Self
    where
        I: IntoIterator<Item = ChainInput>,
    {
        let mut frames = ErrorVec::new();
        let mut identity: Option<(String, String, Trace)> = None;

        for input in inputs {
            match input {
                ChainInput::Chain(chain) => {
                    if identity.is_none() {
                        identity = Some((chain.name, chain.message, chain.trace));
                    }
                    frames.extend(chain.frames);
                },
                ChainInput::Frame(frame) => {
                    if identity.is_none() {
                        identity =
                            Some((frame.name.clone(), frame.message.clone(), frame.trace.clone()));
                    }
                    frames.push(frame);
                },
            }
        }

        let (name, message, trace) = match identity {
            Some(identity) => identity,
            None => {
                let anonymous = Frame::checkpoint();
                let identity =
                    (anonymous.name.clone(), anonymous.message.clone(), anonymous.trace.clone());
                frames.push(anonymous);
                identity
            },
        };

        Self { frames, name, message, trace }
    }

    /// Merges `inputs` and records that `operation` produced the result.
    ///
    /// Markers of recognised operators already in the merged frames are
    /// replaced by the new marker, so a chain carries at most one of them
    /// however many operators it went through.
    #[track_caller]
    pub fn new_from_operation<I>(operation: impl Into<Cow<'static, str>>, inputs: I) -> Self
    where
        I: IntoIterator<Item = ChainInput>,
    {
        let mut chain = Self::merge(inputs);
        trace::drop_recognized_operations(&mut chain.frames);
        chain.frames.push(Frame::operation(operation));
        chain
    }

    /// Iterates over the causal frames, oldest first.
    #[inline]
    pub fn frames(&self) -> Frames<'_> {
        Frames::new(&self.frames)
    }

    /// Number of causal frames.
    #[inline]
    pub fn cause_count(&self) -> usize {
        self.frames().count()
    }

    /// All frames including bookkeeping, oldest first.
    #[inline]
    pub fn raw_frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Iterates over the bookkeeping frames only.
    #[inline]
    pub fn checkpoints(&self) -> Checkpoints<'_> {
        Checkpoints::new(&self.frames)
    }

    /// The most recent causal frame, or the most recent frame of any kind
    /// when the chain holds no causes.
    pub fn current(&self) -> &Frame {
        self.frames
            .iter()
            .rev()
            .find(|frame| frame.is_cause())
            .or_else(|| self.frames.last())
            .expect("a chain always holds at least one frame")
    }

    /// The oldest causal frame.
    #[inline]
    pub fn root_cause(&self) -> Option<&Frame> {
        self.frames().next()
    }

    /// Name inherited from the first input.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Message inherited from the first input.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Trace inherited from the first input.
    #[inline]
    pub fn trace(&self) -> &str {
        self.trace.as_str()
    }

    /// Finds the newest cause whose wrapped error is an `E`.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.frames.iter().rev().find_map(|frame| frame.downcast_ref::<E>())
    }

    /// Returns a builder for customizing the chain formatting.
    #[must_use]
    #[inline]
    pub fn fmt(&self) -> crate::types::error_formatter::ChainFormatBuilder<'_> {
        crate::types::error_formatter::ChainFormatBuilder::new(self)
    }

    /// Formats the chain using a closure to configure the builder.
    #[must_use]
    pub fn format_with<F>(&self, f: F) -> String
    where
        F: FnOnce(
            crate::types::error_formatter::ChainFormatBuilder<'_>,
        ) -> crate::types::error_formatter::ChainFormatBuilder<'_>,
    {
        alloc::format!("{}", f(self.fmt()))
    }

    /// Formats the causes, newest first, with a custom formatter.
    #[must_use]
    pub fn error_chain_with<F>(&self, formatter: F) -> String
    where
        F: crate::types::error_formatter::ChainFormatter,
    {
        formatter.format_chain(self.frames().rev())
    }

    /// Returns the causal chain as a formatted string, newest cause first.
    #[must_use]
    pub fn error_chain(&self) -> String {
        alloc::format!("{}", self.fmt())
    }
}

/// Deserialization shape; restores the non-empty invariant on the way in.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct ChainRepr {
    frames: ErrorVec<Frame>,
    name: String,
    message: String,
    trace: Trace,
}

#[cfg(feature = "serde")]
impl From<ChainRepr> for ChainedError {
    fn from(repr: ChainRepr) -> Self {
        let ChainRepr { mut frames, name, message, trace } = repr;
        if frames.is_empty() {
            frames.push(Frame::checkpoint());
        }
        Self { frames, name, message, trace }
    }
}
