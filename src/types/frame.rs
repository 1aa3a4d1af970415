//! A single entry in a [`ChainedError`](crate::ChainedError).
//!
//! Frames are either *causes* (errors a caller supplied) or *bookkeeping*
//! frames the chain records for itself: anonymous checkpoints marking where a
//! failure re-entered [`err`](crate::err), and operation markers left by
//! operators such as [`Outcome::map_err`](crate::Outcome::map_err). Only
//! causes are visible through [`ChainedError::frames`](crate::ChainedError::frames).

use alloc::boxed::Box;
#[cfg(not(feature = "std"))]
use alloc::string::ToString;
use alloc::sync::Arc;
use core::any::type_name;
use core::error::Error;
use core::fmt::{self, Display};
use core::panic::Location;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::alloc_type::{Cow, String};
use crate::types::trace::Trace;

/// Message carried by anonymous checkpoint frames.
pub const ANONYMOUS_MESSAGE: &str = "Anonymous err() return";

/// Distinguishes caller-supplied causes from the chain's own bookkeeping.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameKind {
    /// An error supplied by the caller.
    Cause,
    /// An anonymous frame marking a chain-extension point.
    Checkpoint,
    /// A marker left by the named operator.
    Operation(Cow<'static, str>),
}

impl FrameKind {
    /// Returns `true` for frames that exist only as bookkeeping.
    #[inline]
    pub fn is_bookkeeping(&self) -> bool {
        !matches!(self, Self::Cause)
    }
}

/// One error in a chain, with the identity it presents to error consumers.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct Frame {
    pub(crate) kind: FrameKind,
    pub(crate) name: String,
    pub(crate) message: String,
    pub(crate) trace: Trace,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) error: Option<Arc<dyn Error + Send + Sync + 'static>>,
}

impl Frame {
    /// Wraps a caller-supplied error as a cause frame.
    ///
    /// The frame's trace starts at the caller's location.
    #[track_caller]
    pub fn cause<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        let name = String::from(short_type_name(type_name::<E>()));
        let message = error.to_string();
        Self::build(FrameKind::Cause, name, message, Some(Arc::new(error)))
    }

    /// Wraps a boxed error trait object as a cause frame.
    #[track_caller]
    pub fn from_boxed(error: Box<dyn Error + Send + Sync + 'static>) -> Self {
        let message = error.to_string();
        Self::build(FrameKind::Cause, String::from("Error"), message, Some(Arc::from(error)))
    }

    /// Creates an anonymous checkpoint frame.
    #[track_caller]
    pub fn checkpoint() -> Self {
        Self::build(
            FrameKind::Checkpoint,
            String::from("Error"),
            String::from(ANONYMOUS_MESSAGE),
            None,
        )
    }

    /// Creates the marker left by the operator `operation`.
    #[track_caller]
    pub fn operation(operation: impl Into<Cow<'static, str>>) -> Self {
        let operation = operation.into();
        let message = String::from(operation.as_ref());
        Self::build(FrameKind::Operation(operation), String::from("Operation"), message, None)
    }

    #[track_caller]
    fn build(
        kind: FrameKind,
        name: String,
        message: String,
        error: Option<Arc<dyn Error + Send + Sync + 'static>>,
    ) -> Self {
        let header = alloc::format!("{}: {}", name, message);
        let trace = match kind {
            FrameKind::Operation(_) => Trace::at(&header, Location::caller()),
            _ => Trace::capture(&header, Location::caller()),
        };
        Self { kind, name, message, trace, error }
    }

    /// Returns the frame kind.
    #[inline]
    pub fn kind(&self) -> &FrameKind {
        &self.kind
    }

    /// Returns `true` when the frame is a caller-supplied cause.
    #[inline]
    pub fn is_cause(&self) -> bool {
        matches!(self.kind, FrameKind::Cause)
    }

    /// Returns `true` when the frame is chain bookkeeping.
    #[inline]
    pub fn is_bookkeeping(&self) -> bool {
        self.kind.is_bookkeeping()
    }

    /// Short type name of the wrapped error (e.g. `ParseIntError`).
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The wrapped error's display text.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Header, creation site and (when enabled) the cleaned backtrace.
    ///
    /// The backtrace is resolved on the first call.
    #[inline]
    pub fn trace(&self) -> &str {
        self.trace.as_str()
    }

    /// The wrapped error, if this frame carries one.
    ///
    /// Bookkeeping frames and frames restored through `serde` carry none.
    #[inline]
    pub fn error(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.error.as_deref()
    }

    /// Attempts to view the wrapped error as a concrete type.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.error.as_deref().and_then(|error| error.downcast_ref::<E>())
    }
}

impl PartialEq for Frame {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.name == other.name && self.message == other.message
    }
}

impl Eq for Frame {}

impl Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for Frame {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.error.as_deref().and_then(|error| error.source())
    }
}

/// Strips module paths from a type name, keeping generic arguments off.
///
/// `core::num::error::ParseIntError` becomes `ParseIntError` and
/// `alloc::boxed::Box<dyn Error>` becomes `Box`.
pub(crate) fn short_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
