//! Trace capture and cleaning for chain frames.
//!
//! Every frame carries a textual trace: a header line (`"{name}: {message}"`),
//! the source location of the code that created the frame, and, when the
//! standard library backtrace is enabled through `RUST_BACKTRACE` or
//! `RUST_LIB_BACKTRACE`, the captured backtrace with the chain machinery's own
//! frames removed. Operation markers record their location only.
//!
//! # Examples
//!
//! ```
//! use error_trail::types::trace::clean_trace;
//!
//! let raw = "Error: boom\n   0: error_trail::types::chained_error::ChainedError::merge\n             at ./src/types/chained_error/mod.rs:120:9\n   1: app::load\n             at ./src/main.rs:7:5";
//! assert_eq!(
//!     clean_trace(raw),
//!     "Error: boom\n   1: app::load\n             at ./src/main.rs:7:5"
//! );
//! ```

use core::fmt::{self, Write};
use core::panic::Location;
#[cfg(feature = "std")]
use std::backtrace::{Backtrace, BacktraceStatus};
#[cfg(feature = "std")]
use std::sync::{Arc, OnceLock};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::alloc_type::String;
use crate::types::frame::{Frame, FrameKind};
use crate::types::ErrorVec;

/// Symbol fragments identifying the chain-construction entry points.
///
/// Backtrace lines naming one of these are dropped so a synthetic frame's
/// trace starts at the caller's code.
pub const INTERNAL_ENTRY_POINTS: &[&str] = &[
    "ChainedError::from_error",
    "ChainedError::from_existing",
    "ChainedError::from_boxed",
    "ChainedError::merge",
    "ChainedError::new_from_operation",
    "ChainInput::new",
    "Frame::cause",
    "Frame::from_boxed",
    "Frame::checkpoint",
    "Frame::operation",
    "trace::capture",
    "outcome::err",
    "std::backtrace",
];

/// Operator names whose markers are replaced when another operator runs.
pub const RECOGNIZED_OPERATIONS: &[&str] = &["unwrap", "unwrap_or", "map_err", "and_then"];

/// Returns `true` when `operation` is one of [`RECOGNIZED_OPERATIONS`].
#[inline]
pub fn is_recognized_operation(operation: &str) -> bool {
    RECOGNIZED_OPERATIONS.contains(&operation)
}

/// Removes the chain machinery's own lines from a captured trace.
///
/// The first line (the message header) is always kept. Every later line that
/// names one of [`INTERNAL_ENTRY_POINTS`] is dropped, together with the
/// indented `at file:line` lines that follow it.
pub fn clean_trace(raw: &str) -> String {
    let mut lines = raw.lines();
    let mut cleaned = String::with_capacity(raw.len());

    if let Some(header) = lines.next() {
        cleaned.push_str(header);
    }

    let mut skipping = false;
    for line in lines {
        if line.trim_start().starts_with("at ") {
            if skipping {
                continue;
            }
        } else {
            skipping = is_internal_line(line);
            if skipping {
                continue;
            }
        }
        cleaned.push('\n');
        cleaned.push_str(line);
    }

    cleaned
}

#[inline]
fn is_internal_line(line: &str) -> bool {
    INTERNAL_ENTRY_POINTS.iter().any(|entry| line.contains(entry))
}

/// Trace of a frame: a header line, the creation site and, when enabled, the
/// cleaned backtrace.
///
/// The backtrace is kept unresolved until the text is first read, so building
/// frames stays cheap even with `RUST_BACKTRACE` set.
#[derive(Clone)]
pub struct Trace {
    origin: String,
    #[cfg(feature = "std")]
    backtrace: Option<Arc<Backtrace>>,
    #[cfg(feature = "std")]
    rendered: OnceLock<String>,
}

impl Trace {
    /// Records `header`, `location` and the current backtrace if one is enabled.
    pub(crate) fn capture(header: &str, location: &Location<'_>) -> Self {
        #[cfg_attr(not(feature = "std"), allow(unused_mut))]
        let mut trace = Self::at(header, location);

        #[cfg(feature = "std")]
        {
            let backtrace = Backtrace::capture();
            if backtrace.status() == BacktraceStatus::Captured {
                trace.backtrace = Some(Arc::new(backtrace));
            }
        }

        trace
    }

    /// Records `header` and `location` only.
    pub(crate) fn at(header: &str, location: &Location<'_>) -> Self {
        let mut origin = String::with_capacity(header.len() + 64);
        origin.push_str(header);
        let _ = write!(
            origin,
            "\n    at {}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        );
        Self::from_text(origin)
    }

    /// A trace whose text is already final, e.g. restored through `serde`.
    pub(crate) fn from_text(text: String) -> Self {
        Self {
            origin: text,
            #[cfg(feature = "std")]
            backtrace: None,
            #[cfg(feature = "std")]
            rendered: OnceLock::new(),
        }
    }

    /// Returns `true` when a backtrace was captured alongside the location.
    #[cfg(feature = "std")]
    #[inline]
    pub fn has_backtrace(&self) -> bool {
        self.backtrace.is_some()
    }

    /// Returns `true` when a backtrace was captured alongside the location.
    #[cfg(not(feature = "std"))]
    #[inline]
    pub fn has_backtrace(&self) -> bool {
        false
    }

    /// The trace text. Resolves and cleans the backtrace on first call.
    #[cfg(feature = "std")]
    pub fn as_str(&self) -> &str {
        match &self.backtrace {
            Some(backtrace) => self.rendered.get_or_init(|| render(&self.origin, backtrace)),
            None => &self.origin,
        }
    }

    /// The trace text.
    #[cfg(not(feature = "std"))]
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.origin
    }
}

#[cfg(feature = "std")]
fn render(origin: &str, backtrace: &Backtrace) -> String {
    let raw = std::format!("{}\n{}", origin, backtrace);
    let mut text = String::from(origin);
    // header and location come first; only the backtrace lines are cleaned
    for line in clean_trace(&raw).lines().skip(origin.lines().count()) {
        text.push('\n');
        text.push_str(line);
    }
    text
}

impl fmt::Debug for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trace")
            .field("origin", &self.origin)
            .field("backtrace", &self.has_backtrace())
            .finish()
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl Serialize for Trace {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Trace {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from_text)
    }
}

/// Drops every recognised operation marker from a merged frame list.
///
/// Called before a new marker is appended, so a chain carries at most one
/// recognised marker however many operators it went through. Unrecognised
/// markers and checkpoints are kept.
pub(crate) fn drop_recognized_operations(frames: &mut ErrorVec<Frame>) {
    frames.retain(|frame| match frame.kind() {
        FrameKind::Operation(name) => !is_recognized_operation(name),
        _ => true,
    });
}
