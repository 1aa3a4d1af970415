//! Rendering a chain's causes as text.
//!
//! A [`ChainedError`] renders newest cause first, joined by `" -> "`. The
//! alternate form (`{:#}`) puts each older cause on its own line, indented one
//! step deeper than the one before it. [`ChainedError::fmt`] returns a
//! [`ChainFormatBuilder`] for anything else.

use core::fmt::{self, Display};

use crate::types::alloc_type::String;
use crate::types::frame::Frame;
use crate::types::ChainedError;

/// Renders a sequence of frames.
///
/// Only [`format_frame`](ChainFormatter::format_frame) usually needs
/// overriding.
pub trait ChainFormatter {
    /// Text for a single frame. Defaults to its message.
    fn format_frame(&self, frame: &Frame) -> String {
        String::from(frame.message())
    }

    /// Text placed between two frames.
    fn separator(&self) -> &str {
        " -> "
    }

    /// Joins `frames` in the order given.
    fn format_chain<'a>(&self, frames: impl Iterator<Item = &'a Frame>) -> String {
        let mut out = String::new();
        for (i, frame) in frames.enumerate() {
            if i > 0 {
                out.push_str(self.separator());
            }
            out.push_str(&self.format_frame(frame));
        }
        out
    }
}

/// How consecutive frames are laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainLayout {
    /// All frames on one line, joined by the separator.
    Inline,
    /// One frame per line, each indented once more than the previous.
    Cascade { indent: String },
}

/// Formatter driven by plain settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainFormatConfig {
    /// Separator used by [`ChainLayout::Inline`].
    pub separator: String,
    pub layout: ChainLayout,
    /// Prefix each frame with its error name (`ParseIntError: ...`).
    pub show_names: bool,
    /// List causes in insertion order instead of newest first.
    pub oldest_first: bool,
}

impl Default for ChainFormatConfig {
    fn default() -> Self {
        Self {
            separator: String::from(" -> "),
            layout: ChainLayout::Inline,
            show_names: false,
            oldest_first: false,
        }
    }
}

impl ChainFormatConfig {
    /// One cause per line, indented by two spaces per step.
    pub fn cascaded() -> Self {
        Self { layout: ChainLayout::Cascade { indent: String::from("  ") }, ..Self::default() }
    }

    /// Inline, separated by `" | "`.
    pub fn compact() -> Self {
        Self { separator: String::from(" | "), ..Self::default() }
    }

    pub fn with_names() -> Self {
        Self { show_names: true, ..Self::default() }
    }
}

impl ChainFormatter for ChainFormatConfig {
    fn format_frame(&self, frame: &Frame) -> String {
        if self.show_names {
            alloc::format!("{}: {}", frame.name(), frame.message())
        } else {
            String::from(frame.message())
        }
    }

    fn separator(&self) -> &str {
        match self.layout {
            ChainLayout::Inline => &self.separator,
            ChainLayout::Cascade { .. } => "\n",
        }
    }

    fn format_chain<'a>(&self, frames: impl Iterator<Item = &'a Frame>) -> String {
        let mut out = String::new();
        for (depth, frame) in frames.enumerate() {
            if depth > 0 {
                out.push_str(self.separator());
                if let ChainLayout::Cascade { indent } = &self.layout {
                    (0..depth).for_each(|_| out.push_str(indent));
                }
            }
            out.push_str(&self.format_frame(frame));
        }
        out
    }
}

/// Builder for customizing chain display output.
///
/// # Examples
///
/// ```
/// use error_trail::{ChainInput, ChainedError};
/// use std::io;
///
/// let chain = ChainedError::merge([
///     ChainInput::new(io::Error::other("socket closed")),
///     ChainInput::new(io::Error::other("sync aborted")),
/// ]);
///
/// assert_eq!(chain.fmt().oldest_first(true).to_string(), "socket closed -> sync aborted");
/// assert_eq!(chain.fmt().cascaded().to_string(), "sync aborted\n  socket closed");
/// ```
#[must_use]
pub struct ChainFormatBuilder<'a> {
    pub(crate) error: &'a ChainedError,
    pub(crate) config: ChainFormatConfig,
}

impl<'a> ChainFormatBuilder<'a> {
    pub fn new(error: &'a ChainedError) -> Self {
        Self { error, config: ChainFormatConfig::default() }
    }

    pub fn with_config(mut self, config: ChainFormatConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = separator.into();
        self
    }

    pub fn oldest_first(mut self, enabled: bool) -> Self {
        self.config.oldest_first = enabled;
        self
    }

    pub fn show_names(mut self, show: bool) -> Self {
        self.config.show_names = show;
        self
    }

    /// Switches to the one-cause-per-line layout, keeping other settings.
    pub fn cascaded(mut self) -> Self {
        self.config.layout = ChainFormatConfig::cascaded().layout;
        self
    }

    pub fn compact(mut self) -> Self {
        self.config.separator = ChainFormatConfig::compact().separator;
        self
    }
}

impl Display for ChainFormatBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let error = self.error;

        // no causes: show the chain's own identity
        if error.cause_count() == 0 {
            if self.config.show_names {
                write!(f, "{}: ", error.name())?;
            }
            return f.write_str(error.message());
        }

        let text = if self.config.oldest_first {
            self.config.format_chain(error.frames())
        } else {
            self.config.format_chain(error.frames().rev())
        };
        f.write_str(&text)
    }
}
