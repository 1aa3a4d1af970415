use super::ChainedError;
use core::fmt::Display;

impl Display for ChainedError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if !f.alternate() {
            return Display::fmt(&self.fmt(), f);
        }
        Display::fmt(&self.fmt().cascaded(), f)
    }
}

impl core::error::Error for ChainedError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.root_cause().map(|frame| frame as &(dyn core::error::Error + 'static))
    }
}

/// Chains compare by their causal frames only; bookkeeping frames and trace
/// text are not part of equality.
impl PartialEq for ChainedError {
    fn eq(&self, other: &Self) -> bool {
        self.frames().eq(other.frames())
    }
}

impl Eq for ChainedError {}
