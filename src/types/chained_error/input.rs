use alloc::boxed::Box;
use core::any::Any;
use core::error::Error;

use super::ChainedError;
use crate::types::frame::Frame;

/// One input to [`ChainedError::merge`]: a whole chain or a single frame.
#[derive(Debug, Clone)]
pub enum ChainInput {
    /// A chain whose frames are flattened into the result.
    Chain(ChainedError),
    /// A single frame appended as-is.
    Frame(Frame),
}

impl ChainInput {
    /// Classifies an arbitrary error.
    ///
    /// A [`ChainedError`] or [`Frame`] passed through a generic error
    /// parameter is recognised and kept whole; any other error becomes a
    /// cause frame.
    #[track_caller]
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        let any = &error as &dyn Any;
        if let Some(chain) = any.downcast_ref::<ChainedError>() {
            return Self::Chain(chain.clone());
        }
        if let Some(frame) = any.downcast_ref::<Frame>() {
            return Self::Frame(frame.clone());
        }
        Self::Frame(Frame::cause(error))
    }

    /// Classifies a boxed error trait object.
    #[track_caller]
    pub fn from_boxed(error: Box<dyn Error + Send + Sync + 'static>) -> Self {
        match error.downcast::<ChainedError>() {
            Ok(chain) => Self::Chain(*chain),
            Err(error) => Self::Frame(Frame::from_boxed(error)),
        }
    }

    /// Returns `true` when the input is a whole chain.
    #[inline]
    pub fn is_chain(&self) -> bool {
        matches!(self, Self::Chain(_))
    }
}

impl From<ChainedError> for ChainInput {
    #[inline]
    fn from(chain: ChainedError) -> Self {
        Self::Chain(chain)
    }
}

impl From<Frame> for ChainInput {
    #[inline]
    fn from(frame: Frame) -> Self {
        Self::Frame(frame)
    }
}
