use core::iter::FusedIterator;
use core::slice;

use crate::types::frame::Frame;

/// Iterator over the causal frames of a chain, oldest first.
#[derive(Debug, Clone)]
pub struct Frames<'a> {
    inner: slice::Iter<'a, Frame>,
}

impl<'a> Frames<'a> {
    pub(crate) fn new(frames: &'a [Frame]) -> Self {
        Self { inner: frames.iter() }
    }
}

impl<'a> Iterator for Frames<'a> {
    type Item = &'a Frame;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().find(|frame| frame.is_cause())
    }
}

impl DoubleEndedIterator for Frames<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().rev().find(|frame| frame.is_cause())
    }
}

impl FusedIterator for Frames<'_> {}

/// Iterator over the bookkeeping frames of a chain, oldest first.
#[derive(Debug, Clone)]
pub struct Checkpoints<'a> {
    inner: slice::Iter<'a, Frame>,
}

impl<'a> Checkpoints<'a> {
    pub(crate) fn new(frames: &'a [Frame]) -> Self {
        Self { inner: frames.iter() }
    }
}

impl<'a> Iterator for Checkpoints<'a> {
    type Item = &'a Frame;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().find(|frame| frame.is_bookkeeping())
    }
}

impl FusedIterator for Checkpoints<'_> {}
