//! Nesting bookkeeping for open containers.

use alloc::vec::Vec;
use core::fmt;

/// The kind of container a nesting frame tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Object,
    Array,
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerKind::Object => f.write_str("an object"),
            ContainerKind::Array => f.write_str("an array"),
        }
    }
}

/// One open container: its kind, and whether the next item is the first.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Frame {
    pub(crate) kind: ContainerKind,
    pub(crate) first: bool,
}

/// Stack of open containers. Depth equals the current nesting depth; the top
/// frame is the innermost open container; empty means the document root.
#[derive(Debug)]
pub(crate) struct FrameStack {
    frames: Vec<Frame>,
}

impl FrameStack {
    pub(crate) fn with_capacity(depth: usize) -> Self {
        Self {
            frames: Vec::with_capacity(depth),
        }
    }

    pub(crate) fn push(&mut self, kind: ContainerKind) {
        self.frames.push(Frame { kind, first: true });
    }

    /// Pops the innermost frame. The caller validates the kind via [`top`]
    /// before popping, so a mismatched close never mutates the stack.
    ///
    /// [`top`]: FrameStack::top
    pub(crate) fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    pub(crate) fn top(&self) -> Option<&Frame> {
        self.frames.last()
    }

    pub(crate) fn top_mut(&mut self) -> Option<&mut Frame> {
        self.frames.last_mut()
    }

    pub(crate) fn depth(&self) -> usize {
        self.frames.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
