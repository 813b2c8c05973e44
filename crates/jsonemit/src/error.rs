//! Contract-violation errors.

use thiserror::Error;

use crate::frame::ContainerKind;

/// A caller broke the event-ordering contract.
///
/// Given a well-formed event sequence, serialization is infallible; these
/// errors only arise from mismatched container closes, keys outside objects,
/// or resetting mid-document. The serializer's buffer and nesting state are
/// left untouched when one is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerializerError {
    /// `end_object`/`end_array` was called with no container open.
    #[error("attempted to close {attempted} at the document root")]
    EndAtRoot { attempted: ContainerKind },

    /// The container being closed does not match the innermost open one.
    #[error("attempted to close {attempted} but the open container is {open}")]
    ContainerMismatch {
        open: ContainerKind,
        attempted: ContainerKind,
    },

    /// A key was emitted at the root or inside an array.
    #[error("key emitted outside an object")]
    KeyOutsideObject,

    /// `reset` was called while containers were still open.
    #[error("reset with {depth} open container(s)")]
    ResetInsideDocument { depth: usize },
}
