//! Operations on the radix tree.

mod delete;
mod insert;
mod walk;

use crate::node::NodeId;

/// Result of descending from the root along a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Walk {
    /// The node at which the descent stopped.
    pub(crate) end: NodeId,
    /// Number of key bytes matched before stopping.
    pub(crate) matched: usize,
    /// Position inside the outgoing compressed edge of `end` at which the
    /// descent stopped, or 0 if it stopped on a node boundary.
    pub(crate) offset: usize,
}
