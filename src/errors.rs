//! Provides the error type used throughout this crate.

use crate::arena::NodeId;
use std::collections::TryReserveError;
use thiserror::Error;

/// The error type used throughout this crate.
///
/// A rejected operation never leaves a partial edit behind: all mutators check
/// their arguments and reserve memory before they touch the forest.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("Node handle {0} is stale or was never allocated")]
    StaleNode(NodeId),
    #[error("Child index {index} is out of bound (out degree {out_degree})")]
    IndexOutOfBounds { index: usize, out_degree: usize },
    #[error("Node {0} still has a parent; detach it first")]
    AlreadyAttached(NodeId),
    #[error("Attaching {subtree} below {parent} would create a cycle")]
    Cycle { parent: NodeId, subtree: NodeId },
    #[error("Node {node} is not part of the tree rooted at {tree}")]
    NotInTree { node: NodeId, tree: NodeId },
    #[error("The forest was modified since the cursor was positioned")]
    CursorInvalidated,
    #[error("Could not grow storage: {0}")]
    Allocation(#[from] TryReserveError),
}
