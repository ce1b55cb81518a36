//! Traversal along the ancestor chain

use super::Traversal;
use crate::{Forest, NodeId};

/// Visits a start node and then each of its ancestors up to and including the root of the
/// traversal. A start node outside of the root's subtree yields an empty walk;
/// [Cursor::parents](crate::Cursor::parents) rejects it with [TreeError::NotInTree](crate::TreeError::NotInTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ancestors {
    start: NodeId,
}

impl Ancestors {
    pub fn new(start: NodeId) -> Self {
        Ancestors { start }
    }

    pub fn start(&self) -> NodeId {
        self.start
    }

    fn starts_below<T>(&self, forest: &Forest<T>, root: NodeId) -> bool {
        forest.is_descendant_of(self.start, root).unwrap_or(false)
    }
}

impl Traversal for Ancestors {
    fn first<T>(&self, forest: &Forest<T>, root: NodeId) -> Option<NodeId> {
        self.starts_below(forest, root).then_some(self.start)
    }

    fn last<T>(&self, forest: &Forest<T>, root: NodeId) -> Option<NodeId> {
        self.starts_below(forest, root).then_some(root)
    }

    fn successor<T>(&self, forest: &Forest<T>, root: NodeId, node: NodeId) -> Option<NodeId> {
        if node == root {
            return None;
        }
        forest.parent(node)
    }

    /// Parent links only point upwards, so stepping back re-walks the chain from the start.
    fn predecessor<T>(&self, forest: &Forest<T>, _root: NodeId, node: NodeId) -> Option<NodeId> {
        if node == self.start {
            return None;
        }
        std::iter::successors(Some(self.start), |id| forest.parent(*id)).find(|id| forest.parent(*id) == Some(node))
    }
}
