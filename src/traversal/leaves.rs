//! Leaf-only traversal

use super::{next_sibling_upwards, prev_sibling_upwards, Traversal};
use crate::{Forest, NodeId};

/// Visits the leaves of a subtree from left to right. A leaf root is its own only leaf.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Leaves;

impl Traversal for Leaves {
    fn first<T>(&self, forest: &Forest<T>, root: NodeId) -> Option<NodeId> {
        forest.leftmost_leaf(root)
    }

    fn last<T>(&self, forest: &Forest<T>, root: NodeId) -> Option<NodeId> {
        forest.rightmost_leaf(root)
    }

    fn successor<T>(&self, forest: &Forest<T>, root: NodeId, node: NodeId) -> Option<NodeId> {
        next_sibling_upwards(forest, root, node).and_then(|sibling| forest.leftmost_leaf(sibling))
    }

    fn predecessor<T>(&self, forest: &Forest<T>, root: NodeId, node: NodeId) -> Option<NodeId> {
        prev_sibling_upwards(forest, root, node).and_then(|sibling| forest.rightmost_leaf(sibling))
    }
}
