//! Depth-first traversals: preorder and postorder.
//!
//! Both are exact mirrors of each other: stepping forwards in preorder follows the same path as
//! stepping backwards in postorder with first and last children swapped.

use super::{next_sibling_upwards, prev_sibling_upwards, Traversal};
use crate::{Forest, NodeId};

/// Yields a node before its children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preorder;

/// Yields a node after all of its children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Postorder;

impl Traversal for Preorder {
    fn first<T>(&self, forest: &Forest<T>, root: NodeId) -> Option<NodeId> {
        forest.contains(root).then_some(root)
    }

    fn last<T>(&self, forest: &Forest<T>, root: NodeId) -> Option<NodeId> {
        forest.rightmost_leaf(root)
    }

    fn successor<T>(&self, forest: &Forest<T>, root: NodeId, node: NodeId) -> Option<NodeId> {
        forest
            .first_child(node)
            .or_else(|| next_sibling_upwards(forest, root, node))
    }

    fn predecessor<T>(&self, forest: &Forest<T>, root: NodeId, node: NodeId) -> Option<NodeId> {
        if node == root {
            return None;
        }
        match forest.prev_sibling(node) {
            Some(sibling) => forest.rightmost_leaf(sibling),
            None => forest.parent(node),
        }
    }
}

impl Traversal for Postorder {
    fn first<T>(&self, forest: &Forest<T>, root: NodeId) -> Option<NodeId> {
        forest.leftmost_leaf(root)
    }

    fn last<T>(&self, forest: &Forest<T>, root: NodeId) -> Option<NodeId> {
        forest.contains(root).then_some(root)
    }

    fn successor<T>(&self, forest: &Forest<T>, root: NodeId, node: NodeId) -> Option<NodeId> {
        if node == root {
            return None;
        }
        match forest.next_sibling(node) {
            Some(sibling) => forest.leftmost_leaf(sibling),
            None => forest.parent(node),
        }
    }

    /// The last child if there is one. A leaf steps to the closest previous sibling of itself
    /// or of an ancestor below the root.
    fn predecessor<T>(&self, forest: &Forest<T>, root: NodeId, node: NodeId) -> Option<NodeId> {
        forest
            .last_child(node)
            .or_else(|| prev_sibling_upwards(forest, root, node))
    }
}

#[cfg(test)]
mod tests {

    use crate::*;
    use itertools::Itertools;
    use test_log;

    // Layout of the tree
    //        0
    //      /   \
    //     1     5
    //    / \    |
    //   2   4   6
    //   |
    //   3
    fn build() -> (Forest<usize>, NodeId, NodeId) {
        let mut forest = Forest::new();
        let root = forest.alloc(0).unwrap();
        let first = forest.add_child(root, 1).unwrap();
        let second = forest.add_child(root, 5).unwrap();
        let third = forest.add_child(first, 2).unwrap();
        forest.add_child(first, 4).unwrap();
        forest.add_child(third, 3).unwrap();
        forest.add_child(second, 6).unwrap();
        (forest, root, first)
    }

    fn drain_backwards<S: Traversal>(forest: &Forest<usize>, mut cursor: Cursor<S>) -> Vec<usize> {
        std::iter::from_fn(|| cursor.retreat(forest).unwrap())
            .map(|n| *forest[n].get())
            .collect_vec()
    }

    #[test_log::test]
    fn test_preorder() {
        let (forest, root, first) = build();

        let result = forest.iter_preorder(root).unwrap().map(|n| *forest[n].get()).collect_vec();
        assert_eq!(result, &[0, 1, 2, 3, 4, 5, 6]);

        let result = forest.iter_preorder(first).unwrap().map(|n| *forest[n].get()).collect_vec();
        assert_eq!(result, &[1, 2, 3, 4]);

        let cursor = Cursor::last(Preorder, &forest, root).unwrap();
        assert_eq!(drain_backwards(&forest, cursor), &[6, 5, 4, 3, 2, 1, 0]);

        let cursor = Cursor::last(Preorder, &forest, first).unwrap();
        assert_eq!(drain_backwards(&forest, cursor), &[4, 3, 2, 1]);
    }

    #[test_log::test]
    fn test_postorder() {
        let (forest, root, first) = build();

        let result = forest.iter_postorder(root).unwrap().map(|n| *forest[n].get()).collect_vec();
        assert_eq!(result, &[3, 2, 4, 1, 6, 5, 0]);

        let result = forest.iter_postorder(first).unwrap().map(|n| *forest[n].get()).collect_vec();
        assert_eq!(result, &[3, 2, 4, 1]);

        let cursor = Cursor::last(Postorder, &forest, root).unwrap();
        assert_eq!(drain_backwards(&forest, cursor), &[0, 5, 6, 1, 4, 2, 3]);

        let cursor = Cursor::last(Postorder, &forest, first).unwrap();
        assert_eq!(drain_backwards(&forest, cursor), &[1, 4, 2, 3]);
    }

    #[test_log::test]
    fn test_postorder_retreat_from_first_child() {
        // Stepping back from a first child must behave like the mirrored preorder step:
        // "2" is the first child of "1", its postorder predecessor is its last child "3",
        // and from the leaf "3" there is no previous sibling anywhere below the root.
        let (forest, root, _) = build();
        let mut cursor = Cursor::postorder(&forest, root).unwrap();
        for _ in 0..2 {
            cursor.advance(&forest).unwrap();
        }
        assert_eq!(cursor.current_value(&forest), Some(&2));
        assert_eq!(cursor.retreat(&forest).unwrap().map(|n| *forest[n].get()), Some(3));
        assert!(!cursor.has_prev());

        // Same position reached from the other direction
        let mut cursor = Cursor::last(Postorder, &forest, root).unwrap();
        let visited = std::iter::from_fn(|| cursor.retreat(&forest).unwrap())
            .take_while(|n| *forest[*n].get() != 2)
            .count();
        assert_eq!(visited, 5);
        assert_eq!(cursor.current_value(&forest), Some(&2));
        assert_eq!(cursor.retreat(&forest).unwrap().map(|n| *forest[n].get()), Some(3));
    }

    #[test_log::test]
    fn test_single_node() {
        let mut forest = Forest::new();
        let root = forest.alloc(42).unwrap();
        assert_eq!(forest.iter_preorder(root).unwrap().collect_vec(), &[root]);
        assert_eq!(forest.iter_postorder(root).unwrap().collect_vec(), &[root]);
    }
}
