//! Resumable, bidirectional tree traversals.
//!
//! A [Traversal] strategy defines an order over the nodes of the subtree anchored at a
//! designated root: where the walk starts, where it ends, and how to step forwards and
//! backwards from any node. Four strategies are provided:
//!
//! * [Leaves] – leaf nodes from left to right
//! * [Ancestors] – a start node followed by its ancestors up to the root
//! * [Preorder] – every node before its children
//! * [Postorder] – every node after its children
//!
//! A [Cursor] drives any strategy with a `(prev, current, next)` window and can be kept
//! around while the forest is mutated; it then refuses to move. A [Walk] borrows the forest
//! and exposes a forward pass as a standard [Iterator].

mod ancestors;
mod cursor;
mod leaves;
mod order;
mod walk;

pub use ancestors::Ancestors;
pub use cursor::Cursor;
pub use leaves::Leaves;
pub use order::{Postorder, Preorder};
pub use walk::Walk;

use crate::{Forest, NodeId};

/// An order over the nodes of a subtree.
///
/// Implementations may assume that `root` and `node` are live and that `node` lies below
/// `root`. `None` means the walk would leave the subtree.
pub trait Traversal {
    fn first<T>(&self, forest: &Forest<T>, root: NodeId) -> Option<NodeId>;
    fn last<T>(&self, forest: &Forest<T>, root: NodeId) -> Option<NodeId>;
    fn successor<T>(&self, forest: &Forest<T>, root: NodeId, node: NodeId) -> Option<NodeId>;
    fn predecessor<T>(&self, forest: &Forest<T>, root: NodeId, node: NodeId) -> Option<NodeId>;
}

/// Climbs from `node` towards `root` and returns the first following sibling met on the way.
/// Siblings of `root` itself are outside the subtree.
fn next_sibling_upwards<T>(forest: &Forest<T>, root: NodeId, node: NodeId) -> Option<NodeId> {
    let mut current = node;
    while current != root {
        if let Some(sibling) = forest.next_sibling(current) {
            return Some(sibling);
        }
        current = forest.parent(current)?;
    }
    None
}

/// Mirror of [next_sibling_upwards]
fn prev_sibling_upwards<T>(forest: &Forest<T>, root: NodeId, node: NodeId) -> Option<NodeId> {
    let mut current = node;
    while current != root {
        if let Some(sibling) = forest.prev_sibling(current) {
            return Some(sibling);
        }
        current = forest.parent(current)?;
    }
    None
}
