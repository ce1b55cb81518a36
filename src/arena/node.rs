//! Node storage for the [Forest](super::Forest) arena.

use super::iterables::Nodelike;
use core::fmt;
use itertools::Itertools;

/// Generational handle of a node in a [Forest](super::Forest).
///
/// Handles are `Copy` and never keep a node alive. Once the node is freed the
/// handle turns stale; the arena slot may be reused later, but with a newer
/// generation, so a stale handle never names the new occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub(super) index: usize,
    pub(super) generation: u32,
}

impl NodeId {
    pub(super) fn new(index: usize, generation: u32) -> Self {
        NodeId { index, generation }
    }

    /// Slot in the arena
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}

/// A node of an arena allocated tree. Structural fields are maintained by the
/// forest and can only be read from outside.
#[derive(Debug, Clone)]
pub struct Node<T> {
    /// The user-defined payload
    pub(super) value: T,
    /// Back link, `None` for roots. Never an ownership relation
    pub(super) parent: Option<NodeId>,
    /// Owned children in sibling order
    pub(super) children: Vec<NodeId>,
    /// Edge count of the longest downward path; 0 for leaves
    pub(super) height: usize,
    /// Position in the parent's children, 0 for roots
    pub(super) index: usize,
}

impl<T> Node<T> {
    pub(super) fn new(value: T) -> Self {
        Node {
            value,
            parent: None,
            children: vec![],
            height: 0,
            index: 0,
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Position within the parent's children
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T> Nodelike<T> for Node<T> {
    fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    fn get(&self) -> &T {
        &self.value
    }

    fn height(&self) -> usize {
        self.height
    }

    fn out_degree(&self) -> usize {
        self.children.len()
    }
}

impl<T> fmt::Display for Node<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "payload: {}, height: {}, children: [{}]",
            self.value,
            self.height,
            self.children.iter().join(", ")
        )
    }
}
