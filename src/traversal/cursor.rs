//! The shared `(prev, current, next)` state machine behind all traversals.

use super::{Ancestors, Leaves, Postorder, Preorder, Traversal};
use crate::{Forest, NodeId, TreeError};

/// A resumable, bidirectional position in a traversal of the subtree anchored at a root.
///
/// The cursor does not borrow the forest; every step takes it as a parameter instead. This
/// allows to keep a cursor around across mutations, but any structural edit of the forest
/// invalidates it: [Cursor::advance] and [Cursor::retreat] then return
/// [TreeError::CursorInvalidated].
///
/// A freshly positioned cursor sits *before* its first node ([Cursor::first]) or *after* its
/// last node ([Cursor::last]) with `current` empty. Advancing past the end empties `current`
/// but remembers the last node in `prev`, so retreating walks back into the traversal.
#[derive(Debug, Clone)]
pub struct Cursor<S> {
    strategy: S,
    root: NodeId,
    prev: Option<NodeId>,
    current: Option<NodeId>,
    next: Option<NodeId>,
    epoch: u64,
}

impl<S: Traversal> Cursor<S> {
    /// Positions the cursor before the first node of the traversal.
    pub fn first<T>(strategy: S, forest: &Forest<T>, root: NodeId) -> Result<Self, TreeError> {
        if !forest.contains(root) {
            return Err(TreeError::StaleNode(root));
        }
        let next = strategy.first(forest, root);
        Ok(Cursor {
            strategy,
            root,
            prev: None,
            current: None,
            next,
            epoch: forest.epoch,
        })
    }

    /// Positions the cursor after the last node of the traversal.
    pub fn last<T>(strategy: S, forest: &Forest<T>, root: NodeId) -> Result<Self, TreeError> {
        if !forest.contains(root) {
            return Err(TreeError::StaleNode(root));
        }
        let prev = strategy.last(forest, root);
        Ok(Cursor {
            strategy,
            root,
            prev,
            current: None,
            next: None,
            epoch: forest.epoch,
        })
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn has_prev(&self) -> bool {
        self.prev.is_some()
    }

    pub fn current(&self) -> Option<NodeId> {
        self.current
    }

    /// Payload of the current node
    pub fn current_value<'a, T>(&self, forest: &'a Forest<T>) -> Option<&'a T> {
        forest.value(self.current?)
    }

    /// Steps forwards and returns the new current node.
    pub fn advance<T>(&mut self, forest: &Forest<T>) -> Result<Option<NodeId>, TreeError> {
        self.check(forest)?;
        if self.current.is_some() {
            self.prev = self.current;
        }
        self.current = self.next;
        self.next = self
            .current
            .and_then(|node| self.strategy.successor(forest, self.root, node));
        Ok(self.current)
    }

    /// Steps backwards and returns the new current node.
    pub fn retreat<T>(&mut self, forest: &Forest<T>) -> Result<Option<NodeId>, TreeError> {
        self.check(forest)?;
        if self.current.is_some() {
            self.next = self.current;
        }
        self.current = self.prev;
        self.prev = self
            .current
            .and_then(|node| self.strategy.predecessor(forest, self.root, node));
        Ok(self.current)
    }

    pub(crate) fn check<T>(&self, forest: &Forest<T>) -> Result<(), TreeError> {
        if self.epoch != forest.epoch {
            return Err(TreeError::CursorInvalidated);
        }
        Ok(())
    }
}

impl Cursor<Leaves> {
    /// Positioned before the leftmost leaf of `root`
    pub fn leaves_first<T>(forest: &Forest<T>, root: NodeId) -> Result<Self, TreeError> {
        Self::first(Leaves, forest, root)
    }

    /// Positioned after the rightmost leaf of `root`
    pub fn leaves_last<T>(forest: &Forest<T>, root: NodeId) -> Result<Self, TreeError> {
        Self::last(Leaves, forest, root)
    }
}

impl Cursor<Ancestors> {
    /// Positioned before `node`; walks up to and including `root`. Fails with
    /// [TreeError::NotInTree] if `node` does not lie below `root`.
    pub fn parents<T>(forest: &Forest<T>, root: NodeId, node: NodeId) -> Result<Self, TreeError> {
        if !forest.is_descendant_of(node, root)? {
            return Err(TreeError::NotInTree { node, tree: root });
        }
        Self::first(Ancestors::new(node), forest, root)
    }
}

impl Cursor<Preorder> {
    pub fn preorder<T>(forest: &Forest<T>, root: NodeId) -> Result<Self, TreeError> {
        Self::first(Preorder, forest, root)
    }
}

impl Cursor<Postorder> {
    pub fn postorder<T>(forest: &Forest<T>, root: NodeId) -> Result<Self, TreeError> {
        Self::first(Postorder, forest, root)
    }
}
