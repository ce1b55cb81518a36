//! Forward passes as standard iterators.

use super::{Ancestors, Cursor, Leaves, Postorder, Preorder, Traversal};
use crate::{Forest, NodeId, TreeError};
use std::iter::FusedIterator;

/// Iterator over a traversal. Borrows the forest, so the shape cannot change underneath.
pub struct Walk<'a, T, S> {
    forest: &'a Forest<T>,
    cursor: Cursor<S>,
}

impl<'a, T, S: Traversal> Walk<'a, T, S> {
    /// Continues the traversal of `cursor`. Fails with [TreeError::CursorInvalidated] if the
    /// forest was modified since the cursor was positioned.
    pub fn new(forest: &'a Forest<T>, cursor: Cursor<S>) -> Result<Self, TreeError> {
        cursor.check(forest)?;
        Ok(Walk { forest, cursor })
    }

    /// Gives the cursor back, e.g., to walk backwards from where the iteration stopped.
    pub fn into_cursor(self) -> Cursor<S> {
        self.cursor
    }
}

impl<T, S: Traversal> Iterator for Walk<'_, T, S> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        // Checked in `new`, and the borrow of the forest rules out later edits
        self.cursor.advance(self.forest).ok().flatten()
    }
}

impl<T, S: Traversal> FusedIterator for Walk<'_, T, S> {}

impl<T> Forest<T> {
    pub fn iter_leaves(&self, root: NodeId) -> Result<Walk<'_, T, Leaves>, TreeError> {
        Walk::new(self, Cursor::leaves_first(self, root)?)
    }

    /// `node` followed by its ancestors up to and including `root`
    pub fn iter_ancestors(&self, root: NodeId, node: NodeId) -> Result<Walk<'_, T, Ancestors>, TreeError> {
        Walk::new(self, Cursor::parents(self, root, node)?)
    }

    pub fn iter_preorder(&self, root: NodeId) -> Result<Walk<'_, T, Preorder>, TreeError> {
        Walk::new(self, Cursor::preorder(self, root)?)
    }

    pub fn iter_postorder(&self, root: NodeId) -> Result<Walk<'_, T, Postorder>, TreeError> {
        Walk::new(self, Cursor::postorder(self, root)?)
    }
}
