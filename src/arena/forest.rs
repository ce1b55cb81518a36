//! The arena itself: allocation, structural edits and relationship queries.
//!
//! All edits keep four invariants intact: no node is its own ancestor, every node has at most
//! one parent, `children[i].index == i` for every node, and the cached heights along the
//! edited ancestor chain are exact.

use super::iterables::Nodelike;
use super::node::{Node, NodeId};
use crate::TreeError;
use core::fmt;
use std::ops::{Index, IndexMut};
use tracing::{debug, trace};
use tracing_attributes::instrument;

#[derive(Clone)]
struct Slot<T> {
    /// Bumped whenever the slot is reused. A slot that reaches `u32::MAX` is retired so that
    /// handles can never alias.
    generation: u32,
    node: Option<Node<T>>,
}

/// Arena holding any number of independent trees.
///
/// A tree is identified by the [NodeId] of its root; every node anchors the subtree below it,
/// so "tree" and "node" are used interchangeably. Nodes are created rootless with
/// [Forest::alloc] (or directly below a parent with [Forest::add_child] and friends) and
/// moved around with [Forest::detach], [Forest::add_subtree], [Forest::insert_subtree] and
/// [Forest::set_subtree].
///
/// Every structural edit bumps an epoch counter, which lets [Cursor](crate::Cursor)s detect
/// that they were positioned on an outdated shape.
#[derive(Clone)]
pub struct Forest<T> {
    slots: Vec<Slot<T>>,
    free_list: Vec<usize>,
    len: usize,
    pub(crate) epoch: u64,
}

impl<T> Forest<T> {
    pub fn new() -> Self {
        Forest {
            slots: vec![],
            free_list: vec![],
            len: 0,
            epoch: 0,
        }
    }

    /// Contructor that reserves room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Forest {
            slots: Vec::with_capacity(capacity),
            free_list: vec![],
            len: 0,
            epoch: 0,
        }
    }

    /// Number of live nodes over all trees
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether `id` names a live node
    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    fn try_node(&self, id: NodeId) -> Result<&Node<T>, TreeError> {
        self.node(id).ok_or(TreeError::StaleNode(id))
    }

    /// Roots of all trees in the forest, in slot order.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| match &slot.node {
                Some(node) if node.is_root() => Some(NodeId::new(index, slot.generation)),
                _ => None,
            })
    }

    // --- construction and destruction ---

    /// Allocates a rootless leaf holding `value`.
    #[instrument(level = "trace", skip_all)]
    pub fn alloc(&mut self, value: T) -> Result<NodeId, TreeError> {
        let node = Node::new(value);
        let id = if let Some(index) = self.free_list.pop() {
            let slot = &mut self.slots[index];
            // Slots at the last generation never enter the free list
            slot.generation += 1;
            slot.node = Some(node);
            NodeId::new(index, slot.generation)
        } else {
            self.slots.try_reserve(1)?;
            self.slots.push(Slot {
                generation: 0,
                node: Some(node),
            });
            NodeId::new(self.slots.len() - 1, 0)
        };
        self.len += 1;
        trace!(%id, "allocated node");
        Ok(id)
    }

    /// Frees a rootless node together with all its descendants and hands their payloads back
    /// in preorder. A stale handle is a no-op. Attached nodes are refused, use [Forest::delete]
    /// to detach and free in one step.
    #[instrument(level = "trace", skip(self))]
    pub fn free(&mut self, node: NodeId) -> Result<Vec<T>, TreeError> {
        let Some(entry) = self.node(node) else {
            return Ok(Vec::new());
        };
        if entry.parent.is_some() {
            debug!(%node, "refusing to free an attached node");
            return Err(TreeError::AlreadyAttached(node));
        }
        let values = self.release(node);
        self.epoch += 1;
        Ok(values)
    }

    /// Detaches `node` from its parent (if any) and frees it with its subtree.
    pub fn delete(&mut self, node: NodeId) -> Result<Vec<T>, TreeError> {
        self.detach(node)?;
        self.free(node)
    }

    /// Empties the slots of a subtree whose root has already been unlinked.
    fn release(&mut self, root: NodeId) -> Vec<T> {
        let mut values = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let Some(node) = self.slots[id.index].node.take() else {
                continue;
            };
            if id.generation < u32::MAX {
                self.free_list.push(id.index);
            } else {
                debug!(%id, "retiring slot with exhausted generations");
            }
            self.len -= 1;
            stack.extend(node.children.iter().rev().copied());
            values.push(node.value);
        }
        trace!(%root, released = values.len(), "released subtree");
        values
    }

    // --- structural edits ---

    /// Removes `node` from its parent's children and returns it as the root of its own tree.
    /// Roots are returned unchanged.
    #[instrument(level = "trace", skip(self))]
    pub fn detach(&mut self, node: NodeId) -> Result<NodeId, TreeError> {
        if let Some(parent) = self.try_node(node)?.parent {
            self.unlink(node, parent);
            self.epoch += 1;
            trace!(%node, %parent, "detached subtree");
        }
        Ok(node)
    }

    /// Appends `subtree` as the last child of `parent`. A subtree that still hangs below some
    /// other node is detached from there first.
    #[instrument(level = "trace", skip(self))]
    pub fn add_subtree(&mut self, parent: NodeId, subtree: NodeId) -> Result<(), TreeError> {
        self.check_acyclic(parent, subtree)?;
        self[parent].children.try_reserve(1)?;
        if let Some(old_parent) = self[subtree].parent {
            self.unlink(subtree, old_parent);
        }
        let position = self[parent].children.len();
        self.link(parent, subtree, position);
        Ok(())
    }

    /// Inserts the rootless `subtree` at `position`, shifting the following siblings up.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_subtree(&mut self, parent: NodeId, subtree: NodeId, position: usize) -> Result<(), TreeError> {
        self.check_insertion(parent, subtree, position)?;
        self[parent].children.try_reserve(1)?;
        self.link(parent, subtree, position);
        Ok(())
    }

    /// Installs the rootless `subtree` at `position`. When `position == out_degree` this appends;
    /// otherwise the child at `position` is freed along with its descendants and their payloads
    /// are returned.
    #[instrument(level = "trace", skip(self))]
    pub fn set_subtree(&mut self, parent: NodeId, subtree: NodeId, position: usize) -> Result<Vec<T>, TreeError> {
        self.check_insertion(parent, subtree, position)?;
        if position == self[parent].children.len() {
            self[parent].children.try_reserve(1)?;
            self.link(parent, subtree, position);
            return Ok(Vec::new());
        }

        let replaced = std::mem::replace(&mut self[parent].children[position], subtree);
        let installed = &mut self[subtree];
        installed.parent = Some(parent);
        installed.index = position;
        self[replaced].parent = None;
        self.update_heights(parent);

        let values = self.release(replaced);
        self.epoch += 1;
        Ok(values)
    }

    /// Allocates a node for `value` and appends it below `parent`.
    pub fn add_child(&mut self, parent: NodeId, value: T) -> Result<NodeId, TreeError> {
        self.try_node(parent)?;
        let child = self.alloc(value)?;
        let result = self.add_subtree(parent, child);
        self.adopt(child, result)
    }

    /// Allocates a node for `value` and inserts it below `parent` at `position`.
    pub fn insert_child(&mut self, parent: NodeId, value: T, position: usize) -> Result<NodeId, TreeError> {
        self.check_position(parent, position)?;
        let child = self.alloc(value)?;
        let result = self.insert_subtree(parent, child, position);
        self.adopt(child, result)
    }

    /// Allocates a node for `value` and installs it below `parent` at `position`, dropping the
    /// subtree it replaces. Use [Forest::set_subtree] to get hold of the replaced payloads.
    pub fn set_child(&mut self, parent: NodeId, value: T, position: usize) -> Result<NodeId, TreeError> {
        self.check_position(parent, position)?;
        let child = self.alloc(value)?;
        let result = self.set_subtree(parent, child, position).map(drop);
        self.adopt(child, result)
    }

    /// Replaces the payload of `node` and returns the previous one.
    pub fn set_value(&mut self, node: NodeId, value: T) -> Result<T, TreeError> {
        self.node_mut(node)
            .map(|entry| std::mem::replace(&mut entry.value, value))
            .ok_or(TreeError::StaleNode(node))
    }

    /// Frees a freshly allocated child again if it could not be placed. The `*_child` wrappers
    /// validate their arguments before allocating, so in practice only a failed `try_reserve`
    /// of the parent's children ends up here.
    fn adopt(&mut self, child: NodeId, result: Result<(), TreeError>) -> Result<NodeId, TreeError> {
        match result {
            Ok(()) => Ok(child),
            Err(error) => {
                self.release(child);
                Err(error)
            }
        }
    }

    fn check_position(&self, parent: NodeId, position: usize) -> Result<(), TreeError> {
        let out_degree = self.out_degree(parent)?;
        if position > out_degree {
            debug!(%parent, position, out_degree, "child position out of bound");
            return Err(TreeError::IndexOutOfBounds {
                index: position,
                out_degree,
            });
        }
        Ok(())
    }

    fn check_insertion(&self, parent: NodeId, subtree: NodeId, position: usize) -> Result<(), TreeError> {
        self.check_position(parent, position)?;
        if self.try_node(subtree)?.parent.is_some() {
            debug!(%subtree, "subtree is not rootless");
            return Err(TreeError::AlreadyAttached(subtree));
        }
        self.check_acyclic(parent, subtree)
    }

    fn check_acyclic(&self, parent: NodeId, subtree: NodeId) -> Result<(), TreeError> {
        if self.is_descendant_of(parent, subtree)? {
            debug!(%parent, %subtree, "rejecting cyclic attachment");
            return Err(TreeError::Cycle { parent, subtree });
        }
        Ok(())
    }

    /// Places the rootless `subtree` at `position`. Capacity must have been reserved.
    fn link(&mut self, parent: NodeId, subtree: NodeId, position: usize) {
        self[parent].children.insert(position, subtree);
        self[subtree].parent = Some(parent);
        self.reindex_children(parent, position);
        self.update_heights(parent);
        self.epoch += 1;
        trace!(%parent, %subtree, position, "linked subtree");
    }

    fn unlink(&mut self, node: NodeId, parent: NodeId) {
        let position = self[node].index;
        self[parent].children.remove(position);
        self.reindex_children(parent, position);
        let detached = &mut self[node];
        detached.parent = None;
        detached.index = 0;
        self.update_heights(parent);
    }

    fn reindex_children(&mut self, parent: NodeId, from: usize) {
        for position in from..self[parent].children.len() {
            let child = self[parent].children[position];
            self[child].index = position;
        }
    }

    /// Recomputes heights from `from` towards its root. Stops as soon as a height is unchanged
    /// since nothing above can change then.
    fn update_heights(&mut self, from: NodeId) {
        let mut current = Some(from);
        while let Some(id) = current {
            let height = self[id]
                .children
                .iter()
                .map(|child| self[*child].height + 1)
                .max()
                .unwrap_or(0);
            let node = &mut self[id];
            if node.height == height {
                break;
            }
            node.height = height;
            current = node.parent;
        }
    }

    // --- navigation ---

    pub fn value(&self, node: NodeId) -> Option<&T> {
        self.node(node).map(|entry| entry.get())
    }

    pub fn value_mut(&mut self, node: NodeId) -> Option<&mut T> {
        self.node_mut(node).map(Node::get_mut)
    }

    /// The absolute root, i.e., the ancestor without a parent.
    pub fn root_of(&self, node: NodeId) -> Result<NodeId, TreeError> {
        let mut current = node;
        while let Some(parent) = self.try_node(current)?.parent {
            current = parent;
        }
        Ok(current)
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node)?.parent
    }

    /// Parent of `node` as seen from the tree rooted at `tree`: `None` if `node` is that root.
    pub fn parent_in(&self, tree: NodeId, node: NodeId) -> Option<NodeId> {
        if tree == node {
            return None;
        }
        self.parent(node)
    }

    pub fn child(&self, node: NodeId, position: usize) -> Option<NodeId> {
        self.node(node)?.children.get(position).copied()
    }

    pub fn first_child(&self, node: NodeId) -> Option<NodeId> {
        self.node(node)?.children.first().copied()
    }

    pub fn last_child(&self, node: NodeId) -> Option<NodeId> {
        self.node(node)?.children.last().copied()
    }

    pub fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        let entry = self.node(node)?;
        self.child(entry.parent?, entry.index + 1)
    }

    pub fn prev_sibling(&self, node: NodeId) -> Option<NodeId> {
        let entry = self.node(node)?;
        self.child(entry.parent?, entry.index.checked_sub(1)?)
    }

    /// Follows first children down to a leaf. Returns `node` itself if it is a leaf.
    pub fn leftmost_leaf(&self, node: NodeId) -> Option<NodeId> {
        std::iter::successors(self.contains(node).then_some(node), |id| self.first_child(*id)).last()
    }

    /// Follows last children down to a leaf. Returns `node` itself if it is a leaf.
    pub fn rightmost_leaf(&self, node: NodeId) -> Option<NodeId> {
        std::iter::successors(self.contains(node).then_some(node), |id| self.last_child(*id)).last()
    }

    pub fn out_degree(&self, node: NodeId) -> Result<usize, TreeError> {
        self.try_node(node).map(|entry| entry.out_degree())
    }

    pub fn children(&self, node: NodeId) -> Result<&[NodeId], TreeError> {
        self.try_node(node).map(Node::children)
    }

    pub fn is_leaf(&self, node: NodeId) -> Result<bool, TreeError> {
        self.try_node(node).map(|entry| entry.is_leaf())
    }

    pub fn index_in_parent(&self, node: NodeId) -> Result<usize, TreeError> {
        self.try_node(node).map(Node::index)
    }

    // --- relationship queries ---

    /// Whether `descendant` lies in the subtree anchored at `node`. Every node is its own
    /// descendant.
    pub fn is_descendant_of(&self, descendant: NodeId, node: NodeId) -> Result<bool, TreeError> {
        self.try_node(node)?;
        self.try_node(descendant)?;
        Ok(std::iter::successors(Some(descendant), |id| self[*id].parent).any(|id| id == node))
    }

    pub fn is_ancestor_of(&self, ancestor: NodeId, node: NodeId) -> Result<bool, TreeError> {
        self.is_descendant_of(node, ancestor)
    }

    /// Number of edges between `tree` and `node`. Nodes outside of `tree` yield
    /// [TreeError::NotInTree], so `0` always means `node == tree`.
    pub fn depth(&self, tree: NodeId, node: NodeId) -> Result<usize, TreeError> {
        if !self.is_ancestor_of(tree, node)? {
            return Err(TreeError::NotInTree { node, tree });
        }
        Ok(std::iter::successors(Some(node), |id| self[*id].parent)
            .take_while(|id| *id != tree)
            .count())
    }

    /// Level of `node` in `tree`, counting the root as level 1.
    pub fn level(&self, tree: NodeId, node: NodeId) -> Result<usize, TreeError> {
        self.depth(tree, node).map(|depth| depth + 1)
    }

    /// Height of the tree rooted at `tree`.
    pub fn height(&self, tree: NodeId) -> Result<usize, TreeError> {
        self.height_of(tree)
    }

    pub fn height_of(&self, node: NodeId) -> Result<usize, TreeError> {
        self.try_node(node).map(|entry| entry.height())
    }
}

impl<T> Default for Forest<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<NodeId> for Forest<T> {
    type Output = Node<T>;

    /// Panics on stale handles; use [Forest::node] for a checked lookup.
    fn index(&self, id: NodeId) -> &Node<T> {
        match self.node(id) {
            Some(node) => node,
            None => panic!("Node handle {id} is stale"),
        }
    }
}

impl<T> IndexMut<NodeId> for Forest<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<T> {
        match self.node_mut(id) {
            Some(node) => node,
            None => panic!("Node handle {id} is stale"),
        }
    }
}

impl<T> fmt::Debug for Forest<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Forest")
            .field("nodes_total", &self.slots.len())
            .field("nodes_alive", &self.len)
            .field("free_list", &self.free_list.len())
            .field("epoch", &self.epoch)
            .finish_non_exhaustive()
    }
}
