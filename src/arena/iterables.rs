//! Definition of the read-only node interface

/// Container that holds a payload in a tree.
pub trait Nodelike<Load> {
    fn is_leaf(&self) -> bool;
    fn get(&self) -> &Load;

    /// Length of the longest path down to a leaf. Cached, so O(1).
    fn height(&self) -> usize;
    fn out_degree(&self) -> usize;
}
