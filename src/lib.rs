//! ## About
//!
//! Generic, order-preserving N-ary trees that can be restructured at will: subtrees can be
//! detached, attached, inserted at a position or swapped in for an existing child. Each node
//! caches its height and its position among its siblings, and both stay exact after every edit.
//!
//! Nodes are [arena allocated](https://en.wikipedia.org/wiki/Region-based_memory_management)
//! in a [Forest] and addressed by generational [NodeId] handles, so a freed node can never be
//! reached through an old handle. A tree is simply the node at its root.
//!
//! Four bidirectional traversals are available, both as resumable [Cursor]s and as
//! [Iterator]s ([Walk]): leaves only, the ancestor chain, preorder and postorder.
//!
//! ```
//! use ntree::Forest;
//!
//! let mut forest = Forest::new();
//! let root = forest.alloc("R").unwrap();
//! for value in ["A", "B", "C"] {
//!     forest.add_child(root, value).unwrap();
//! }
//! let b = forest.child(root, 1).unwrap();
//! forest.insert_child(b, "D", 0).unwrap();
//! assert_eq!(forest.height(root).unwrap(), 2);
//!
//! let order: Vec<_> = forest
//!     .iter_preorder(root)
//!     .unwrap()
//!     .map(|node| *forest.value(node).unwrap())
//!     .collect();
//! assert_eq!(order, ["R", "A", "B", "D", "C"]);
//! ```
//!
//! ## Naming conventions
//! * Traits – adjectives or nouns that indicate capability and behavior
//! * Structs – substantives that indicate entities implementing a behavior
//! * Methods – imperative forms with the exception of getters, which omit a `get_` prefix
//!   much like the standard library

pub mod arena;
pub mod errors;
pub mod traversal;

pub use arena::{Forest, Node, NodeId, Nodelike};
pub use errors::TreeError;
pub use traversal::{Ancestors, Cursor, Leaves, Postorder, Preorder, Traversal, Walk};
