//! [Arena memory allocated](https://en.wikipedia.org/wiki/Region-based_memory_management)
//! N-ary trees. Nodes live in a [Forest] and are addressed by generational [NodeId] handles,
//! parents are plain back links, and children are owned by exactly one node.

mod forest;
mod iterables;
mod node;

pub use forest::Forest;
pub use iterables::Nodelike;
pub use node::{Node, NodeId};
