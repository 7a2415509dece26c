//! Tree Model
//!
//! Recursive forest of nodes with copy-on-write operations and
//! lazily loaded children.

mod expand;
mod node;
mod ops;
pub mod sample;

pub use expand::{begin_toggle, finish_load, toggle_expand, ChildLoader, ToggleStep};
pub use node::{Forest, NodeRef, NodeStatus, TreeNode};
pub use ops::{
    add_node, add_root, all_node_ids, delete_node, find_node, rename_node, reorder_siblings,
    update_node, visible_rows,
};
