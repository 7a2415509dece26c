//! Tree & Board Models
//!
//! Framework-free state for the tree editor and the card board.
//! Every operation takes a snapshot and returns a new one; untouched
//! subtrees and columns are shared with the input.

pub mod board;
pub mod drag;
pub mod error;
pub mod ids;
pub mod snapshot;
pub mod tree;

pub use board::{Card, Column};
pub use drag::{BoardDragController, HoverTarget, TreeDragController};
pub use error::{normalize_label, EditError, LoadError};
pub use ids::{IdGenerator, SequentialIds};
pub use snapshot::{commit, LocalCell, SnapshotCell};
pub use tree::{ChildLoader, Forest, NodeRef, NodeStatus, TreeNode};
