//! Tree Node
//!
//! A node in the forest. Children are shared behind `Arc`, so cloning a
//! node or a forest never copies subtrees.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared handle to an immutable node
pub type NodeRef = Arc<TreeNode>;

/// Top-level sequence of nodes
pub type Forest = Vec<NodeRef>;

/// Expand state derived from a node's flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeStatus {
    Collapsed,
    /// Children are being fetched; the node already renders as expanded
    Loading,
    Expanded,
}

/// Tree node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    /// Unique across the whole forest
    pub id: String,
    pub name: String,
    /// `None` means not loaded yet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<NodeRef>>,
    #[serde(default)]
    pub is_expanded: bool,
    #[serde(default)]
    pub is_loading: bool,
    /// Set on nodes whose children must be fetched on first expand
    #[serde(default)]
    pub has_children: bool,
}

impl TreeNode {
    /// Collapsed node with an empty (loaded) child list
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            children: Some(Vec::new()),
            is_expanded: false,
            is_loading: false,
            has_children: false,
        }
    }

    /// Collapsed node whose children are fetched on first expand
    pub fn lazy(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            children: None,
            has_children: true,
            ..Self::new(id, name)
        }
    }

    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = Some(children.into_iter().map(Arc::new).collect());
        self
    }

    pub fn expanded(mut self) -> Self {
        self.is_expanded = true;
        self
    }

    pub fn status(&self) -> NodeStatus {
        if self.is_loading {
            NodeStatus::Loading
        } else if self.is_expanded {
            NodeStatus::Expanded
        } else {
            NodeStatus::Collapsed
        }
    }

    /// Loaded, non-empty children
    pub fn child_nodes(&self) -> &[NodeRef] {
        self.children.as_deref().unwrap_or(&[])
    }

    pub fn has_loaded_children(&self) -> bool {
        !self.child_nodes().is_empty()
    }

    /// Whether the row should offer an expand toggle
    pub fn can_expand(&self) -> bool {
        self.has_loaded_children() || self.has_children
    }

    /// Children must come from the loader before this node can show any
    pub fn needs_fetch(&self) -> bool {
        self.has_children && !self.has_loaded_children()
    }
}
