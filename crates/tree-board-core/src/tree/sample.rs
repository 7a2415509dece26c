//! Demo Forest
//!
//! Project-style sample tree with a few lazily loaded folders, plus the
//! canned children a demo loader hands out for them.

use std::sync::Arc;

use super::node::{Forest, TreeNode};

pub fn sample_forest() -> Forest {
    vec![
        Arc::new(
            TreeNode::new("root-1", "Project Root")
                .with_children(vec![
                    TreeNode::new("node-1-1", "src").with_children(vec![
                        TreeNode::lazy("node-1-1-1", "components"),
                        TreeNode::lazy("node-1-1-2", "utils"),
                        TreeNode::new("node-1-1-3", "styles"),
                    ]),
                    TreeNode::new("node-1-2", "public").with_children(vec![
                        TreeNode::new("node-1-2-1", "images"),
                        TreeNode::new("node-1-2-2", "fonts"),
                    ]),
                    TreeNode::new("node-1-3", "package.json"),
                ])
                .expanded(),
        ),
        Arc::new(TreeNode::lazy("root-2", "Documentation")),
    ]
}

/// Children served for `node_id`; unknown ids get none
pub fn sample_children(node_id: &str) -> Vec<TreeNode> {
    let names: &[&str] = match node_id {
        "node-1-1-1" => &["Button.tsx", "Input.tsx", "Modal.tsx"],
        "node-1-1-2" => &["helpers.ts", "validators.ts"],
        "root-2" => &["README.md", "API.md", "CONTRIBUTING.md"],
        _ => &[],
    };
    names
        .iter()
        .enumerate()
        .map(|(i, name)| TreeNode::new(format!("{}-{}", node_id, i + 1), *name))
        .collect()
}
