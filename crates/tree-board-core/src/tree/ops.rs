//! Forest Operations
//!
//! Pure copy-on-write transitions. Each one locates its target by id path,
//! rebuilds only the ancestors on that path and shares everything else.
//! Unknown ids leave the forest unchanged.

use std::sync::Arc;

use super::node::{Forest, NodeRef, TreeNode};
use crate::error::normalize_label;

/// Depth-first search for `id`
pub fn find_node<'a>(forest: &'a [NodeRef], id: &str) -> Option<&'a NodeRef> {
    for node in forest {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_node(node.child_nodes(), id) {
            return Some(found);
        }
    }
    None
}

/// Index path from the top-level sequence down to `id`
fn path_to(nodes: &[NodeRef], id: &str) -> Option<Vec<usize>> {
    for (index, node) in nodes.iter().enumerate() {
        if node.id == id {
            return Some(vec![index]);
        }
        if let Some(mut rest) = path_to(node.child_nodes(), id) {
            rest.insert(0, index);
            return Some(rest);
        }
    }
    None
}

/// Copy the sibling list at `parent_path` (empty = top level), let `edit`
/// change it, and rebuild the ancestors above it.
fn edit_siblings<F>(nodes: &[NodeRef], parent_path: &[usize], edit: F) -> Vec<NodeRef>
where
    F: FnOnce(&mut Vec<NodeRef>),
{
    let mut out = nodes.to_vec();
    match parent_path.split_first() {
        None => edit(&mut out),
        Some((&index, rest)) => {
            let parent = &nodes[index];
            let mut copy = TreeNode::clone(parent);
            copy.children = Some(edit_siblings(parent.child_nodes(), rest, edit));
            out[index] = Arc::new(copy);
        }
    }
    out
}

/// Replace the node `id` with `transform(node)`
pub fn update_node<F>(forest: &[NodeRef], id: &str, transform: F) -> Forest
where
    F: FnOnce(&TreeNode) -> TreeNode,
{
    let Some(path) = path_to(forest, id) else {
        log::debug!("update: node {} not found", id);
        return forest.to_vec();
    };
    let (last, parent_path) = match path.split_last() {
        Some((&last, parent_path)) => (last, parent_path),
        None => return forest.to_vec(),
    };
    edit_siblings(forest, parent_path, |siblings| {
        let updated = transform(&siblings[last]);
        siblings[last] = Arc::new(updated);
    })
}

/// Remove `id` and its whole subtree
pub fn delete_node(forest: &[NodeRef], id: &str) -> Forest {
    let Some(path) = path_to(forest, id) else {
        log::debug!("delete: node {} not found", id);
        return forest.to_vec();
    };
    match path.split_last() {
        Some((&last, parent_path)) => edit_siblings(forest, parent_path, |siblings| {
            siblings.remove(last);
        }),
        None => forest.to_vec(),
    }
}

/// Append `new_node` under `parent_id` and expand the parent
pub fn add_node(forest: &[NodeRef], parent_id: &str, new_node: TreeNode) -> Forest {
    update_node(forest, parent_id, |parent| {
        let mut children = parent.children.clone().unwrap_or_default();
        children.push(Arc::new(new_node));
        TreeNode {
            children: Some(children),
            is_expanded: true,
            ..parent.clone()
        }
    })
}

/// Append `new_node` to the top-level sequence
pub fn add_root(forest: &[NodeRef], new_node: TreeNode) -> Forest {
    let mut out = forest.to_vec();
    out.push(Arc::new(new_node));
    out
}

/// Rename `id`; blank names are rejected and leave the forest unchanged
pub fn rename_node(forest: &[NodeRef], id: &str, new_name: &str) -> Forest {
    match normalize_label(new_name) {
        Ok(name) => update_node(forest, id, |node| TreeNode {
            name,
            ..node.clone()
        }),
        Err(err) => {
            log::debug!("rename of {} rejected: {}", id, err);
            forest.to_vec()
        }
    }
}

/// Move `active_id` into `over_id`'s slot when both share one sibling list
pub fn reorder_siblings(forest: &[NodeRef], active_id: &str, over_id: &str) -> Forest {
    if active_id == over_id {
        return forest.to_vec();
    }
    let (Some(from), Some(to)) = (path_to(forest, active_id), path_to(forest, over_id)) else {
        return forest.to_vec();
    };
    let (Some((&from_index, from_parent)), Some((&to_index, to_parent))) =
        (from.split_last(), to.split_last())
    else {
        return forest.to_vec();
    };
    if from_parent != to_parent {
        log::debug!(
            "reorder: {} and {} are not siblings, ignoring",
            active_id,
            over_id
        );
        return forest.to_vec();
    }
    edit_siblings(forest, from_parent, |siblings| {
        let moved = siblings.remove(from_index);
        siblings.insert(to_index, moved);
    })
}

/// Every id in depth-first pre-order, including collapsed subtrees
pub fn all_node_ids(forest: &[NodeRef]) -> Vec<String> {
    fn collect(nodes: &[NodeRef], out: &mut Vec<String>) {
        for node in nodes {
            out.push(node.id.clone());
            collect(node.child_nodes(), out);
        }
    }
    let mut ids = Vec::new();
    collect(forest, &mut ids);
    ids
}

/// Rows to render as (node, depth), descending only into expanded nodes
pub fn visible_rows(forest: &[NodeRef]) -> Vec<(NodeRef, usize)> {
    fn collect(nodes: &[NodeRef], depth: usize, out: &mut Vec<(NodeRef, usize)>) {
        for node in nodes {
            out.push((node.clone(), depth));
            if node.is_expanded {
                collect(node.child_nodes(), depth + 1, out);
            }
        }
    }
    let mut rows = Vec::new();
    collect(forest, 0, &mut rows);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    /// root-1 [a [a1, a2], b], root-2
    fn sample() -> Forest {
        vec![
            Arc::new(
                TreeNode::new("root-1", "Root")
                    .with_children(vec![
                        TreeNode::new("a", "A").with_children(vec![
                            TreeNode::new("a1", "A1"),
                            TreeNode::new("a2", "A2"),
                        ]),
                        TreeNode::new("b", "B"),
                    ])
                    .expanded(),
            ),
            Arc::new(TreeNode::lazy("root-2", "Lazy")),
        ]
    }

    fn child_ids(node: &TreeNode) -> Vec<&str> {
        node.child_nodes().iter().map(|n| n.id.as_str()).collect()
    }

    fn top_ids(forest: &[NodeRef]) -> Vec<&str> {
        forest.iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn test_find_node_depth_first() {
        let forest = sample();
        assert_eq!(find_node(&forest, "a2").map(|n| n.name.as_str()), Some("A2"));
        assert!(find_node(&forest, "missing").is_none());
    }

    #[test]
    fn test_update_node_shares_untouched_branches() {
        let forest = sample();
        let updated = update_node(&forest, "a1", |n| TreeNode {
            name: "Renamed".into(),
            ..n.clone()
        });

        assert_eq!(find_node(&updated, "a1").unwrap().name, "Renamed");
        // Unrelated branches are the same allocations
        assert!(Arc::ptr_eq(&forest[1], &updated[1]));
        let old_b = find_node(&forest, "b").unwrap();
        let new_b = find_node(&updated, "b").unwrap();
        assert!(Arc::ptr_eq(old_b, new_b));
        let old_a2 = find_node(&forest, "a2").unwrap();
        let new_a2 = find_node(&updated, "a2").unwrap();
        assert!(Arc::ptr_eq(old_a2, new_a2));
        // Ancestors were copied
        assert!(!Arc::ptr_eq(&forest[0], &updated[0]));
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let forest = sample();
        let updated = update_node(&forest, "nope", |n| n.clone().expanded());
        assert_eq!(updated, forest);
        assert!(updated.iter().zip(&forest).all(|(a, b)| Arc::ptr_eq(a, b)));
    }

    #[test]
    fn test_delete_removes_subtree() {
        let forest = sample();
        let pruned = delete_node(&forest, "a");
        for id in ["a", "a1", "a2"] {
            assert!(find_node(&pruned, id).is_none(), "{} should be gone", id);
        }
        assert_eq!(child_ids(&pruned[0]), vec!["b"]);
        assert!(Arc::ptr_eq(&forest[1], &pruned[1]));
    }

    #[test]
    fn test_delete_root() {
        let pruned = delete_node(&sample(), "root-1");
        assert_eq!(top_ids(&pruned), vec!["root-2"]);
    }

    #[test]
    fn test_add_node_expands_parent() {
        let forest = sample();
        let grown = add_node(&forest, "b", TreeNode::new("b1", "B1"));
        let parent = find_node(&grown, "b").unwrap();
        assert!(parent.is_expanded);
        assert_eq!(child_ids(parent), vec!["b1"]);
    }

    #[test]
    fn test_add_node_to_unloaded_parent_creates_children() {
        let grown = add_node(&sample(), "root-2", TreeNode::new("x", "X"));
        let parent = find_node(&grown, "root-2").unwrap();
        assert_eq!(child_ids(parent), vec!["x"]);
    }

    #[test]
    fn test_add_node_missing_parent_is_noop() {
        let forest = sample();
        assert_eq!(add_node(&forest, "ghost", TreeNode::new("x", "X")), forest);
    }

    #[test]
    fn test_add_root_appends() {
        let grown = add_root(&sample(), TreeNode::new("root-3", "New Node"));
        assert_eq!(top_ids(&grown), vec!["root-1", "root-2", "root-3"]);
    }

    #[test]
    fn test_rename_rejects_blank() {
        let forest = sample();
        assert_eq!(rename_node(&forest, "a", "   "), forest);
        let renamed = rename_node(&forest, "a", "  Alpha ");
        assert_eq!(find_node(&renamed, "a").unwrap().name, "Alpha");
    }

    #[test]
    fn test_reorder_within_nested_siblings() {
        let forest = sample();
        let moved = reorder_siblings(&forest, "a2", "a1");
        assert_eq!(child_ids(find_node(&moved, "a").unwrap()), vec!["a2", "a1"]);
    }

    #[test]
    fn test_reorder_round_trip() {
        let forest = vec![
            Arc::new(TreeNode::new("1", "1")),
            Arc::new(TreeNode::new("2", "2")),
            Arc::new(TreeNode::new("3", "3")),
            Arc::new(TreeNode::new("4", "4")),
        ];
        let there = reorder_siblings(&forest, "2", "3");
        assert_eq!(top_ids(&there), vec!["1", "3", "2", "4"]);
        let back = reorder_siblings(&there, "3", "2");
        assert_eq!(back, forest);
    }

    #[test]
    fn test_reorder_shifts_intervening_siblings() {
        let forest = vec![
            Arc::new(TreeNode::new("1", "1")),
            Arc::new(TreeNode::new("2", "2")),
            Arc::new(TreeNode::new("3", "3")),
            Arc::new(TreeNode::new("4", "4")),
        ];
        let down = reorder_siblings(&forest, "1", "3");
        assert_eq!(top_ids(&down), vec!["2", "3", "1", "4"]);
        let up = reorder_siblings(&forest, "4", "2");
        assert_eq!(top_ids(&up), vec!["1", "4", "2", "3"]);
        // Moving back onto the slot's new occupant restores the order
        assert_eq!(reorder_siblings(&down, "1", "2"), forest);
    }

    #[test]
    fn test_reorder_across_parents_is_noop() {
        let forest = sample();
        assert_eq!(reorder_siblings(&forest, "a1", "b"), forest);
        assert_eq!(reorder_siblings(&forest, "a", "root-2"), forest);
        assert_eq!(reorder_siblings(&forest, "a", "a"), forest);
    }

    #[test]
    fn test_all_node_ids_preorder() {
        assert_eq!(
            all_node_ids(&sample()),
            vec!["root-1", "a", "a1", "a2", "b", "root-2"]
        );
    }

    #[test]
    fn test_visible_rows_skip_collapsed() {
        let rows = visible_rows(&sample());
        let rendered: Vec<(&str, usize)> = rows.iter().map(|(n, d)| (n.id.as_str(), *d)).collect();
        // "a" is collapsed, so a1/a2 are hidden
        assert_eq!(rendered, vec![("root-1", 0), ("a", 1), ("b", 1), ("root-2", 0)]);
    }
}
