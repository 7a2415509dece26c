//! Expand / Collapse
//!
//! Per-node state machine: collapsed -> loading -> expanded when children
//! must be fetched, a plain collapsed <-> expanded flip otherwise.
//! A failed fetch reverts the optimistic expand.

use async_trait::async_trait;
use std::sync::Arc;

use super::node::{Forest, NodeRef, TreeNode};
use super::ops::{find_node, update_node};
use crate::error::LoadError;
use crate::snapshot::{commit, SnapshotCell};

/// Asynchronous source of a node's children.
/// Must resolve or fail; callers apply no timeout.
#[async_trait(?Send)]
pub trait ChildLoader: Send + Sync {
    async fn load_children(&self, node_id: &str) -> Result<Vec<TreeNode>, LoadError>;
}

/// Outcome of the synchronous half of a toggle
#[derive(Debug, Clone, PartialEq)]
pub enum ToggleStep {
    /// No node with that id
    Missing,
    /// A fetch for this node is already outstanding
    Busy,
    /// Expanded flag flipped, nothing to fetch
    Flip(Forest),
    /// Node marked loading + expanded; children must be requested
    Fetch(Forest),
}

/// Decide what toggling `node_id` does
pub fn begin_toggle(forest: &[NodeRef], node_id: &str, loader_available: bool) -> ToggleStep {
    let Some(node) = find_node(forest, node_id) else {
        return ToggleStep::Missing;
    };
    if node.is_loading {
        return ToggleStep::Busy;
    }
    if !node.is_expanded && loader_available && node.needs_fetch() {
        ToggleStep::Fetch(update_node(forest, node_id, |n| TreeNode {
            is_loading: true,
            is_expanded: true,
            ..n.clone()
        }))
    } else {
        ToggleStep::Flip(update_node(forest, node_id, |n| TreeNode {
            is_expanded: !n.is_expanded,
            ..n.clone()
        }))
    }
}

/// Apply a loader outcome to `forest`. No-op if the node is gone.
pub fn finish_load(
    forest: &[NodeRef],
    node_id: &str,
    outcome: Result<Vec<TreeNode>, LoadError>,
) -> Forest {
    match outcome {
        Ok(children) => {
            log::info!("loaded {} children for {}", children.len(), node_id);
            update_node(forest, node_id, |n| TreeNode {
                children: Some(children.into_iter().map(Arc::new).collect()),
                is_loading: false,
                ..n.clone()
            })
        }
        Err(err) => {
            log::warn!("Failed to load children for {}: {}", node_id, err);
            update_node(forest, node_id, |n| TreeNode {
                is_loading: false,
                is_expanded: false,
                ..n.clone()
            })
        }
    }
}

/// Toggle `node_id` in `cell`, fetching children through `loader` if needed.
///
/// The loader result is applied to the snapshot current at completion, so
/// edits made while the fetch was outstanding survive, and a node deleted in
/// the meantime simply absorbs nothing.
pub async fn toggle_expand<C, L>(cell: &C, loader: Option<&L>, node_id: &str)
where
    C: SnapshotCell<Forest> + ?Sized,
    L: ChildLoader + ?Sized,
{
    let step = begin_toggle(&cell.current(), node_id, loader.is_some());
    match step {
        ToggleStep::Missing => log::debug!("toggle: node {} not found", node_id),
        ToggleStep::Busy => log::debug!("toggle: {} is still loading", node_id),
        ToggleStep::Flip(next) => cell.replace(next),
        ToggleStep::Fetch(next) => {
            cell.replace(next);
            let Some(loader) = loader else {
                return;
            };
            let outcome = loader.load_children(node_id).await;
            commit(cell, |current: &Forest| finish_load(current, node_id, outcome));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::LocalCell;
    use crate::tree::ops::{delete_node, rename_node};
    use std::cell::Cell;
    use std::rc::Rc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use tokio::sync::oneshot;

    type Outcome = Result<Vec<TreeNode>, LoadError>;

    /// Loader that waits until the test releases it
    struct GatedLoader {
        gate: Mutex<Option<oneshot::Receiver<Outcome>>>,
        calls: AtomicUsize,
    }

    impl GatedLoader {
        fn new(gate: oneshot::Receiver<Outcome>) -> Self {
            Self {
                gate: Mutex::new(Some(gate)),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait(?Send)]
    impl ChildLoader for GatedLoader {
        async fn load_children(&self, node_id: &str) -> Result<Vec<TreeNode>, LoadError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let gate = self.gate.lock().unwrap().take();
            match gate {
                Some(rx) => rx
                    .await
                    .unwrap_or_else(|_| Err(LoadError::Failed("gate dropped".into()))),
                None => Err(LoadError::Failed(format!("no gate for {}", node_id))),
            }
        }
    }

    fn forest() -> Forest {
        vec![
            Arc::new(TreeNode::new("src", "src").with_children(vec![TreeNode::new("lib", "lib.rs")])),
            Arc::new(TreeNode::lazy("docs", "Documentation")),
        ]
    }

    fn node(cell: &LocalCell<Forest>, id: &str) -> Option<TreeNode> {
        find_node(&cell.current(), id).map(|n| TreeNode::clone(n))
    }

    #[test]
    fn test_begin_toggle_states() {
        let f = forest();
        assert_eq!(begin_toggle(&f, "ghost", true), ToggleStep::Missing);
        assert!(matches!(begin_toggle(&f, "src", true), ToggleStep::Flip(_)));
        assert!(matches!(begin_toggle(&f, "docs", true), ToggleStep::Fetch(_)));
        // Without a loader a lazy node just flips open
        assert!(matches!(begin_toggle(&f, "docs", false), ToggleStep::Flip(_)));

        let ToggleStep::Fetch(loading) = begin_toggle(&f, "docs", true) else {
            panic!("expected fetch");
        };
        assert_eq!(begin_toggle(&loading, "docs", true), ToggleStep::Busy);
    }

    #[tokio::test]
    async fn test_lazy_expand_loading_then_children() {
        let cell = LocalCell::new(forest());
        let (tx, rx) = oneshot::channel();
        let loader = GatedLoader::new(rx);

        let release = async {
            tokio::task::yield_now().await;
            let docs = node(&cell, "docs").unwrap();
            assert!(docs.is_loading);
            assert!(docs.is_expanded);
            tx.send(Ok(vec![TreeNode::new("x", "X"), TreeNode::new("y", "Y")]))
                .unwrap();
        };
        tokio::join!(toggle_expand(&cell, Some(&loader), "docs"), release);

        let docs = node(&cell, "docs").unwrap();
        assert!(!docs.is_loading);
        assert!(docs.is_expanded);
        let ids: Vec<&str> = docs.child_nodes().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["x", "y"]);
        assert_eq!(loader.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_load_reverts_expand() {
        let cell = LocalCell::new(forest());
        let (tx, rx) = oneshot::channel();
        let loader = GatedLoader::new(rx);
        tx.send(Err(LoadError::Failed("offline".into()))).unwrap();

        toggle_expand(&cell, Some(&loader), "docs").await;

        let docs = node(&cell, "docs").unwrap();
        assert!(!docs.is_loading);
        assert!(!docs.is_expanded);
        assert!(docs.children.is_none());
    }

    #[tokio::test]
    async fn test_second_toggle_while_loading_does_not_refetch() {
        let cell = LocalCell::new(forest());
        let (tx, rx) = oneshot::channel();
        let loader = GatedLoader::new(rx);

        let again = async {
            tokio::task::yield_now().await;
            toggle_expand(&cell, Some(&loader), "docs").await;
            assert!(node(&cell, "docs").unwrap().is_loading);
            tx.send(Ok(vec![TreeNode::new("x", "X")])).unwrap();
        };
        tokio::join!(toggle_expand(&cell, Some(&loader), "docs"), again);

        assert_eq!(loader.calls.load(Ordering::SeqCst), 1);
        assert!(node(&cell, "docs").unwrap().is_expanded);
    }

    #[tokio::test]
    async fn test_late_result_for_deleted_node_is_dropped() {
        let notified = Rc::new(Cell::new(0));
        let seen = notified.clone();
        let cell = LocalCell::with_listener(forest(), move |_| seen.set(seen.get() + 1));
        let (tx, rx) = oneshot::channel();
        let loader = GatedLoader::new(rx);

        let interfere = async {
            tokio::task::yield_now().await;
            commit(&cell, |f: &Forest| delete_node(f, "docs"));
            tx.send(Ok(vec![TreeNode::new("x", "X")])).unwrap();
        };
        tokio::join!(toggle_expand(&cell, Some(&loader), "docs"), interfere);

        assert!(node(&cell, "docs").is_none());
        assert!(node(&cell, "x").is_none());
        // loading commit + delete; the late result changed nothing
        assert_eq!(notified.get(), 2);
    }

    #[tokio::test]
    async fn test_edits_during_load_are_kept() {
        let cell = LocalCell::new(forest());
        let (tx, rx) = oneshot::channel();
        let loader = GatedLoader::new(rx);

        let interfere = async {
            tokio::task::yield_now().await;
            commit(&cell, |f: &Forest| rename_node(f, "src", "source"));
            tx.send(Ok(vec![TreeNode::new("x", "X")])).unwrap();
        };
        tokio::join!(toggle_expand(&cell, Some(&loader), "docs"), interfere);

        assert_eq!(node(&cell, "src").unwrap().name, "source");
        assert!(node(&cell, "x").is_some());
    }

    #[tokio::test]
    async fn test_cached_children_flip_without_loader_call() {
        let cell = LocalCell::new(forest());
        let (_tx, rx) = oneshot::channel();
        let loader = GatedLoader::new(rx);

        toggle_expand(&cell, Some(&loader), "src").await;
        assert!(node(&cell, "src").unwrap().is_expanded);
        toggle_expand(&cell, Some(&loader), "src").await;
        assert!(!node(&cell, "src").unwrap().is_expanded);
        assert_eq!(loader.calls.load(Ordering::SeqCst), 0);
    }
}
