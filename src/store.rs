//! Widget Snapshot Stores
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Each widget owns
//! one store; the handles below expose it to the model layer as a
//! `SnapshotCell` and forward every replaced snapshot to `on_data_change`.

use leptos::prelude::*;
use reactive_stores::Store;

use tree_board_core::{commit, Column, Forest, SnapshotCell};

/// Tree widget state
#[derive(Clone, Debug, Default, Store)]
pub struct TreeState {
    /// Top-level nodes
    pub nodes: Forest,
}

/// Board widget state
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    pub columns: Vec<Column>,
}

/// Tree store plus its change callback
#[derive(Clone, Copy)]
pub struct TreeHandle {
    store: Store<TreeState>,
    on_change: Option<Callback<Forest>>,
}

impl TreeHandle {
    pub fn new(nodes: Forest, on_change: Option<Callback<Forest>>) -> Self {
        Self {
            store: Store::new(TreeState { nodes }),
            on_change,
        }
    }

    /// Current forest, tracked
    pub fn nodes(&self) -> Forest {
        self.store.nodes().get()
    }

    /// Run a model transition; notifies only if something changed
    pub fn apply(&self, transition: impl FnOnce(&Forest) -> Forest) -> bool {
        commit(self, transition)
    }
}

impl SnapshotCell<Forest> for TreeHandle {
    fn current(&self) -> Forest {
        self.store.nodes().get_untracked()
    }

    fn replace(&self, next: Forest) {
        *self.store.nodes().write() = next.clone();
        if let Some(on_change) = self.on_change {
            on_change.run(next);
        }
    }
}

/// Board store plus its change callback
#[derive(Clone, Copy)]
pub struct BoardHandle {
    store: Store<BoardState>,
    on_change: Option<Callback<Vec<Column>>>,
}

impl BoardHandle {
    pub fn new(columns: Vec<Column>, on_change: Option<Callback<Vec<Column>>>) -> Self {
        Self {
            store: Store::new(BoardState { columns }),
            on_change,
        }
    }

    /// Current columns, tracked
    pub fn columns(&self) -> Vec<Column> {
        self.store.columns().get()
    }

    /// One column by id, tracked
    pub fn column(&self, column_id: &str) -> Option<Column> {
        self.store
            .columns()
            .with(|columns| columns.iter().find(|c| c.id == column_id).cloned())
    }

    pub fn apply(&self, transition: impl FnOnce(&Vec<Column>) -> Vec<Column>) -> bool {
        commit(self, transition)
    }
}

impl SnapshotCell<Vec<Column>> for BoardHandle {
    fn current(&self) -> Vec<Column> {
        self.store.columns().get_untracked()
    }

    fn replace(&self, next: Vec<Column>) {
        *self.store.columns().write() = next.clone();
        if let Some(on_change) = self.on_change {
            on_change.run(next);
        }
    }
}
