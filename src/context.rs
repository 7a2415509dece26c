//! Widget Contexts
//!
//! Shared per-widget state provided via Leptos Context API. Rows, columns
//! and cards forward user intent through these; none of them touch the
//! model directly.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{DndSignals, DropTarget};

use tree_board_core::board::{add_card, delete_card, rename_card};
use tree_board_core::tree::{add_node, add_root, delete_node, rename_node, toggle_expand};
use tree_board_core::{
    normalize_label, BoardDragController, ChildLoader, EditError, HoverTarget, IdGenerator,
    SnapshotCell, TreeDragController, TreeNode,
};

use crate::ids::BrowserIds;
use crate::store::{BoardHandle, TreeHandle};

/// Name given to roots created from the toolbar
pub const NEW_ROOT_NAME: &str = "New Node";

/// Tree widget context
#[derive(Clone, Copy)]
pub struct TreeContext {
    pub handle: TreeHandle,
    pub dnd: DndSignals,
    pub drag: StoredValue<TreeDragController>,
    loader: StoredValue<Option<Arc<dyn ChildLoader>>>,
}

impl TreeContext {
    pub fn new(handle: TreeHandle, dnd: DndSignals, loader: Option<Arc<dyn ChildLoader>>) -> Self {
        Self {
            handle,
            dnd,
            drag: StoredValue::new(TreeDragController::new()),
            loader: StoredValue::new(loader),
        }
    }

    /// Expand or collapse; may start a background fetch
    pub fn toggle(&self, node_id: String) {
        let handle = self.handle;
        let loader = self.loader.get_value();
        spawn_local(async move {
            toggle_expand(&handle, loader.as_deref(), &node_id).await;
        });
    }

    /// Add a child under `parent_id`. Blank names are handed back as errors
    /// so the input can stay open.
    pub fn add_child(&self, parent_id: &str, raw_name: &str) -> Result<(), EditError> {
        let name = normalize_label(raw_name)?;
        let node = TreeNode::new(BrowserIds.next_id("node"), name);
        self.handle.apply(|forest| add_node(forest, parent_id, node));
        Ok(())
    }

    pub fn add_root(&self) {
        let node = TreeNode::new(BrowserIds.next_id("node"), NEW_ROOT_NAME);
        self.handle.apply(|forest| add_root(forest, node));
    }

    pub fn rename(&self, node_id: &str, raw_name: &str) -> Result<(), EditError> {
        let name = normalize_label(raw_name)?;
        self.handle.apply(|forest| rename_node(forest, node_id, &name));
        Ok(())
    }

    pub fn delete(&self, node_id: &str) {
        self.handle.apply(|forest| delete_node(forest, node_id));
    }

    pub fn drag_start(&self, node_id: String) {
        self.drag.update_value(|drag| drag.drag_start(node_id));
    }

    pub fn drop_on(&self, target: Option<DropTarget>) {
        let over = match target {
            Some(DropTarget::Item(id)) => Some(id),
            _ => None,
        };
        let forest = self.handle.current();
        let next = self
            .drag
            .try_update_value(|drag| drag.drag_end(&forest, over.as_deref()))
            .flatten();
        if let Some(next) = next {
            self.handle.apply(|_| next);
        }
    }

    pub fn cancel_drag(&self) {
        self.drag.update_value(|drag| drag.cancel());
    }
}

pub fn use_tree() -> TreeContext {
    expect_context::<TreeContext>()
}

/// Board widget context
#[derive(Clone, Copy)]
pub struct BoardContext {
    pub handle: BoardHandle,
    pub dnd: DndSignals,
    pub drag: StoredValue<BoardDragController>,
}

/// Map a drag-plumbing target onto the board's hover vocabulary
pub fn hover_target(target: DropTarget) -> HoverTarget {
    match target {
        DropTarget::Item(card_id) => HoverTarget::Card(card_id),
        DropTarget::Container(column_id) => HoverTarget::Column(column_id),
    }
}

impl BoardContext {
    pub fn new(handle: BoardHandle, dnd: DndSignals) -> Self {
        Self {
            handle,
            dnd,
            drag: StoredValue::new(BoardDragController::new()),
        }
    }

    pub fn add_card(&self, column_id: &str, raw_title: &str) -> Result<(), EditError> {
        let title = normalize_label(raw_title)?;
        self.handle
            .apply(|columns| add_card(columns, column_id, &title, &mut BrowserIds));
        Ok(())
    }

    pub fn rename_card(&self, card_id: &str, raw_title: &str) -> Result<(), EditError> {
        let title = normalize_label(raw_title)?;
        self.handle
            .apply(|columns| rename_card(columns, card_id, &title));
        Ok(())
    }

    pub fn delete_card(&self, card_id: &str) {
        self.handle.apply(|columns| delete_card(columns, card_id));
    }

    pub fn drag_start(&self, card_id: String) {
        let columns = self.handle.current();
        self.drag.update_value(|drag| {
            drag.drag_start(&columns, &card_id);
        });
    }

    /// Live hover: cross-column moves happen here, before the drop
    pub fn drag_over(&self, target: DropTarget) {
        let hover = hover_target(target);
        let columns = self.handle.current();
        let next = self
            .drag
            .try_update_value(|drag| drag.drag_over(&columns, &hover))
            .flatten();
        if let Some(next) = next {
            self.handle.apply(|_| next);
        }
    }

    pub fn drop_on(&self, target: Option<DropTarget>) {
        let hover = target.map(hover_target);
        let columns = self.handle.current();
        let next = self
            .drag
            .try_update_value(|drag| drag.drag_end(&columns, hover.as_ref()))
            .flatten();
        if let Some(next) = next {
            self.handle.apply(|_| next);
        }
    }

    /// Escape mid-drag; hover moves already made stay on the board
    pub fn cancel_drag(&self) {
        self.drag.update_value(|drag| drag.cancel());
    }
}

pub fn use_board() -> BoardContext {
    expect_context::<BoardContext>()
}
