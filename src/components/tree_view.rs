//! Tree View Component
//!
//! Displays the forest as indented rows with drag-to-reorder support.
//! Uses leptos-dragdrop; dropping a row on a sibling takes its slot.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_dragdrop::*;

use tree_board_core::tree::visible_rows;
use tree_board_core::{ChildLoader, Forest};

use crate::components::TreeNodeRow;
use crate::context::TreeContext;
use crate::store::TreeHandle;

/// Tree editor widget
#[component]
pub fn TreeView(
    /// Initial forest
    data: Forest,
    /// Called with every new snapshot
    #[prop(optional)]
    on_data_change: Option<Callback<Forest>>,
    /// Source for lazily loaded children
    #[prop(optional)]
    loader: Option<Arc<dyn ChildLoader>>,
) -> impl IntoView {
    let handle = TreeHandle::new(data, on_data_change);
    
    // Create DnD signals
    let dnd = create_dnd_signals();
    let ctx = TreeContext::new(handle, dnd, loader);
    provide_context(ctx);
    
    // Bind global mouseup handler for dropping
    bind_global_mouseup(
        dnd,
        move |node_id| ctx.drag_start(node_id),
        move |dragged_id, target| {
            log::debug!("[TREE] drop: dragged={}, target={:?}", dragged_id, target);
            ctx.drop_on(target);
        },
    );
    bind_global_escape(dnd, move |dragged_id| {
        log::debug!("[TREE] drag cancelled: {}", dragged_id);
        ctx.cancel_drag();
    });
    
    let rows = move || visible_rows(&handle.nodes());

    view! {
        <div class="tree-view">
            <div class="tree-header">
                <h2>"Tree View"</h2>
                <button class="add-root-btn" on:click=move |_| ctx.add_root()>
                    "+ Add Root Node"
                </button>
            </div>
            
            <div class="tree-body">
                <Show
                    when=move || !handle.nodes().is_empty()
                    fallback=|| view! {
                        <div class="tree-empty">
                            "No nodes yet. Click \"Add Root Node\" to get started."
                        </div>
                    }
                >
                    <For
                        each=rows
                        key=|(node, depth)| {
                            // Every field a row renders, so edits re-render it
                            (
                                node.id.clone(),
                                *depth,
                                node.name.clone(),
                                node.is_expanded,
                                node.is_loading,
                                node.can_expand(),
                            )
                        }
                        children=move |(node, depth)| {
                            view! { <TreeNodeRow node=node depth=depth /> }
                        }
                    />
                </Show>
            </div>
        </div>
    }
}
