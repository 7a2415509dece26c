//! Kanban Board Component
//!
//! Three columns of cards. Cards follow the pointer across columns while
//! dragging; dropping on a card in the same column reorders.

use leptos::prelude::*;
use leptos_dragdrop::*;

use tree_board_core::board::{find_card, sample_columns};
use tree_board_core::Column;

use crate::components::BoardColumn;
use crate::context::BoardContext;
use crate::store::BoardHandle;

/// Card board widget
#[component]
pub fn KanbanBoard(
    /// Columns to start from; the sample board when omitted
    #[prop(optional)]
    initial_data: Option<Vec<Column>>,
    /// Called with every new snapshot
    #[prop(optional)]
    on_data_change: Option<Callback<Vec<Column>>>,
) -> impl IntoView {
    let handle = BoardHandle::new(initial_data.unwrap_or_else(sample_columns), on_data_change);
    
    let dnd = create_dnd_signals();
    let ctx = BoardContext::new(handle, dnd);
    provide_context(ctx);
    
    bind_global_mouseup(
        dnd,
        move |card_id| ctx.drag_start(card_id),
        move |dragged_id, target| {
            log::debug!("[BOARD] drop: dragged={}, target={:?}", dragged_id, target);
            ctx.drop_on(target);
        },
    );
    bind_global_escape(dnd, move |dragged_id| {
        log::debug!("[BOARD] drag cancelled: {}", dragged_id);
        ctx.cancel_drag();
    });
    
    // Hover transitions move the card live, not only on drop
    Effect::new(move |_| {
        if let Some(target) = dnd.drop_target_read.get() {
            ctx.drag_over(target);
        }
    });
    
    let column_ids = move || {
        handle.columns().into_iter().map(|column| column.id).collect::<Vec<_>>()
    };
    
    // Title of the card under the pointer, for the overlay
    let dragged_title = move || {
        let card_id = dnd.dragging_id_read.get()?;
        find_card(&handle.columns(), &card_id).map(|card| card.title.clone())
    };

    view! {
        <div class="kanban-board">
            <p class="kanban-hint">
                "Drag and drop cards between columns to manage your workflow"
            </p>
            
            <div class="kanban-columns">
                <For
                    each=column_ids
                    key=|id| id.clone()
                    children=move |column_id| {
                        view! { <BoardColumn column_id=column_id /> }
                    }
                />
            </div>
            
            {move || dragged_title().map(|title| view! {
                <div class="drag-overlay">
                    <div class="card overlay-card">{title}</div>
                </div>
            })}
        </div>
    }
}
