//! Board Card Component

use leptos::prelude::*;
use leptos_dragdrop::*;

use tree_board_core::Card;

use crate::components::{DeleteConfirmButton, DeleteSubject};
use crate::context::use_board;

#[component]
pub fn BoardCard(
    card: Card,
) -> impl IntoView {
    let ctx = use_board();
    let dnd = ctx.dnd;
    
    let id = StoredValue::new(card.id.clone());
    let title = StoredValue::new(card.title.clone());
    let (editing, set_editing) = signal(false);
    let (edit_value, set_edit_value) = signal(card.title.clone());
    
    let finish_edit = move |keep_open_on_blank: bool| {
        let value = edit_value.get_untracked();
        if value.trim() == title.get_value() {
            set_editing.set(false);
            return;
        }
        match ctx.rename_card(&id.get_value(), &value) {
            Ok(()) => set_editing.set(false),
            Err(err) => {
                log::debug!("[BOARD] rename rejected: {}", err);
                if !keep_open_on_blank {
                    set_edit_value.set(title.get_value());
                    set_editing.set(false);
                }
            }
        }
    };
    let cancel_edit = move || {
        set_edit_value.set(title.get_value());
        set_editing.set(false);
    };
    
    // Leaving a card while dragging falls back to its column
    let on_mousedown = make_on_mousedown(dnd, card.id.clone());
    let on_mouseenter = make_on_item_mouseenter(dnd, card.id.clone());
    let on_mouseleave = make_on_mouseleave(dnd, Some(DropTarget::Container(card.column_id.clone())));
    
    let card_class = move || {
        let current = id.get_value();
        let mut c = String::from("card");
        if dnd.is_dragging(&current) { c.push_str(" dragging"); }
        if dnd.is_target(&DropTarget::Item(current)) { c.push_str(" drop-target"); }
        c
    };

    view! {
        <div
            class=card_class
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            {move || if editing.get() {
                view! {
                    <input
                        type="text"
                        class="card-edit-input"
                        autofocus=true
                        prop:value=move || edit_value.get()
                        on:input=move |ev| set_edit_value.set(event_target_value(&ev))
                        on:blur=move |_| finish_edit(false)
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            match ev.key().as_str() {
                                "Enter" => finish_edit(true),
                                "Escape" => cancel_edit(),
                                _ => {}
                            }
                        }
                    />
                }.into_any()
            } else {
                view! {
                    <div class="card-body">
                        <span
                            class="card-title"
                            on:dblclick=move |_| {
                                // A drag that just ended is not an edit request
                                if !dnd.drag_just_ended_read.get_untracked() {
                                    set_editing.set(true);
                                }
                            }
                        >
                            {title.get_value()}
                        </span>
                        <div class="card-actions">
                            <button class="edit-btn" title="Edit" on:click=move |_| set_editing.set(true)>"✎"</button>
                            <DeleteConfirmButton
                                subject=DeleteSubject::Card
                                on_confirm=move |_| ctx.delete_card(&id.get_value())
                            />
                        </div>
                    </div>
                }.into_any()
            }}
        </div>
    }
}
