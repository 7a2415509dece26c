//! Board Column Component
//!
//! Column header with card count, the card list, and the add-card form.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::BoardCard;
use crate::context::use_board;

/// A board column, read live from the board store by id
#[component]
pub fn BoardColumn(
    column_id: String,
) -> impl IntoView {
    let ctx = use_board();
    let dnd = ctx.dnd;
    let handle = ctx.handle;
    let id = StoredValue::new(column_id.clone());
    
    let column = move || handle.column(&id.get_value());
    let title = move || column().map(|c| c.title).unwrap_or_default();
    let cards = move || column().map(|c| c.cards).unwrap_or_default();
    let accent = move || column().map(|c| c.accent().as_str()).unwrap_or("gray");
    
    let (adding, set_adding) = signal(false);
    let (new_title, set_new_title) = signal(String::new());
    
    let submit = move || {
        if ctx.add_card(&id.get_value(), &new_title.get_untracked()).is_ok() {
            set_new_title.set(String::new());
            set_adding.set(false);
        }
    };
    let cancel = move || {
        set_new_title.set(String::new());
        set_adding.set(false);
    };
    
    let column_class = move || {
        let mut c = String::from("board-column");
        if dnd.is_target(&DropTarget::Container(id.get_value())) { c.push_str(" drop-target"); }
        c
    };

    view! {
        <div
            class=column_class
            on:mouseenter=make_on_container_mouseenter(dnd, column_id.clone())
            on:mouseleave=make_on_mouseleave(dnd, None)
        >
            <div class="column-header">
                <span class=move || format!("column-accent {}", accent())></span>
                <h3 class="column-title">{title}</h3>
                <span class="card-count">{move || cards().len()}</span>
            </div>
            
            <div class="column-cards">
                <For
                    each=cards
                    key=|card| (card.id.clone(), card.title.clone())
                    children=move |card| view! { <BoardCard card=card /> }
                />
            </div>
            
            <div class="column-footer">
                {move || if adding.get() {
                    view! {
                        <div class="add-card-form">
                            <textarea
                                placeholder="Enter card title..."
                                rows=2
                                autofocus=true
                                prop:value=move || new_title.get()
                                on:input=move |ev| set_new_title.set(event_target_value(&ev))
                                on:keydown=move |ev: web_sys::KeyboardEvent| {
                                    match ev.key().as_str() {
                                        "Enter" if !ev.shift_key() => {
                                            ev.prevent_default();
                                            submit();
                                        }
                                        "Escape" => cancel(),
                                        _ => {}
                                    }
                                }
                            ></textarea>
                            <div class="add-card-actions">
                                <button class="add-btn" on:click=move |_| submit()>"Add Card"</button>
                                <button class="cancel-btn" on:click=move |_| cancel()>"Cancel"</button>
                            </div>
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <button class="add-card-btn" on:click=move |_| set_adding.set(true)>
                            "+ Add a card"
                        </button>
                    }.into_any()
                }}
            </div>
        </div>
    }
}
