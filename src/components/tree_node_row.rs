//! Tree Node Row Component
//!
//! One row of the tree: drag handle, expand toggle, name (double-click to
//! rename), and add-child / delete actions.

use leptos::prelude::*;
use leptos_dragdrop::*;

use tree_board_core::{NodeRef, NodeStatus};

use crate::components::{DeleteConfirmButton, DeleteSubject};
use crate::context::use_tree;

/// Pixels of indentation per tree level
const INDENT_PX: usize = 24;

/// A single node row in the tree
#[component]
pub fn TreeNodeRow(
    node: NodeRef,
    depth: usize,
) -> impl IntoView {
    let ctx = use_tree();
    let dnd = ctx.dnd;
    
    let id = StoredValue::new(node.id.clone());
    let name = StoredValue::new(node.name.clone());
    let status = node.status();
    let can_expand = node.can_expand();
    let indent = depth * INDENT_PX + 12;

    let (editing, set_editing) = signal(false);
    let (edit_value, set_edit_value) = signal(node.name.clone());
    let (adding_child, set_adding_child) = signal(false);
    let (child_name, set_child_name) = signal(String::new());

    // Enter keeps a blank name open for correction; blur reverts it
    let finish_edit = move |keep_open_on_blank: bool| {
        let value = edit_value.get_untracked();
        if value.trim() == name.get_value() {
            set_editing.set(false);
            return;
        }
        match ctx.rename(&id.get_value(), &value) {
            Ok(()) => set_editing.set(false),
            Err(err) => {
                log::debug!("[TREE] rename rejected: {}", err);
                if !keep_open_on_blank {
                    set_edit_value.set(name.get_value());
                    set_editing.set(false);
                }
            }
        }
    };
    let cancel_edit = move || {
        set_edit_value.set(name.get_value());
        set_editing.set(false);
    };

    let submit_child = move || {
        if ctx.add_child(&id.get_value(), &child_name.get_untracked()).is_ok() {
            set_child_name.set(String::new());
            set_adding_child.set(false);
        }
    };
    let cancel_child = move || {
        set_child_name.set(String::new());
        set_adding_child.set(false);
    };

    // DnD handlers
    let on_mousedown = make_on_mousedown(dnd, node.id.clone());
    let on_mouseenter = make_on_item_mouseenter(dnd, node.id.clone());
    let on_mouseleave = make_on_mouseleave(dnd, None);
    
    // Visual state
    let row_class = move || {
        let current = id.get_value();
        let mut c = String::from("tree-row");
        if dnd.is_dragging(&current) { c.push_str(" dragging"); }
        if dnd.is_target(&DropTarget::Item(current)) { c.push_str(" drop-target"); }
        c
    };

    view! {
        <div class="tree-node">
            <div
                class=row_class
                style=format!("padding-left: {}px;", indent)
                on:mousedown=on_mousedown
                on:mouseenter=on_mouseenter
                on:mouseleave=on_mouseleave
            >
                <span class="drag-handle">"⠿"</span>
                
                // Expand/collapse toggle
                {if can_expand {
                    view! {
                        <button
                            class="expand-btn"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                ctx.toggle(id.get_value());
                            }
                        >
                            {match status {
                                NodeStatus::Loading => view! { <span class="spinner">"⟳"</span> }.into_any(),
                                NodeStatus::Expanded => view! { <span>"▼"</span> }.into_any(),
                                NodeStatus::Collapsed => view! { <span>"▶"</span> }.into_any(),
                            }}
                        </button>
                    }.into_any()
                } else {
                    view! { <span class="expand-placeholder"></span> }.into_any()
                }}
                
                // Name or rename input
                {move || if editing.get() {
                    view! {
                        <input
                            type="text"
                            class="node-edit-input"
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
                        <span class="node-name" on:dblclick=move |_| set_editing.set(true)>
                            {name.get_value()}
                        </span>
                    }.into_any()
                }}
                
                <div class="node-actions">
                    <button class="edit-btn" title="Edit" on:click=move |_| set_editing.set(true)>"✎"</button>
                    <button class="add-child-btn" title="Add Child" on:click=move |_| set_adding_child.set(true)>"+"</button>
                    <DeleteConfirmButton
                        subject=DeleteSubject::Node(node.name.clone())
                        on_confirm=move |_| ctx.delete(&id.get_value())
                    />
                </div>
            </div>
            
            // Add child input
            <Show when=move || adding_child.get()>
                <div class="add-child-row" style=format!("padding-left: {}px;", indent + INDENT_PX)>
                    <input
                        type="text"
                        placeholder="Enter node name..."
                        autofocus=true
                        prop:value=move || child_name.get()
                        on:input=move |ev| set_child_name.set(event_target_value(&ev))
                        on:blur=move |_| {
                            if child_name.get_untracked().trim().is_empty() {
                                set_adding_child.set(false);
                            }
                        }
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            match ev.key().as_str() {
                                "Enter" => submit_child(),
                                "Escape" => cancel_child(),
                                _ => {}
                            }
                        }
                    />
                    <button class="add-btn" on:click=move |_| submit_child()>"Add"</button>
                    <button class="cancel-btn" on:click=move |_| cancel_child()>"Cancel"</button>
                </div>
            </Show>
        </div>
    }
}
