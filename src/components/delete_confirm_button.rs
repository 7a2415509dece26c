//! Delete Confirm Button Component
//!
//! Two-step delete for tree nodes and board cards. Node deletes take the
//! whole subtree with them, so the prompt names the node.

use leptos::prelude::*;

/// What a delete button removes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteSubject {
    /// A tree node and its descendants
    Node(String),
    Card,
}

impl DeleteSubject {
    pub fn prompt(&self) -> String {
        match self {
            DeleteSubject::Node(name) => format!("Delete \"{}\" and all its children?", name),
            DeleteSubject::Card => "Delete this card?".to_string(),
        }
    }
}

/// × button that swaps to an inline Delete/Cancel prompt
#[component]
pub fn DeleteConfirmButton(
    subject: DeleteSubject,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);
    let prompt = subject.prompt();

    view! {
        <Show
            when=move || confirming.get()
            fallback=move || view! {
                <button
                    class="delete-btn"
                    title="Delete"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(true);
                    }
                >
                    "×"
                </button>
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "Delete"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                    }
                >
                    "Cancel"
                </button>
            </span>
        </Show>
    }
}
