//! Snapshot Panel Component
//!
//! Shows the latest snapshot a widget reported through `on_data_change`.

use leptos::prelude::*;

#[component]
pub fn SnapshotPanel(
    #[prop(into)] title: String,
    json: ReadSignal<String>,
) -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <div class="snapshot-panel">
            <button class="snapshot-toggle" on:click=move |_| set_open.update(|v| *v = !*v)>
                {move || if open.get() { "▼ " } else { "▶ " }}
                {title}
            </button>
            <Show when=move || open.get()>
                <pre class="snapshot-json">{move || json.get()}</pre>
            </Show>
        </div>
    }
}
