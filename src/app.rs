//! Demo App
//!
//! Home page plus the tree and board demos. All pages stay mounted and are
//! hidden when inactive, so each widget keeps its snapshot across tabs.

use std::sync::Arc;

use leptos::prelude::*;
use serde::Serialize;

use tree_board_core::board::sample_columns;
use tree_board_core::tree::sample::sample_forest;
use tree_board_core::{ChildLoader, Column, Forest};

use crate::components::{KanbanBoard, NavBar, Page, SnapshotPanel, TreeView};
use crate::loader::DemoLoader;

/// Pretty JSON for the snapshot panels
fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|err| format!("serialization failed: {}", err))
}

fn page_class(current: Page, own: Page) -> &'static str {
    if current == own { "page" } else { "page hidden" }
}

#[component]
fn HomePage(set_page: WriteSignal<Page>) -> impl IntoView {
    view! {
        <div class="home">
            <h1>"Component Showcase"</h1>
            <p>"Interactive widgets built on a copy-on-write model layer."</p>
            <div class="home-cards">
                <button class="home-card" on:click=move |_| set_page.set(Page::Board)>
                    <h2>"Kanban Board"</h2>
                    <p>"Three columns of cards: add, rename, delete, and drag between columns."</p>
                </button>
                <button class="home-card" on:click=move |_| set_page.set(Page::Tree)>
                    <h2>"Tree View"</h2>
                    <p>"Hierarchical nodes with expand/collapse, lazy loading, editing and drag to reorder."</p>
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn App() -> impl IntoView {
    let (page, set_page) = signal(Page::Home);

    // Tree demo
    let initial_tree = sample_forest();
    let (tree_json, set_tree_json) = signal(to_json(&initial_tree));
    let on_tree_change = Callback::new(move |nodes: Forest| {
        log::debug!("[APP] tree changed: {} roots", nodes.len());
        set_tree_json.set(to_json(&nodes));
    });
    let loader: Arc<dyn ChildLoader> = Arc::new(DemoLoader::default());

    // Board demo
    let initial_board = sample_columns();
    let (board_json, set_board_json) = signal(to_json(&initial_board));
    let on_board_change = Callback::new(move |columns: Vec<Column>| {
        set_board_json.set(to_json(&columns));
    });

    view! {
        <div class="app-layout">
            <NavBar page=page set_page=set_page />
            
            <main class="main-content">
                <section class=move || page_class(page.get(), Page::Home)>
                    <HomePage set_page=set_page />
                </section>
                
                <section class=move || page_class(page.get(), Page::Tree)>
                    <h1>"Tree View Component"</h1>
                    <p class="page-intro">
                        "A hierarchical tree structure with full CRUD operations, drag & drop, and lazy loading"
                    </p>
                    <TreeView data=initial_tree on_data_change=on_tree_change loader=loader />
                    <SnapshotPanel title="Tree snapshot" json=tree_json />
                </section>
                
                <section class=move || page_class(page.get(), Page::Board)>
                    <h1>"Kanban Board"</h1>
                    <KanbanBoard initial_data=initial_board on_data_change=on_board_change />
                    <SnapshotPanel title="Board snapshot" json=board_json />
                </section>
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_class() {
        assert_eq!(page_class(Page::Tree, Page::Tree), "page");
        assert_eq!(page_class(Page::Home, Page::Board), "page hidden");
    }

    #[test]
    fn test_to_json_uses_camel_case() {
        let json = to_json(&sample_columns());
        assert!(json.contains("\"columnId\": \"todo\""));
    }
}
