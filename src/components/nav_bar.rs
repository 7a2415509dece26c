//! Navigation Bar Component
//!
//! Tab bar for switching between the home page and the two demos.

use leptos::prelude::*;

/// Top-level pages
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Tree,
    Board,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Tree, Page::Board];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Tree => "Tree View",
            Page::Board => "Kanban Board",
        }
    }
}

/// Nav bar component
#[component]
pub fn NavBar(
    page: ReadSignal<Page>,
    set_page: WriteSignal<Page>,
) -> impl IntoView {
    view! {
        <nav class="nav-bar">
            {Page::ALL.iter().map(|&target| {
                let is_active = move || page.get() == target;
                let tab_class = move || {
                    if is_active() { "nav-tab active" } else { "nav-tab" }
                };
                
                view! {
                    <button
                        class=tab_class
                        on:click=move |_| set_page.set(target)
                    >
                        {target.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
