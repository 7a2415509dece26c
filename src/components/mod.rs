//! UI Components
//!
//! Reusable Leptos components.

mod board_card;
mod board_column;
mod delete_confirm_button;
mod kanban_board;
mod nav_bar;
mod snapshot_panel;
mod tree_node_row;
mod tree_view;

pub use board_card::BoardCard;
pub use board_column::BoardColumn;
pub use delete_confirm_button::{DeleteConfirmButton, DeleteSubject};
pub use kanban_board::KanbanBoard;
pub use nav_bar::{NavBar, Page};
pub use snapshot_panel::SnapshotPanel;
pub use tree_node_row::TreeNodeRow;
pub use tree_view::TreeView;
