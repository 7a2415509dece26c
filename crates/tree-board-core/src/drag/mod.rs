//! Drag Controllers
//!
//! Small idle -> dragging -> idle state machines that turn resolved drag
//! events into model transitions. They never hold model state themselves,
//! only the ids of the drag in flight.

mod board;
mod tree;

pub use board::{BoardDragController, HoverTarget};
pub use tree::TreeDragController;
