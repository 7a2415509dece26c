//! Tree drag: reorder among siblings on drop

use crate::tree::{reorder_siblings, Forest, NodeRef};

#[derive(Debug, Clone, Default)]
pub struct TreeDragController {
    active: Option<String>,
}

impl TreeDragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn drag_start(&mut self, node_id: impl Into<String>) {
        self.active = Some(node_id.into());
    }

    /// Finish the drag over `over_id`. Returns the new forest if the drop
    /// reordered anything; the controller is idle afterwards either way.
    pub fn drag_end(&mut self, forest: &[NodeRef], over_id: Option<&str>) -> Option<Forest> {
        let active = self.active.take()?;
        let over = over_id?;
        if over == active {
            return None;
        }
        let next = reorder_siblings(forest, &active, over);
        (next.as_slice() != forest).then_some(next)
    }

    /// Abandon the drag without touching the forest
    pub fn cancel(&mut self) {
        self.active = None;
    }
}
