//! Board drag: live cross-column moves while hovering, same-column
//! reorder on drop.
//!
//! The controller tracks the column the card currently sits in, so each
//! hover event is a delta against the live position rather than a replay
//! from where the drag started. Cancelling keeps whatever the last hover
//! move produced.

use crate::board::{find_card, find_card_column, move_card, reorder_within_column, Card, Column};

/// What the pointer is over during a board drag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoverTarget {
    /// A card: its column, at its index
    Card(String),
    /// A column background: that column, append position
    Column(String),
}

#[derive(Debug, Clone, Default)]
enum BoardDrag {
    #[default]
    Idle,
    Dragging {
        /// Snapshot of the dragged card, for the drag overlay
        card: Card,
        /// Column the card is in right now
        column_id: String,
        /// Hover target that produced the last live move; dropping on it
        /// confirms the card where it already sits
        placed_by: Option<HoverTarget>,
    },
}

#[derive(Debug, Clone, Default)]
pub struct BoardDragController {
    state: BoardDrag,
}

/// Resolve a hover target to (column id, insertion index)
fn resolve(columns: &[Column], target: &HoverTarget) -> Option<(String, Option<usize>)> {
    match target {
        HoverTarget::Card(card_id) => {
            let column = columns.iter().find(|c| c.position_of(card_id).is_some())?;
            Some((column.id.clone(), column.position_of(card_id)))
        }
        HoverTarget::Column(column_id) => columns
            .iter()
            .any(|c| &c.id == column_id)
            .then(|| (column_id.clone(), None)),
    }
}

impl BoardDragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, BoardDrag::Dragging { .. })
    }

    /// The card being dragged, as it was when the drag started
    pub fn active_card(&self) -> Option<&Card> {
        match &self.state {
            BoardDrag::Dragging { card, .. } => Some(card),
            BoardDrag::Idle => None,
        }
    }

    pub fn tracked_column(&self) -> Option<&str> {
        match &self.state {
            BoardDrag::Dragging { column_id, .. } => Some(column_id),
            BoardDrag::Idle => None,
        }
    }

    /// Capture `card_id` and its column. Unknown cards leave the controller idle.
    pub fn drag_start(&mut self, columns: &[Column], card_id: &str) -> bool {
        let (Some(card), Some(column_id)) =
            (find_card(columns, card_id), find_card_column(columns, card_id))
        else {
            self.state = BoardDrag::Idle;
            return false;
        };
        self.state = BoardDrag::Dragging {
            card: card.clone(),
            column_id: column_id.to_string(),
            placed_by: None,
        };
        true
    }

    /// Hover over `target`. Moves the card immediately when the target
    /// resolves to a different column than the one it is in.
    pub fn drag_over(&mut self, columns: &[Column], target: &HoverTarget) -> Option<Vec<Column>> {
        let BoardDrag::Dragging {
            card,
            column_id,
            placed_by,
        } = &mut self.state
        else {
            return None;
        };
        if matches!(target, HoverTarget::Card(id) if *id == card.id) {
            return None;
        }
        let (to_column, index) = resolve(columns, target)?;
        if to_column == *column_id {
            return None;
        }
        let next = move_card(columns, &card.id, column_id.as_str(), &to_column, index);
        if next.as_slice() == columns {
            return None;
        }
        *column_id = to_column;
        *placed_by = Some(target.clone());
        Some(next)
    }

    /// Drop over `target`. Reorders within the tracked column when the
    /// target is another card there; always returns to idle.
    ///
    /// Dropping on the target that produced the last hover move is a
    /// confirmation: the card stays before it.
    pub fn drag_end(&mut self, columns: &[Column], target: Option<&HoverTarget>) -> Option<Vec<Column>> {
        let BoardDrag::Dragging {
            card,
            column_id,
            placed_by,
        } = std::mem::take(&mut self.state)
        else {
            return None;
        };
        let target = target?;
        if placed_by.as_ref() == Some(target) {
            return None;
        }
        let (to_column, index) = resolve(columns, target)?;
        let next = if to_column != column_id {
            // Dropped without a hover reaching this column first
            move_card(columns, &card.id, &column_id, &to_column, index)
        } else {
            match target {
                HoverTarget::Card(over_id) if *over_id != card.id => {
                    reorder_within_column(columns, &column_id, &card.id, over_id)
                }
                _ => return None,
            }
        };
        (next.as_slice() != columns).then_some(next)
    }

    /// Abandon the drag; hover moves already applied stay applied
    pub fn cancel(&mut self) {
        self.state = BoardDrag::Idle;
    }
}
