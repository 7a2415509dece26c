//! Cards and Columns

use serde::{Deserialize, Serialize};

/// A card on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub title: String,
    /// Always the id of the column holding this card
    pub column_id: String,
}

impl Card {
    pub fn new(id: impl Into<String>, title: impl Into<String>, column_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            column_id: column_id.into(),
        }
    }
}

/// A board column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: String,
    pub title: String,
    pub cards: Vec<Card>,
}

impl Column {
    /// Column pre-filled with `(id, title)` cards
    fn seeded(id: &str, title: &str, cards: &[(&str, &str)]) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            cards: cards
                .iter()
                .map(|(card_id, card_title)| Card::new(*card_id, *card_title, id))
                .collect(),
        }
    }

    pub fn position_of(&self, card_id: &str) -> Option<usize> {
        self.cards.iter().position(|card| card.id == card_id)
    }

    pub fn accent(&self) -> ColumnAccent {
        match self.id.as_str() {
            "todo" => ColumnAccent::Blue,
            "in-progress" => ColumnAccent::Orange,
            "done" => ColumnAccent::Green,
            _ => ColumnAccent::Gray,
        }
    }
}

/// Header color for a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnAccent {
    Blue,
    Orange,
    Green,
    Gray,
}

impl ColumnAccent {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnAccent::Blue => "blue",
            ColumnAccent::Orange => "orange",
            ColumnAccent::Green => "green",
            ColumnAccent::Gray => "gray",
        }
    }
}

/// Board used when no initial data is configured
pub fn sample_columns() -> Vec<Column> {
    vec![
        Column::seeded(
            "todo",
            "Todo",
            &[
                ("card-1", "Create initial project plan"),
                ("card-2", "Design landing page"),
                ("card-3", "Review codebase structure"),
            ],
        ),
        Column::seeded(
            "in-progress",
            "In Progress",
            &[
                ("card-4", "Implement authentication"),
                ("card-5", "Set up database schema"),
                ("card-6", "Fix navbar bugs"),
            ],
        ),
        Column::seeded(
            "done",
            "Done",
            &[
                ("card-7", "Organize project repository"),
                ("card-8", "Write API documentation"),
            ],
        ),
    ]
}
