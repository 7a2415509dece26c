//! Board Operations
//!
//! Pure transitions over the column list. A card id lives in exactly one
//! column, and its `column_id` always names that column. Unknown ids and
//! blank titles return the columns unchanged.

use super::card::{Card, Column};
use crate::error::normalize_label;
use crate::ids::IdGenerator;

/// Id of the column holding `card_id`
pub fn find_card_column<'a>(columns: &'a [Column], card_id: &str) -> Option<&'a str> {
    columns
        .iter()
        .find(|column| column.position_of(card_id).is_some())
        .map(|column| column.id.as_str())
}

pub fn find_card<'a>(columns: &'a [Column], card_id: &str) -> Option<&'a Card> {
    columns
        .iter()
        .flat_map(|column| column.cards.iter())
        .find(|card| card.id == card_id)
}

/// Append a new card titled `title` to `column_id`
pub fn add_card(
    columns: &[Column],
    column_id: &str,
    title: &str,
    ids: &mut dyn IdGenerator,
) -> Vec<Column> {
    let title = match normalize_label(title) {
        Ok(title) => title,
        Err(err) => {
            log::debug!("add card rejected: {}", err);
            return columns.to_vec();
        }
    };
    if !columns.iter().any(|column| column.id == column_id) {
        log::debug!("add card: column {} not found", column_id);
        return columns.to_vec();
    }
    let card = Card::new(ids.next_id("card"), title, column_id);
    columns
        .iter()
        .map(|column| {
            if column.id != column_id {
                return column.clone();
            }
            let mut cards = column.cards.clone();
            cards.push(card.clone());
            Column {
                cards,
                ..column.clone()
            }
        })
        .collect()
}

/// Replace the title of `card_id`, wherever it is
pub fn rename_card(columns: &[Column], card_id: &str, new_title: &str) -> Vec<Column> {
    let title = match normalize_label(new_title) {
        Ok(title) => title,
        Err(err) => {
            log::debug!("rename of {} rejected: {}", card_id, err);
            return columns.to_vec();
        }
    };
    columns
        .iter()
        .map(|column| Column {
            cards: column
                .cards
                .iter()
                .map(|card| {
                    if card.id == card_id {
                        Card {
                            title: title.clone(),
                            ..card.clone()
                        }
                    } else {
                        card.clone()
                    }
                })
                .collect(),
            ..column.clone()
        })
        .collect()
}

pub fn delete_card(columns: &[Column], card_id: &str) -> Vec<Column> {
    columns
        .iter()
        .map(|column| Column {
            cards: column
                .cards
                .iter()
                .filter(|card| card.id != card_id)
                .cloned()
                .collect(),
            ..column.clone()
        })
        .collect()
}

/// Move `card_id` from one column to another, inserting before
/// `target_index` or appending when it is `None` (or past the end).
///
/// Moving within the same column is a no-op; use `reorder_within_column`.
pub fn move_card(
    columns: &[Column],
    card_id: &str,
    from_column_id: &str,
    to_column_id: &str,
    target_index: Option<usize>,
) -> Vec<Column> {
    if from_column_id == to_column_id {
        return columns.to_vec();
    }
    let Some(source) = columns.iter().find(|column| column.id == from_column_id) else {
        return columns.to_vec();
    };
    let Some(card) = source.cards.iter().find(|card| card.id == card_id) else {
        log::debug!("move: card {} is not in {}", card_id, from_column_id);
        return columns.to_vec();
    };
    if !columns.iter().any(|column| column.id == to_column_id) {
        log::debug!("move: column {} not found", to_column_id);
        return columns.to_vec();
    }

    let moved = Card {
        column_id: to_column_id.to_string(),
        ..card.clone()
    };
    columns
        .iter()
        .map(|column| {
            if column.id == from_column_id {
                Column {
                    cards: column
                        .cards
                        .iter()
                        .filter(|c| c.id != card_id)
                        .cloned()
                        .collect(),
                    ..column.clone()
                }
            } else if column.id == to_column_id {
                let mut cards = column.cards.clone();
                let at = target_index.unwrap_or(cards.len()).min(cards.len());
                cards.insert(at, moved.clone());
                Column {
                    cards,
                    ..column.clone()
                }
            } else {
                column.clone()
            }
        })
        .collect()
}

/// Move `active_card_id` into `over_card_id`'s index within one column
pub fn reorder_within_column(
    columns: &[Column],
    column_id: &str,
    active_card_id: &str,
    over_card_id: &str,
) -> Vec<Column> {
    columns
        .iter()
        .map(|column| {
            if column.id != column_id {
                return column.clone();
            }
            let (Some(from), Some(to)) = (
                column.position_of(active_card_id),
                column.position_of(over_card_id),
            ) else {
                return column.clone();
            };
            let mut cards = column.cards.clone();
            let card = cards.remove(from);
            cards.insert(to, card);
            Column {
                cards,
                ..column.clone()
            }
        })
        .collect()
}
