//! Board Model
//!
//! Fixed set of columns, each holding an ordered list of cards.

mod card;
mod ops;

pub use card::{sample_columns, Card, Column, ColumnAccent};
pub use ops::{
    add_card, delete_card, find_card, find_card_column, move_card, rename_card,
    reorder_within_column,
};
