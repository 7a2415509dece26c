//! Property-based invariant tests for the tree and board models.
//!
//! 1. updateNode only changes the target, and findNode sees the transform
//! 2. deleteNode removes the node and every descendant, nothing else
//! 3. Any sequence of board edits keeps each card in exactly one column
//!    with a matching `column_id`

use std::collections::HashMap;

use proptest::prelude::*;
use tree_board_core::board::{
    add_card, delete_card, move_card, reorder_within_column, sample_columns,
};
use tree_board_core::tree::{add_node, add_root, all_node_ids, delete_node, find_node, update_node};
use tree_board_core::{Column, Forest, SequentialIds, TreeNode};

// ── Strategies ──────────────────────────────────────────────────────────

/// Forest shape: one entry per node, `None` for a root, `Some(k)` for a
/// child of node `k % i` among the nodes built before it.
fn shape_strategy() -> impl Strategy<Value = Vec<Option<usize>>> {
    prop::collection::vec(prop::option::of(any::<usize>()), 1..40)
}

fn build_forest(shape: &[Option<usize>]) -> Forest {
    let mut forest = Forest::new();
    for (i, parent) in shape.iter().enumerate() {
        let node = TreeNode::new(format!("n-{}", i), format!("Node {}", i));
        forest = match parent {
            Some(k) if i > 0 => add_node(&forest, &format!("n-{}", k % i), node),
            _ => add_root(&forest, node),
        };
    }
    forest
}

fn subtree_ids(node: &TreeNode, out: &mut Vec<String>) {
    out.push(node.id.clone());
    for child in node.child_nodes() {
        subtree_ids(child, out);
    }
}

/// Board edits; card and column picks are resolved modulo what exists
#[derive(Debug, Clone)]
enum Op {
    Add(usize, String),
    Delete(usize),
    Move(usize, usize, Option<usize>),
    Reorder(usize, usize, usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (any::<usize>(), "[ a-z]{0,6}").prop_map(|(c, t)| Op::Add(c, t)),
        any::<usize>().prop_map(Op::Delete),
        (any::<usize>(), any::<usize>(), prop::option::of(0usize..8))
            .prop_map(|(card, to, at)| Op::Move(card, to, at)),
        (any::<usize>(), any::<usize>(), any::<usize>())
            .prop_map(|(c, a, b)| Op::Reorder(c, a, b)),
    ]
}

fn card_ids(columns: &[Column]) -> Vec<(String, String)> {
    columns
        .iter()
        .flat_map(|column| {
            column
                .cards
                .iter()
                .map(move |card| (card.id.clone(), column.id.clone()))
        })
        .collect()
}

fn apply(columns: &[Column], op: &Op, ids: &mut SequentialIds) -> Vec<Column> {
    let cards = card_ids(columns);
    let column_id = |pick: usize| columns[pick % columns.len()].id.clone();
    match op {
        Op::Add(c, title) => add_card(columns, &column_id(*c), title, ids),
        Op::Delete(pick) if !cards.is_empty() => {
            delete_card(columns, &cards[pick % cards.len()].0)
        }
        Op::Move(pick, to, at) if !cards.is_empty() => {
            let (card, from) = &cards[pick % cards.len()];
            move_card(columns, card, from, &column_id(*to), *at)
        }
        Op::Reorder(c, a, b) => {
            let column = &columns[c % columns.len()];
            if column.cards.is_empty() {
                return columns.to_vec();
            }
            let active = &column.cards[a % column.cards.len()].id;
            let over = &column.cards[b % column.cards.len()].id;
            reorder_within_column(columns, &column.id, active, over)
        }
        _ => columns.to_vec(),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 1. Update is visible through find and touches nothing else
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn update_then_find_sees_transform(
        shape in shape_strategy(),
        pick in any::<usize>(),
        name in "[a-z]{1,8}",
    ) {
        let forest = build_forest(&shape);
        let ids = all_node_ids(&forest);
        let id = &ids[pick % ids.len()];
        let transform = |n: &TreeNode| TreeNode { name: name.clone(), ..n.clone() };

        let updated = update_node(&forest, id, &transform);
        let before = find_node(&forest, id).expect("node in forest");
        let after = find_node(&updated, id).expect("node kept");
        prop_assert_eq!(&**after, &transform(&**before));
        prop_assert_eq!(all_node_ids(&updated), ids);
    }

    #[test]
    fn update_missing_id_keeps_forest(shape in shape_strategy()) {
        let forest = build_forest(&shape);
        let updated = update_node(&forest, "ghost", |n| TreeNode { name: "x".into(), ..n.clone() });
        prop_assert_eq!(updated, forest);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 2. Delete removes exactly the subtree
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn delete_removes_all_descendants(shape in shape_strategy(), pick in any::<usize>()) {
        let forest = build_forest(&shape);
        let ids = all_node_ids(&forest);
        let id = &ids[pick % ids.len()];
        let mut removed = Vec::new();
        subtree_ids(find_node(&forest, id).expect("node in forest"), &mut removed);

        let remaining = all_node_ids(&delete_node(&forest, id));
        let expected: Vec<String> = ids.iter().filter(|i| !removed.contains(*i)).cloned().collect();
        prop_assert_eq!(remaining, expected);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 3. Board edits never duplicate, drop, or mislabel cards
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn board_edits_keep_cards_unique(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut ids = SequentialIds::starting_at(8);
        let mut columns = sample_columns();
        let mut expected = card_ids(&columns).len();

        for op in &ops {
            let next = apply(&columns, op, &mut ids);
            let (before, after) = (card_ids(&columns).len(), card_ids(&next).len());
            match op {
                Op::Add(_, title) if !title.trim().is_empty() => expected += 1,
                Op::Delete(_) if before > 0 => expected -= 1,
                _ => {}
            }
            prop_assert_eq!(after, expected, "card count after {:?}", op);

            let mut seen: HashMap<String, usize> = HashMap::new();
            for column in &next {
                for card in &column.cards {
                    prop_assert_eq!(&card.column_id, &column.id);
                    *seen.entry(card.id.clone()).or_default() += 1;
                }
            }
            prop_assert!(seen.values().all(|&n| n == 1), "duplicate card after {:?}", op);
            columns = next;
        }
    }
}
