use uuid::Uuid;

use super::*;
use crate::block::{BlockKind, BlockProps};

// =============================================================
// Helpers
// =============================================================

fn seq_of(kinds: &[BlockKind]) -> (BlockSequence, Vec<BlockId>) {
    let mut seq = BlockSequence::new();
    let mut ids = Vec::new();
    for kind in kinds {
        let block = Block::new(*kind);
        ids.push(block.id);
        seq.push(block);
    }
    (seq, ids)
}

fn ids_in_order(seq: &BlockSequence) -> Vec<BlockId> {
    seq.as_slice().iter().map(|b| b.id).collect()
}

fn text_patch(text: &str) -> BlockProps {
    BlockProps { text: Some(text.to_owned()), ..Default::default() }
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_is_empty() {
    let seq = BlockSequence::new();
    assert!(seq.is_empty());
    assert_eq!(seq.len(), 0);
}

#[test]
fn from_blocks_preserves_order() {
    let a = Block::new(BlockKind::Heading);
    let b = Block::new(BlockKind::Text);
    let expected = vec![a.id, b.id];
    let seq = BlockSequence::from_blocks(vec![a, b]);
    assert_eq!(ids_in_order(&seq), expected);
}

// =============================================================
// push / insert
// =============================================================

#[test]
fn push_appends_at_end() {
    let (mut seq, ids) = seq_of(&[BlockKind::Heading, BlockKind::Text]);
    let c = Block::new(BlockKind::Button);
    let c_id = c.id;
    seq.push(c);
    assert_eq!(ids_in_order(&seq), vec![ids[0], ids[1], c_id]);
}

#[test]
fn insert_at_front() {
    let (mut seq, ids) = seq_of(&[BlockKind::Heading, BlockKind::Text]);
    let c = Block::new(BlockKind::Button);
    let c_id = c.id;
    seq.insert(0, c);
    assert_eq!(ids_in_order(&seq), vec![c_id, ids[0], ids[1]]);
}

#[test]
fn insert_in_middle() {
    let (mut seq, ids) = seq_of(&[BlockKind::Heading, BlockKind::Text]);
    let c = Block::new(BlockKind::Button);
    let c_id = c.id;
    seq.insert(1, c);
    assert_eq!(ids_in_order(&seq), vec![ids[0], c_id, ids[1]]);
}

#[test]
fn insert_past_end_clamps_to_append() {
    let (mut seq, ids) = seq_of(&[BlockKind::Heading]);
    let c = Block::new(BlockKind::Button);
    let c_id = c.id;
    seq.insert(99, c);
    assert_eq!(ids_in_order(&seq), vec![ids[0], c_id]);
}

#[test]
fn insert_into_empty() {
    let mut seq = BlockSequence::new();
    let c = Block::new(BlockKind::Text);
    let c_id = c.id;
    seq.insert(5, c);
    assert_eq!(ids_in_order(&seq), vec![c_id]);
}

// =============================================================
// remove
// =============================================================

#[test]
fn remove_returns_the_block() {
    let (mut seq, ids) = seq_of(&[BlockKind::Text]);
    let removed = seq.remove(&ids[0]);
    assert_eq!(removed.map(|b| b.id), Some(ids[0]));
    assert!(seq.is_empty());
}

#[test]
fn remove_unknown_id_is_noop() {
    let (mut seq, _) = seq_of(&[BlockKind::Text]);
    assert!(seq.remove(&Uuid::new_v4()).is_none());
    assert_eq!(seq.len(), 1);
}

#[test]
fn remove_is_idempotent() {
    let (mut seq, ids) = seq_of(&[BlockKind::Heading, BlockKind::Text]);
    assert!(seq.remove(&ids[0]).is_some());
    let after_first = ids_in_order(&seq);
    assert!(seq.remove(&ids[0]).is_none());
    assert_eq!(ids_in_order(&seq), after_first);
}

#[test]
fn remove_does_not_affect_others() {
    let (mut seq, ids) = seq_of(&[BlockKind::Heading, BlockKind::Text, BlockKind::Button]);
    seq.remove(&ids[1]);
    assert_eq!(ids_in_order(&seq), vec![ids[0], ids[2]]);
}

// =============================================================
// update
// =============================================================

#[test]
fn update_merges_targeted_block_only() {
    let (mut seq, ids) = seq_of(&[BlockKind::Text, BlockKind::Text]);
    let other_before = seq.get(&ids[1]).unwrap().clone();
    assert!(seq.update(&ids[0], &text_patch("x")));
    assert_eq!(seq.get(&ids[0]).unwrap().props.text.as_deref(), Some("x"));
    assert_eq!(seq.get(&ids[1]).unwrap(), &other_before);
}

#[test]
fn update_leaves_other_props_of_same_block() {
    let (mut seq, ids) = seq_of(&[BlockKind::Heading]);
    assert!(seq.update(&ids[0], &text_patch("x")));
    let block = seq.get(&ids[0]).unwrap();
    assert_eq!(block.props.text.as_deref(), Some("x"));
    assert_eq!(block.props.heading_level, Some(crate::consts::DEFAULT_HEADING_LEVEL));
}

#[test]
fn update_unknown_id_returns_false() {
    let (mut seq, _) = seq_of(&[BlockKind::Text]);
    assert!(!seq.update(&Uuid::new_v4(), &text_patch("x")));
}

#[test]
fn update_does_not_change_order_or_count() {
    let (mut seq, ids) = seq_of(&[BlockKind::Heading, BlockKind::Text, BlockKind::Button]);
    seq.update(&ids[1], &text_patch("x"));
    assert_eq!(ids_in_order(&seq), ids);
}

// =============================================================
// relocate
// =============================================================

#[test]
fn relocate_first_to_end() {
    // [A, B, C]: dragging A onto C's position yields [B, C, A].
    let (mut seq, ids) = seq_of(&[BlockKind::Heading, BlockKind::Text, BlockKind::Button]);
    assert!(seq.relocate(&ids[0], 2));
    assert_eq!(ids_in_order(&seq), vec![ids[1], ids[2], ids[0]]);
}

#[test]
fn relocate_last_to_front() {
    let (mut seq, ids) = seq_of(&[BlockKind::Heading, BlockKind::Text, BlockKind::Button]);
    assert!(seq.relocate(&ids[2], 0));
    assert_eq!(ids_in_order(&seq), vec![ids[2], ids[0], ids[1]]);
}

#[test]
fn relocate_to_same_position_is_stable() {
    let (mut seq, ids) = seq_of(&[BlockKind::Heading, BlockKind::Text, BlockKind::Button]);
    assert!(seq.relocate(&ids[1], 1));
    assert_eq!(ids_in_order(&seq), ids);
}

#[test]
fn relocate_preserves_block_set_and_count() {
    let (mut seq, mut ids) = seq_of(&[BlockKind::Heading, BlockKind::Text, BlockKind::Button, BlockKind::Link]);
    assert!(seq.relocate(&ids[3], 1));
    assert_eq!(seq.len(), 4);
    let mut after = ids_in_order(&seq);
    after.sort();
    ids.sort();
    assert_eq!(after, ids);
}

#[test]
fn relocate_moved_id_lands_at_target_index() {
    let (mut seq, ids) = seq_of(&[BlockKind::Heading, BlockKind::Text, BlockKind::Button, BlockKind::Link]);
    assert!(seq.relocate(&ids[3], 1));
    assert_eq!(seq.index_of(&ids[3]), Some(1));
}

#[test]
fn relocate_out_of_range_clamps_to_end() {
    let (mut seq, ids) = seq_of(&[BlockKind::Heading, BlockKind::Text]);
    assert!(seq.relocate(&ids[0], 42));
    assert_eq!(ids_in_order(&seq), vec![ids[1], ids[0]]);
}

#[test]
fn relocate_unknown_id_returns_false() {
    let (mut seq, ids) = seq_of(&[BlockKind::Heading, BlockKind::Text]);
    assert!(!seq.relocate(&Uuid::new_v4(), 0));
    assert_eq!(ids_in_order(&seq), ids);
}

#[test]
fn relocate_preserves_relative_order_of_others() {
    let (mut seq, ids) =
        seq_of(&[BlockKind::Heading, BlockKind::Text, BlockKind::Button, BlockKind::Image, BlockKind::Link]);
    assert!(seq.relocate(&ids[1], 3));
    let after = ids_in_order(&seq);
    let others: Vec<BlockId> = after.iter().copied().filter(|id| *id != ids[1]).collect();
    assert_eq!(others, vec![ids[0], ids[2], ids[3], ids[4]]);
}

// =============================================================
// Queries
// =============================================================

#[test]
fn get_and_index_of() {
    let (seq, ids) = seq_of(&[BlockKind::Heading, BlockKind::Text]);
    assert_eq!(seq.get(&ids[1]).map(|b| b.kind), Some(BlockKind::Text));
    assert_eq!(seq.index_of(&ids[1]), Some(1));
    assert!(seq.get(&Uuid::new_v4()).is_none());
    assert_eq!(seq.index_of(&Uuid::new_v4()), None);
}

#[test]
fn contains_reports_presence() {
    let (seq, ids) = seq_of(&[BlockKind::Divider]);
    assert!(seq.contains(&ids[0]));
    assert!(!seq.contains(&Uuid::new_v4()));
}

// =============================================================
// Serde round-trip through the persistence boundary
// =============================================================

#[test]
fn sequence_roundtrips_through_json() {
    let (mut seq, ids) = seq_of(&[BlockKind::Heading, BlockKind::Button, BlockKind::Link]);
    seq.update(
        &ids[1],
        &BlockProps { url: Some("https://example.com".to_owned()), copy_link: Some(true), ..Default::default() },
    );
    let serialized = serde_json::to_string(seq.as_slice()).unwrap();
    let back: Vec<Block> = serde_json::from_str(&serialized).unwrap();
    assert_eq!(back, seq.as_slice());
}
