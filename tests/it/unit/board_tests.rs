//! Board tests - collection invariants, CRUD semantics, observers, hit
//! testing.

use crate::helpers::*;
use botboard::board::{BlockEvent, BlockRegion, Board};
use botboard::constants::{
    BLOCK_HEIGHT, BLOCK_WIDTH, DEFAULT_BLOCK_POSITION, REMOVE_BUTTON_INSET,
};
use botboard::types::{BlockKind, BlockSettings};
use std::collections::HashSet;

#[test]
fn test_add_appends_with_defaults() {
    let mut board = Board::new();
    let id = board.add_block(BlockKind::AutoReply);

    assert_block_count(&board, 1);
    let block = board.get_block(id).unwrap();
    assert_eq!(block.position, DEFAULT_BLOCK_POSITION);
    assert_eq!(block.kind(), BlockKind::AutoReply);
    match &block.settings {
        BlockSettings::AutoReply { triggers, response } => {
            assert!(triggers.is_empty());
            assert!(response.text.is_empty());
            assert!(response.image_url.is_none());
            assert!(response.buttons.is_empty());
        }
        other => panic!("unexpected settings shape: {other:?}"),
    }
}

#[test]
fn test_ids_are_unique() {
    let mut board = Board::new();
    let mut seen = HashSet::new();
    for _ in 0..100 {
        assert!(seen.insert(board.add_block(BlockKind::Command)));
    }
    assert_block_count(&board, 100);
}

#[test]
fn test_insertion_order_preserved_across_updates() {
    let (mut board, ids) = TestBoardBuilder::new()
        .with_block(BlockKind::Command, (0.0, 0.0))
        .with_block(BlockKind::AutoReply, (100.0, 0.0))
        .with_block(BlockKind::Custom, (200.0, 0.0))
        .build();

    board.apply_settings(ids[1], auto_reply_settings(&["hello"], "Hi"));
    board.move_block(ids[0], (500.0, 500.0));

    let order: Vec<_> = board.blocks().iter().map(|b| b.id).collect();
    assert_eq!(order, ids);
}

#[test]
fn test_update_missing_id_leaves_collection_unchanged() {
    let (mut board, _) = TestBoardBuilder::new()
        .with_block(BlockKind::Command, (0.0, 0.0))
        .with_block(BlockKind::AutoReply, (100.0, 0.0))
        .with_block(BlockKind::Custom, (200.0, 0.0))
        .build();
    let missing = botboard::types::BlockId::new();
    let before = board.blocks().to_vec();

    board.apply_settings(missing, command_settings("start", false, "hi"));
    board.move_block(missing, (999.0, 999.0));

    assert_eq!(board.blocks(), &before[..]);
}

#[test]
fn test_remove_is_idempotent_and_order_preserving() {
    let (mut board, ids) = TestBoardBuilder::new()
        .with_block(BlockKind::Command, (0.0, 0.0))
        .with_block(BlockKind::AutoReply, (100.0, 0.0))
        .with_block(BlockKind::Custom, (200.0, 0.0))
        .build();

    board.remove_block(ids[1]);
    assert_block_count(&board, 2);
    let order: Vec<_> = board.blocks().iter().map(|b| b.id).collect();
    assert_eq!(order, vec![ids[0], ids[2]]);

    // Removing again is a no-op
    board.remove_block(ids[1]);
    assert_block_count(&board, 2);
}

#[test]
fn test_readd_issues_fresh_id() {
    let mut board = Board::new();
    let mut issued = HashSet::new();
    let first = board.add_block(BlockKind::Custom);
    issued.insert(first);
    board.remove_block(first);

    let second = board.add_block(BlockKind::Custom);
    assert!(issued.insert(second), "removed id was reissued");
}

#[test]
fn test_final_size_matches_adds_minus_removes() {
    let mut board = Board::new();
    let mut live = Vec::new();
    for i in 0..20 {
        let id = board.add_block(BlockKind::Command);
        live.push(id);
        if i % 3 == 0 {
            let id = live.remove(0);
            board.remove_block(id);
        }
    }
    assert_eq!(board.len(), live.len());
    let unique: HashSet<_> = board.blocks().iter().map(|b| b.id).collect();
    assert_eq!(unique.len(), board.len());
}

// ============================================================================
// Observer contract
// ============================================================================

#[test]
fn test_observer_fires_once_per_mutation() {
    let mut board = Board::new();
    let events = record_events(&mut board);

    let id = board.add_block(BlockKind::Command);
    board.move_block(id, (40.0, 80.0));
    board.apply_settings(id, command_settings("start", false, "hi"));
    board.remove_block(id);

    assert_eq!(
        *events.borrow(),
        vec![
            BlockEvent::Added(id),
            BlockEvent::Moved(id),
            BlockEvent::Updated(id),
            BlockEvent::Removed(id),
        ]
    );
}

#[test]
fn test_observer_silent_for_missing_id_noops() {
    let mut board = Board::new();
    let id = board.add_block(BlockKind::Command);
    board.remove_block(id);

    let events = record_events(&mut board);
    board.move_block(id, (1.0, 2.0));
    board.apply_settings(id, custom_settings("f", "t"));
    board.remove_block(id);

    assert!(events.borrow().is_empty());
}

// ============================================================================
// Hit testing
// ============================================================================

#[test]
fn test_block_at_hits_body_and_misses_outside() {
    let (board, id) = board_with_command_at((100.0, 100.0));

    let hit = board.block_at((120.0, 140.0)).unwrap();
    assert_eq!(hit.id, id);
    assert_eq!(hit.region, BlockRegion::Body);

    assert!(board.block_at((99.0, 100.0)).is_none());
    assert!(board
        .block_at((100.0 + BLOCK_WIDTH + 1.0, 100.0))
        .is_none());
    assert!(board
        .block_at((120.0, 100.0 + BLOCK_HEIGHT + 1.0))
        .is_none());
}

#[test]
fn test_block_at_resolves_remove_button_region() {
    let (board, id) = board_with_command_at((0.0, 0.0));

    // Center of the remove control
    let hit = board
        .block_at((
            BLOCK_WIDTH - REMOVE_BUTTON_INSET - 10.0,
            REMOVE_BUTTON_INSET + 10.0,
        ))
        .unwrap();
    assert_eq!(hit.id, id);
    assert_eq!(hit.region, BlockRegion::RemoveButton);
}

#[test]
fn test_block_at_prefers_topmost_of_overlapping_cards() {
    let (board, ids) = TestBoardBuilder::new()
        .with_block(BlockKind::Command, (0.0, 0.0))
        .with_block(BlockKind::Custom, (20.0, 20.0))
        .build();

    // Point inside both cards resolves to the later-inserted one
    let hit = board.block_at((50.0, 50.0)).unwrap();
    assert_eq!(hit.id, ids[1]);
}
