//! The board: an ordered collection of blocks and its mutation lifecycle.
//!
//! All mutations go through the methods here so that every committed change
//! notifies registered observers exactly once, synchronously, after it is
//! applied. Operations on a missing id are silent no-ops and emit nothing.

use crate::constants::{
    BLOCK_HEIGHT, BLOCK_WIDTH, DEFAULT_BLOCK_POSITION, REMOVE_BUTTON_INSET, REMOVE_BUTTON_SIZE,
};
use crate::types::{Block, BlockId, BlockKind, BlockSettings};

/// Emitted to observers after each committed mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockEvent {
    Added(BlockId),
    Moved(BlockId),
    Updated(BlockId),
    Removed(BlockId),
}

/// Which part of a block card a canvas-local point landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockRegion {
    Body,
    RemoveButton,
}

/// Result of hit testing a canvas-local point against the collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockHit {
    pub id: BlockId,
    pub region: BlockRegion,
}

type Observer = Box<dyn FnMut(&BlockEvent)>;

/// Ordered block collection. Insertion order is preserved across updates;
/// ids are unique for the lifetime of the board and never reused.
#[derive(Default)]
pub struct Board {
    blocks: Vec<Block>,
    observers: Vec<Observer>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer invoked synchronously after each committed
    /// mutation, exactly once per mutation.
    pub fn observe(&mut self, observer: impl FnMut(&BlockEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn emit(&mut self, event: BlockEvent) {
        for observer in &mut self.observers {
            observer(&event);
        }
    }

    /// Add a new block of `kind` at the default position with blank
    /// settings. Appends to the end of the collection; never fails.
    pub fn add_block(&mut self, kind: BlockKind) -> BlockId {
        let id = BlockId::new();
        self.blocks.push(Block {
            id,
            position: DEFAULT_BLOCK_POSITION,
            settings: BlockSettings::default_for(kind),
        });
        self.emit(BlockEvent::Added(id));
        id
    }

    /// Reposition a block. Streams unsnapped positions during a drag and
    /// commits the snapped position on release; no-op if `id` is absent.
    pub fn move_block(&mut self, id: BlockId, position: (f32, f32)) {
        let Some(block) = self.blocks.iter_mut().find(|b| b.id == id) else {
            return;
        };
        block.position = position;
        self.emit(BlockEvent::Moved(id));
    }

    /// Replace a block's settings wholesale with a committed draft; no-op
    /// if `id` is absent.
    pub fn apply_settings(&mut self, id: BlockId, settings: BlockSettings) {
        let Some(block) = self.blocks.iter_mut().find(|b| b.id == id) else {
            return;
        };
        block.settings = settings;
        self.emit(BlockEvent::Updated(id));
    }

    /// Remove a block, preserving the relative order of the rest.
    /// Idempotent: removing an absent id is a no-op.
    pub fn remove_block(&mut self, id: BlockId) {
        let before = self.blocks.len();
        self.blocks.retain(|b| b.id != id);
        if self.blocks.len() != before {
            self.emit(BlockEvent::Removed(id));
        }
    }

    pub fn get_block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// Read-only snapshot of the collection, in insertion order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Hit test a canvas-local point against the block cards, topmost
    /// (last-inserted) first. Distinguishes the remove control from the
    /// card body so presses on it never start a gesture.
    pub fn block_at(&self, pos: (f32, f32)) -> Option<BlockHit> {
        self.blocks.iter().rev().find_map(|block| {
            let (bx, by) = block.position;
            let (px, py) = pos;
            let in_body =
                px >= bx && px <= bx + BLOCK_WIDTH && py >= by && py <= by + BLOCK_HEIGHT;
            if !in_body {
                return None;
            }

            let rb_right = bx + BLOCK_WIDTH - REMOVE_BUTTON_INSET;
            let rb_left = rb_right - REMOVE_BUTTON_SIZE;
            let rb_top = by + REMOVE_BUTTON_INSET;
            let rb_bottom = rb_top + REMOVE_BUTTON_SIZE;
            let region = if px >= rb_left && px <= rb_right && py >= rb_top && py <= rb_bottom {
                BlockRegion::RemoveButton
            } else {
                BlockRegion::Body
            };

            Some(BlockHit {
                id: block.id,
                region,
            })
        })
    }
}
