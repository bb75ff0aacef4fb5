//! Draft copy of a block's props for modal editing.
//!
//! The property modal never writes into the sequence directly: opening it
//! seeds a `PropsDraft` with a clone of the block's current props, edits land
//! on the draft, and only an explicit commit merges them back. Dropping the
//! draft (cancel, Escape, editor teardown) discards every pending edit.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use crate::block::{Block, BlockId, BlockKind, BlockProps};
use crate::consts::{MAX_HEADING_LEVEL, MIN_HEADING_LEVEL};

/// In-modal working copy of one block's properties.
#[derive(Debug, Clone, PartialEq)]
pub struct PropsDraft {
    id: BlockId,
    kind: BlockKind,
    /// The working props. Unvalidated fields are edited directly; fields
    /// with model constraints go through the setters below.
    pub props: BlockProps,
}

impl PropsDraft {
    /// Seed a draft from a block's current state.
    #[must_use]
    pub fn from_block(block: &Block) -> Self {
        Self { id: block.id, kind: block.kind, props: block.props.clone() }
    }

    /// Id of the block being edited.
    #[must_use]
    pub fn id(&self) -> BlockId {
        self.id
    }

    /// Kind of the block being edited. Kinds are fixed at creation, so the
    /// draft exposes no way to change it.
    #[must_use]
    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    /// Set the heading level, clamped to the valid 1–6 range.
    pub fn set_heading_level(&mut self, level: u8) {
        self.props.heading_level = Some(level.clamp(MIN_HEADING_LEVEL, MAX_HEADING_LEVEL));
    }

    /// Consume the draft into the `(id, props)` pair a commit applies
    /// through the sequence's shallow-merge update.
    #[must_use]
    pub fn into_update(self) -> (BlockId, BlockProps) {
        (self.id, self.props)
    }
}
