//! Input model: keyboard keys and the drag-and-drop state machine.
//!
//! Drag-and-drop is tracked as an explicit state machine rather than a set
//! of nullable flags. A gesture either brings a new block in from the
//! palette (`DraggingNew`) or relocates an existing block (`DraggingExisting`);
//! both carry the current drop target while the pointer hovers the list.
//! Transitions mutate only this state — the block sequence is untouched until
//! the editor resolves a drop, so an abandoned gesture has no partial
//! effects.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::block::{BlockId, BlockKind};

/// A keyboard key, by the name the host reports (e.g. `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// The active drag gesture, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    /// No gesture in progress; waiting for the next drag-start.
    #[default]
    Idle,
    /// A palette entry is being dragged toward the list.
    DraggingNew {
        /// Kind of block the palette entry will create on drop.
        kind: BlockKind,
        /// Hovered insertion index, when the pointer is over the list.
        over: Option<usize>,
    },
    /// An existing block is being dragged to a new position.
    DraggingExisting {
        /// Id of the block being relocated.
        id: BlockId,
        /// Hovered target index, when the pointer is over the list.
        over: Option<usize>,
    },
}

impl DragState {
    /// Start a palette drag. Ignored unless idle — a second drag-start while
    /// a gesture is active cannot clobber the one in flight.
    pub fn begin_new(&mut self, kind: BlockKind) {
        if matches!(self, Self::Idle) {
            *self = Self::DraggingNew { kind, over: None };
        }
    }

    /// Start relocating an existing block. Ignored unless idle.
    pub fn begin_existing(&mut self, id: BlockId) {
        if matches!(self, Self::Idle) {
            *self = Self::DraggingExisting { id, over: None };
        }
    }

    /// Record `index` as the hovered drop target. No-op when idle.
    pub fn hover(&mut self, index: usize) {
        match self {
            Self::Idle => {}
            Self::DraggingNew { over, .. } | Self::DraggingExisting { over, .. } => {
                *over = Some(index);
            }
        }
    }

    /// Clear the hovered drop target, keeping the gesture alive. No-op when
    /// idle.
    pub fn leave(&mut self) {
        match self {
            Self::Idle => {}
            Self::DraggingNew { over, .. } | Self::DraggingExisting { over, .. } => {
                *over = None;
            }
        }
    }

    /// Abandon the gesture (drag-end without a drop). Always returns to
    /// idle; the sequence is never touched.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    /// Whether no gesture is in progress.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The currently hovered drop target, if a gesture is over the list.
    #[must_use]
    pub fn drop_target(&self) -> Option<usize> {
        match self {
            Self::Idle => None,
            Self::DraggingNew { over, .. } | Self::DraggingExisting { over, .. } => *over,
        }
    }
}
