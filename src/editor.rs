//! Editor core and platform-bound host shell.
//!
//! `EditorCore` is the pure heart of the builder: it owns the block
//! sequence, the transient selection/editing state, and the drag state
//! machine, and every mutating handler returns [`Action`]s for the host to
//! process. It has no host dependencies and is tested directly.
//!
//! `Editor` wraps the core with an injected [`Platform`]: it executes
//! clipboard effects, invokes the registered change callback with the full
//! replacement slice after every sequence mutation, and persists the
//! palette-panel expansion flag.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use crate::block::{Block, BlockId, BlockKind, BlockProps};
use crate::consts::PALETTE_EXPANDED_KEY;
use crate::draft::PropsDraft;
use crate::host::Platform;
use crate::input::{DragState, Key};
use crate::sequence::BlockSequence;

/// Effects returned from editor handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The block sequence changed; the host must re-read the blocks and
    /// forward the full replacement array to its change sink.
    SequenceChanged,
    /// The property modal opened for the given block.
    EditOpened {
        /// Block whose draft is now being edited.
        id: BlockId,
    },
    /// The property modal closed (committed, cancelled, or block removed).
    EditClosed,
    /// The host should place this text on the clipboard.
    CopyLink(String),
}

/// Core editor state — everything that doesn't depend on a host.
#[derive(Debug, Clone, Default)]
pub struct EditorCore {
    /// The block sequence; source of truth for the page body.
    pub seq: BlockSequence,
    /// Currently selected block, if any. Transient UI state.
    pub selected_id: Option<BlockId>,
    /// Open property draft, if the modal is showing. Transient UI state.
    pub editing: Option<PropsDraft>,
    /// Active drag gesture.
    pub drag: DragState,
}

impl EditorCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Hydration ---

    /// Replace the sequence with hydrated blocks, dropping all transient
    /// state. Drafts never survive a rebuild.
    pub fn load_blocks(&mut self, blocks: Vec<Block>) {
        self.seq = BlockSequence::from_blocks(blocks);
        self.selected_id = None;
        self.editing = None;
        self.drag = DragState::Idle;
    }

    // --- Block operations ---

    /// Append a new block of `kind` with default props and immediately open
    /// its property modal.
    pub fn add_block(&mut self, kind: BlockKind) -> Vec<Action> {
        let block = Block::new(kind);
        let id = block.id;
        self.selected_id = Some(id);
        self.editing = Some(PropsDraft::from_block(&block));
        self.seq.push(block);
        vec![Action::SequenceChanged, Action::EditOpened { id }]
    }

    /// Remove the block with the given id. Idempotent: an unknown id changes
    /// nothing. Clears selection and closes the modal when they referenced
    /// the removed block.
    pub fn remove_block(&mut self, id: &BlockId) -> Vec<Action> {
        if self.seq.remove(id).is_none() {
            return Vec::new();
        }
        if self.selected_id.as_ref() == Some(id) {
            self.selected_id = None;
        }
        let mut actions = vec![Action::SequenceChanged];
        if self.editing.as_ref().is_some_and(|d| d.id() == *id) {
            self.editing = None;
            actions.push(Action::EditClosed);
        }
        actions
    }

    /// Shallow-merge `patch` into the matching block's props. No-op for an
    /// unknown id.
    pub fn update_block(&mut self, id: &BlockId, patch: &BlockProps) -> Vec<Action> {
        if self.seq.update(id, patch) {
            vec![Action::SequenceChanged]
        } else {
            Vec::new()
        }
    }

    // --- Selection and editing ---

    /// Select the block with the given id, if present.
    pub fn select(&mut self, id: &BlockId) {
        if self.seq.contains(id) {
            self.selected_id = Some(*id);
        }
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.selected_id = None;
    }

    /// Open the property modal for the given block, seeding a draft from its
    /// current props. No-op for an unknown id.
    pub fn begin_edit(&mut self, id: &BlockId) -> Vec<Action> {
        let Some(block) = self.seq.get(id) else {
            return Vec::new();
        };
        self.selected_id = Some(block.id);
        self.editing = Some(PropsDraft::from_block(block));
        vec![Action::EditOpened { id: *id }]
    }

    /// Commit the open draft through a shallow-merge update and close the
    /// modal. The block returns to the idle state.
    pub fn commit_edit(&mut self) -> Vec<Action> {
        let Some(draft) = self.editing.take() else {
            return Vec::new();
        };
        self.selected_id = None;
        let (id, props) = draft.into_update();
        if self.seq.update(&id, &props) {
            vec![Action::SequenceChanged, Action::EditClosed]
        } else {
            vec![Action::EditClosed]
        }
    }

    /// Close the modal and discard every pending draft edit.
    pub fn cancel_edit(&mut self) -> Vec<Action> {
        if self.editing.take().is_none() {
            return Vec::new();
        }
        self.selected_id = None;
        vec![Action::EditClosed]
    }

    // --- Drag and drop ---

    /// A palette entry started dragging toward the list.
    pub fn palette_drag_start(&mut self, kind: BlockKind) {
        self.drag.begin_new(kind);
    }

    /// An existing block started dragging to a new position. Unknown ids
    /// leave the machine idle.
    pub fn block_drag_start(&mut self, id: &BlockId) {
        if self.seq.contains(id) {
            self.drag.begin_existing(*id);
        }
    }

    /// The pointer is hovering drop position `index`.
    pub fn drag_over(&mut self, index: usize) {
        self.drag.hover(index);
    }

    /// The pointer left the list without dropping.
    pub fn drag_leave(&mut self) {
        self.drag.leave();
    }

    /// The gesture was abandoned (drag-end without drop). The sequence is
    /// untouched.
    pub fn drag_end(&mut self) {
        self.drag.cancel();
    }

    /// Resolve the active gesture at the current drop target.
    ///
    /// A palette drop splices the new block in at the hovered index (or
    /// appends when none was hovered) and opens its property modal, exactly
    /// like [`Self::add_block`]. A reorder drop relocates the dragged block
    /// to the hovered index; without a hovered index it is a no-op. Either
    /// way the machine returns to idle.
    pub fn on_drop(&mut self) -> Vec<Action> {
        match std::mem::take(&mut self.drag) {
            DragState::Idle => Vec::new(),
            DragState::DraggingNew { kind, over } => {
                let block = Block::new(kind);
                let id = block.id;
                let index = over.unwrap_or_else(|| self.seq.len());
                self.selected_id = Some(id);
                self.editing = Some(PropsDraft::from_block(&block));
                self.seq.insert(index, block);
                vec![Action::SequenceChanged, Action::EditOpened { id }]
            }
            DragState::DraggingExisting { id, over } => {
                let Some(index) = over else {
                    return Vec::new();
                };
                if self.seq.relocate(&id, index) {
                    vec![Action::SequenceChanged]
                } else {
                    Vec::new()
                }
            }
        }
    }

    // --- Clipboard ---

    /// A rendered button with `copyLink` set was activated: yield its URL
    /// for the host clipboard. No-op for other blocks or buttons without a
    /// URL.
    pub fn copy_button_link(&self, id: &BlockId) -> Vec<Action> {
        let Some(block) = self.seq.get(id) else {
            return Vec::new();
        };
        if block.kind != BlockKind::Button || block.props.copy_link != Some(true) {
            return Vec::new();
        }
        match &block.props.url {
            Some(url) => vec![Action::CopyLink(url.clone())],
            None => Vec::new(),
        }
    }

    // --- Keyboard ---

    /// Host keyboard input. Escape dismisses an open property modal,
    /// discarding its draft.
    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        if key.0 == "Escape" { self.cancel_edit() } else { Vec::new() }
    }

    // --- Queries ---

    /// All blocks in render order.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        self.seq.as_slice()
    }

    /// The currently selected block, if any.
    #[must_use]
    pub fn selection(&self) -> Option<BlockId> {
        self.selected_id
    }

    /// The block whose property modal is open, if any.
    #[must_use]
    pub fn editing_id(&self) -> Option<BlockId> {
        self.editing.as_ref().map(PropsDraft::id)
    }
}

/// The full editor. Wraps `EditorCore` and binds it to a host platform.
pub struct Editor<P: Platform> {
    pub core: EditorCore,
    platform: P,
    on_change: Option<Box<dyn FnMut(&[Block])>>,
    palette_expanded: bool,
}

impl<P: Platform> Editor<P> {
    /// Create an editor bound to the given platform, restoring the persisted
    /// palette-panel state (expanded by default).
    #[must_use]
    pub fn new(platform: P) -> Self {
        let palette_expanded = platform
            .get_persisted(PALETTE_EXPANDED_KEY)
            .map_or(true, |v| v == "true");
        Self { core: EditorCore::new(), platform, on_change: None, palette_expanded }
    }

    /// Register the change sink invoked with the full replacement slice
    /// after every sequence mutation.
    pub fn set_on_change(&mut self, callback: impl FnMut(&[Block]) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    fn apply_effects(&mut self, actions: &[Action]) {
        for action in actions {
            match action {
                Action::SequenceChanged => {
                    if let Some(callback) = self.on_change.as_mut() {
                        callback(self.core.seq.as_slice());
                    }
                }
                Action::CopyLink(text) => self.platform.copy_to_clipboard(text),
                Action::EditOpened { .. } | Action::EditClosed => {}
            }
        }
    }

    // --- Delegated operations ---

    pub fn load_blocks(&mut self, blocks: Vec<Block>) {
        self.core.load_blocks(blocks);
    }

    pub fn add_block(&mut self, kind: BlockKind) -> Vec<Action> {
        let actions = self.core.add_block(kind);
        self.apply_effects(&actions);
        actions
    }

    pub fn remove_block(&mut self, id: &BlockId) -> Vec<Action> {
        let actions = self.core.remove_block(id);
        self.apply_effects(&actions);
        actions
    }

    pub fn update_block(&mut self, id: &BlockId, patch: &BlockProps) -> Vec<Action> {
        let actions = self.core.update_block(id, patch);
        self.apply_effects(&actions);
        actions
    }

    pub fn begin_edit(&mut self, id: &BlockId) -> Vec<Action> {
        let actions = self.core.begin_edit(id);
        self.apply_effects(&actions);
        actions
    }

    pub fn commit_edit(&mut self) -> Vec<Action> {
        let actions = self.core.commit_edit();
        self.apply_effects(&actions);
        actions
    }

    pub fn cancel_edit(&mut self) -> Vec<Action> {
        let actions = self.core.cancel_edit();
        self.apply_effects(&actions);
        actions
    }

    pub fn on_drop(&mut self) -> Vec<Action> {
        let actions = self.core.on_drop();
        self.apply_effects(&actions);
        actions
    }

    pub fn copy_button_link(&mut self, id: &BlockId) -> Vec<Action> {
        let actions = self.core.copy_button_link(id);
        self.apply_effects(&actions);
        actions
    }

    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        let actions = self.core.on_key_down(key);
        self.apply_effects(&actions);
        actions
    }

    // --- Palette panel ---

    /// Whether the palette panel is expanded.
    #[must_use]
    pub fn palette_expanded(&self) -> bool {
        self.palette_expanded
    }

    /// Toggle the palette panel and persist the new state.
    pub fn toggle_palette(&mut self) -> bool {
        self.palette_expanded = !self.palette_expanded;
        self.platform
            .set_persisted(PALETTE_EXPANDED_KEY, if self.palette_expanded { "true" } else { "false" });
        self.palette_expanded
    }

    /// The bound platform.
    #[must_use]
    pub fn platform(&self) -> &P {
        &self.platform
    }
}
