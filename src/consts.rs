//! Shared constants for the composer crate.

use crate::block::BlockKind;

// ── Palette ─────────────────────────────────────────────────────

/// The fixed menu of block types offered as drag sources, in display order.
pub const PALETTE: [BlockKind; 6] = [
    BlockKind::Heading,
    BlockKind::Text,
    BlockKind::Button,
    BlockKind::Image,
    BlockKind::Divider,
    BlockKind::Link,
];

// ── Default copy ────────────────────────────────────────────────

/// Placeholder text for a freshly inserted heading block.
pub const DEFAULT_HEADING_TEXT: &str = "Heading";

/// Placeholder copy for a freshly inserted text block.
pub const DEFAULT_TEXT_COPY: &str = "Start typing your text here.";

/// Label for a freshly inserted button block.
pub const DEFAULT_BUTTON_TEXT: &str = "Click me";

/// Label for a freshly inserted link block.
pub const DEFAULT_LINK_TEXT: &str = "Link text";

// ── Bounds ──────────────────────────────────────────────────────

/// Smallest valid heading level (`<h1>`).
pub const MIN_HEADING_LEVEL: u8 = 1;

/// Largest valid heading level (`<h6>`).
pub const MAX_HEADING_LEVEL: u8 = 6;

/// Heading level assigned to new heading blocks.
pub const DEFAULT_HEADING_LEVEL: u8 = 2;

// ── Host persistence keys ───────────────────────────────────────

/// Key under which the palette-panel expansion flag is persisted.
pub const PALETTE_EXPANDED_KEY: &str = "composer_palette_expanded";
