//! Block model: kinds, typed property bag, and shallow-merge patching.
//!
//! A block is one typed content unit in a page or form body. Its `kind` is
//! fixed at creation (there is no retype operation); everything editable
//! lives in [`BlockProps`], a bag of optional fields where only the fields
//! relevant to the kind are populated. Props travel over the wire in
//! camelCase with absent fields omitted, so a serialized sequence round-trips
//! without loss.

#[cfg(test)]
#[path = "block_test.rs"]
mod block_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts;

/// Unique identifier for a block. Assigned at creation, stable for the
/// block's lifetime, and the key used by removal and reordering.
pub type BlockId = Uuid;

/// The kind of a content block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    /// Section heading with a level of 1–6.
    Heading,
    /// Paragraph of body copy.
    Text,
    /// Call-to-action button, optionally copying its URL to the clipboard.
    Button,
    /// Image with source URL and alt text.
    Image,
    /// Horizontal rule with no editable content.
    Divider,
    /// Inline hyperlink opening in the same or a new tab.
    Link,
}

impl BlockKind {
    /// Human-readable palette label for this kind.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Heading => "Heading",
            Self::Text => "Text",
            Self::Button => "Button",
            Self::Image => "Image",
            Self::Divider => "Divider",
            Self::Link => "Link",
        }
    }
}

/// Visual style of a button block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    /// Filled, high-emphasis button.
    #[default]
    Primary,
    /// Filled, low-emphasis button.
    Secondary,
    /// Border-only button.
    Outline,
}

/// Where a link block opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LinkTarget {
    /// Open in a new tab.
    #[default]
    #[serde(rename = "_blank")]
    NewTab,
    /// Open in the current tab.
    #[serde(rename = "_self")]
    SameTab,
}

/// Horizontal alignment of a block's rendered content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Per-block editable properties.
///
/// One bag covers every kind; fields irrelevant to a block's kind stay
/// `None` and are omitted from serialization. The styling fields at the
/// bottom are shared across kinds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlockProps {
    /// Body copy for heading, text, and link blocks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Heading level, 1–6.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading_level: Option<u8>,
    /// Label shown on a button block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    /// Destination URL for button and link blocks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Visual style of a button block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_style: Option<ButtonStyle>,
    /// When set, clicking the rendered button copies `url` to the clipboard.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_link: Option<bool>,
    /// Source URL of an image block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Alt text of an image block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<String>,
    /// Tab behavior of a link block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<LinkTarget>,
    /// Horizontal alignment of the rendered content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    /// Foreground color as a CSS color string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Background color as a CSS color string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Padding as a CSS length string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    /// Margin as a CSS length string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
}

impl BlockProps {
    /// Default props for a freshly created block of the given kind.
    #[must_use]
    pub fn defaults_for(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Heading => Self {
                text: Some(consts::DEFAULT_HEADING_TEXT.to_owned()),
                heading_level: Some(consts::DEFAULT_HEADING_LEVEL),
                ..Self::default()
            },
            BlockKind::Text => Self {
                text: Some(consts::DEFAULT_TEXT_COPY.to_owned()),
                ..Self::default()
            },
            BlockKind::Button => Self {
                button_text: Some(consts::DEFAULT_BUTTON_TEXT.to_owned()),
                button_style: Some(ButtonStyle::Primary),
                ..Self::default()
            },
            BlockKind::Image => Self {
                image_alt: Some(String::new()),
                ..Self::default()
            },
            BlockKind::Divider => Self::default(),
            BlockKind::Link => Self {
                text: Some(consts::DEFAULT_LINK_TEXT.to_owned()),
                target: Some(LinkTarget::NewTab),
                ..Self::default()
            },
        }
    }

    /// Shallow-merge `patch` into `self`: every `Some` field of the patch
    /// replaces the corresponding field here, `None` fields are untouched.
    /// There is no way to clear a field through a merge.
    pub fn merge(&mut self, patch: &Self) {
        if patch.text.is_some() {
            self.text.clone_from(&patch.text);
        }
        if patch.heading_level.is_some() {
            self.heading_level = patch.heading_level;
        }
        if patch.button_text.is_some() {
            self.button_text.clone_from(&patch.button_text);
        }
        if patch.url.is_some() {
            self.url.clone_from(&patch.url);
        }
        if patch.button_style.is_some() {
            self.button_style = patch.button_style;
        }
        if patch.copy_link.is_some() {
            self.copy_link = patch.copy_link;
        }
        if patch.image_url.is_some() {
            self.image_url.clone_from(&patch.image_url);
        }
        if patch.image_alt.is_some() {
            self.image_alt.clone_from(&patch.image_alt);
        }
        if patch.target.is_some() {
            self.target = patch.target;
        }
        if patch.align.is_some() {
            self.align = patch.align;
        }
        if patch.color.is_some() {
            self.color.clone_from(&patch.color);
        }
        if patch.background_color.is_some() {
            self.background_color.clone_from(&patch.background_color);
        }
        if patch.padding.is_some() {
            self.padding.clone_from(&patch.padding);
        }
        if patch.margin.is_some() {
            self.margin.clone_from(&patch.margin);
        }
    }
}

/// A content block as stored in the sequence and on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Unique identifier; the removal/reorder key.
    pub id: BlockId,
    /// Content kind. Serialized as `"type"`; fixed at creation.
    #[serde(rename = "type")]
    pub kind: BlockKind,
    /// Editable properties for this block.
    #[serde(default)]
    pub props: BlockProps,
}

impl Block {
    /// Create a block of `kind` with a fresh id and default props.
    #[must_use]
    pub fn new(kind: BlockKind) -> Self {
        Self { id: Uuid::new_v4(), kind, props: BlockProps::defaults_for(kind) }
    }
}
