//! Page session: hydration, save payload, and the typed endpoint boundary.
//!
//! The composer itself never persists anything — the surrounding page owns
//! that. This module is that surrounding layer: it hydrates a previously
//! saved blocks array (substituting an empty sequence when the stored JSON
//! is unusable), serializes the current sequence into the opaque
//! `{ "blocks": "<json>" }` body the save endpoint expects, and validates
//! the endpoint's reply once at the boundary so everything downstream works
//! with a typed value instead of raw JSON. Save outcomes surface through the
//! same success/error banner pattern used across the application.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::block::Block;
use crate::editor::EditorCore;

/// Error crossing the save-endpoint boundary.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The endpoint rejected the save and reported why.
    #[error("save rejected: {0}")]
    Endpoint(String),
    /// The endpoint answered with an unexpected HTTP status and no readable
    /// error body.
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    /// A success status carried a body that does not match the schema.
    #[error("malformed response body: {0}")]
    MalformedBody(String),
    /// The blocks array could not be serialized.
    #[error("failed to serialize blocks: {0}")]
    Serialize(#[from] serde_json::Error),
    /// The request never reached the endpoint.
    #[error("transport failure: {0}")]
    Transport(String),
}

/// Body of a page/form save request. The endpoint treats `blocks` as an
/// opaque string and persists it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavePayload {
    /// The serialized blocks array.
    pub blocks: String,
}

impl SavePayload {
    /// Serialize `blocks` into a save body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Serialize`] if the array cannot be serialized.
    pub fn new(blocks: &[Block]) -> Result<Self, ApiError> {
        Ok(Self { blocks: serde_json::to_string(blocks)? })
    }
}

/// Parsed success reply from the save endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveAck {
    /// Identifier of the saved page/form, when the endpoint reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Human-readable confirmation, when the endpoint reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Error body shape shared by the application's endpoints.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Validate a save-endpoint reply once, at the boundary.
///
/// Success statuses parse into a [`SaveAck`] (an empty body is a valid,
/// field-less ack). Failure statuses yield the endpoint's reported message
/// when the body carries one, or the bare status otherwise.
///
/// # Errors
///
/// Returns [`ApiError::MalformedBody`] for an unparseable success body,
/// [`ApiError::Endpoint`] or [`ApiError::Status`] for failure statuses.
pub fn parse_save_response(status: u16, body: &str) -> Result<SaveAck, ApiError> {
    if (200..300).contains(&status) {
        if body.trim().is_empty() {
            return Ok(SaveAck::default());
        }
        return serde_json::from_str(body).map_err(|e| ApiError::MalformedBody(e.to_string()));
    }
    if let Ok(ErrorBody { error }) = serde_json::from_str::<ErrorBody>(body) {
        return Err(ApiError::Endpoint(error));
    }
    Err(ApiError::Status(status))
}

/// Transport seam for the save endpoint.
pub trait SaveApi {
    /// Persist a save payload, returning the endpoint's typed reply.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] describing why the save did not complete.
    fn save_page(&mut self, payload: &SavePayload) -> Result<SaveAck, ApiError>;
}

/// Outcome banner shown by the surrounding page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Success(String),
    Error(String),
}

/// Hydrate a previously saved blocks array.
///
/// Empty input and unparseable input both yield an empty list — a broken
/// stored payload downgrades to a blank page rather than an error.
#[must_use]
pub fn hydrate_blocks(raw: &str) -> Vec<Block> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    match serde_json::from_str(raw) {
        Ok(blocks) => blocks,
        Err(e) => {
            warn!(error = %e, "discarding unparseable saved blocks");
            Vec::new()
        }
    }
}

/// One page's editing session: the editor plus the save/banner flow around
/// it.
#[derive(Default)]
pub struct PageSession {
    /// The editor over this page's blocks.
    pub editor: EditorCore,
    /// Outcome of the most recent save, until dismissed.
    pub banner: Option<Banner>,
}

impl PageSession {
    /// Start a session over a previously saved blocks payload.
    #[must_use]
    pub fn hydrate(raw: &str) -> Self {
        let mut editor = EditorCore::new();
        editor.load_blocks(hydrate_blocks(raw));
        Self { editor, banner: None }
    }

    /// Serialize the current sequence and push it through the save endpoint,
    /// surfacing the outcome on the banner.
    pub fn save(&mut self, api: &mut dyn SaveApi) {
        let payload = match SavePayload::new(self.editor.blocks()) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, "save aborted before transport");
                self.banner = Some(Banner::Error(e.to_string()));
                return;
            }
        };
        match api.save_page(&payload) {
            Ok(ack) => {
                debug!(id = ack.id.as_deref(), "page saved");
                let message = ack.message.unwrap_or_else(|| "Saved".to_owned());
                self.banner = Some(Banner::Success(message));
            }
            Err(e) => {
                warn!(error = %e, "page save failed");
                self.banner = Some(Banner::Error(e.to_string()));
            }
        }
    }

    /// Dismiss the outcome banner.
    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }
}
