//! Error types for command application.

use thiserror::Error;

/// Why a state token could not be decoded.
#[derive(Debug, Error)]
pub enum StateDecodeError {
    /// The token was empty, or decoded to nothing.
    #[error("state token is empty")]
    Empty,

    /// The token is not valid unpadded base64url.
    #[error("state token is not valid base64url: {0}")]
    Encoding(String),

    /// The decoded bytes are not a valid compressed block.
    #[error("state token failed to decompress: {0}")]
    Compression(String),

    /// The decompressed payload is not the expected JSON.
    #[error("state token is not valid JSON: {0}")]
    Json(String),

    /// The JSON has no `inventory` field.
    #[error("state token has no inventory")]
    MissingInventory,
}

/// Why a command could not be applied.
#[derive(Debug, Error)]
pub enum EffectError {
    /// The caller sent a malformed state token.
    #[error("invalid state: {0}")]
    StateDecode(#[from] StateDecodeError),

    /// A required or taken item is not in the inventory.
    ///
    /// The item is kept for logging; players only ever see a generic message.
    #[error("required item not held: {item}")]
    MissingRequiredItem {
        /// The item named by the command.
        item: String,
    },
}

impl EffectError {
    /// Returns true if the error is the caller's fault (a bad request), as
    /// opposed to an ordinary gameplay outcome.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::StateDecode(_))
    }
}
