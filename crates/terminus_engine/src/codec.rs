//! State token encoding.
//!
//! A token is the JSON form of a [`ClientGameState`], LZ4 block-compressed
//! with its length prepended, then base64url-encoded without padding. The
//! result only uses `A-Z a-z 0-9 - _` and can sit in a query string as is.
//!
//! The token carries no version marker.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use lz4_flex::{compress_prepend_size, decompress_size_prepended};
use serde_json::{Map, Value};
use terminus_foundation::ClientGameState;

use crate::error::StateDecodeError;

/// Largest decompressed payload a token may declare.
pub const MAX_STATE_BYTES: usize = 64 * 1024;

/// Encodes a state into a URL-safe token.
#[must_use]
pub fn encode(state: &ClientGameState) -> String {
    let inventory = state
        .inventory
        .iter()
        .cloned()
        .map(Value::String)
        .collect();
    let mut object = Map::new();
    object.insert("inventory".to_string(), Value::Array(inventory));
    let json = Value::Object(object).to_string();

    URL_SAFE_NO_PAD.encode(compress_prepend_size(json.as_bytes()))
}

/// Decodes a token produced by [`encode`].
///
/// Only the structure is checked: the payload must be JSON with an
/// `inventory` list of strings. Unknown fields are ignored.
///
/// # Errors
///
/// Returns a [`StateDecodeError`] naming the stage that failed.
pub fn decode(token: &str) -> Result<ClientGameState, StateDecodeError> {
    if token.is_empty() {
        return Err(StateDecodeError::Empty);
    }

    let compressed = URL_SAFE_NO_PAD
        .decode(token)
        .map_err(|e| StateDecodeError::Encoding(e.to_string()))?;

    let Some(prefix) = compressed.first_chunk::<4>() else {
        return Err(StateDecodeError::Compression(
            "missing length prefix".to_string(),
        ));
    };
    let declared = u32::from_le_bytes(*prefix) as usize;
    if declared > MAX_STATE_BYTES {
        return Err(StateDecodeError::Compression(format!(
            "declared size {declared} exceeds {MAX_STATE_BYTES} bytes"
        )));
    }

    let json = decompress_size_prepended(&compressed)
        .map_err(|e| StateDecodeError::Compression(e.to_string()))?;
    if json.is_empty() {
        return Err(StateDecodeError::Empty);
    }

    let value: Value =
        serde_json::from_slice(&json).map_err(|e| StateDecodeError::Json(e.to_string()))?;
    if value.get("inventory").is_none() {
        return Err(StateDecodeError::MissingInventory);
    }

    serde_json::from_value(value).map_err(|e| StateDecodeError::Json(e.to_string()))
}
