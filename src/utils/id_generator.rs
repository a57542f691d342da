//! Debug log id generation and validation.

use crate::error::AppError;
use base64::Engine as _;
use serde_json::json;

/// Length of random bytes before base64 encoding.
const ID_LENGTH_BYTES: usize = 9;

/// Longest id accepted from clients.
pub const MAX_ID_LENGTH: usize = 128;

/// Generates a random debug log id.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing a 12-character id.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the system random number generator fails.
pub fn generate_id() -> Result<String, AppError> {
    let mut buffer = [0u8; ID_LENGTH_BYTES];

    getrandom::fill(&mut buffer).map_err(|e| {
        AppError::internal(
            "Failed to generate random bytes",
            json!({ "reason": e.to_string() }),
        )
    })?;

    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer))
}

/// Normalises a client-provided id.
///
/// Trims surrounding whitespace and rejects empty or oversized values.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the id is empty or longer than
/// [`MAX_ID_LENGTH`].
pub fn normalize_id(id: &str) -> Result<&str, AppError> {
    let id = id.trim();

    if id.is_empty() {
        return Err(AppError::bad_request(
            "Debug log id is required",
            json!({ "field": "id" }),
        ));
    }

    if id.len() > MAX_ID_LENGTH {
        return Err(AppError::bad_request(
            "Debug log id is too long",
            json!({ "field": "id", "max": MAX_ID_LENGTH }),
        ));
    }

    Ok(id)
}
