//! Link token generation.
//!
//! Tokens carry 96 bits of OS randomness, encoded as URL-safe base64 without
//! padding (16 characters). Uniqueness is not pre-checked here; the store's
//! unique constraint on `smart_links.token` is the collision guard.

use crate::error::AppError;
use base64::Engine as _;

/// Length of random bytes before base64 encoding.
const TOKEN_LENGTH_BYTES: usize = 12;

/// Generates a cryptographically secure random link token.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the system random number generator fails.
///
/// # Examples
///
/// ```ignore
/// let token = generate_token()?;
/// assert_eq!(token.len(), 16);
/// assert!(token.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
/// ```
pub fn generate_token() -> Result<String, AppError> {
    let mut buffer = [0u8; TOKEN_LENGTH_BYTES];

    getrandom::fill(&mut buffer)
        .map_err(|e| AppError::internal(format!("Failed to generate random bytes: {e}")))?;

    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer))
}
