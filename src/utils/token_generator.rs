//! Short token generation.
//!
//! Tokens are random, not derived from the URL, and are not checked against
//! existing mappings here. A collision is caught by the unique index on
//! `lower(short_url)` at insert time.

use base64::Engine as _;
use rand::RngCore;

/// Length of random bytes before base64 encoding.
const TOKEN_LENGTH_BYTES: usize = 9;

/// Generates a random URL-safe token.
///
/// Fills 9 bytes from the thread-local CSPRNG and encodes them as URL-safe
/// base64 without padding, producing a 12-character token over
/// `[A-Za-z0-9_-]`.
///
/// # Examples
///
/// ```
/// let token = shorturl::utils::token_generator::generate_token();
/// assert_eq!(token.len(), 12);
/// ```
pub fn generate_token() -> String {
    let mut buffer = [0u8; TOKEN_LENGTH_BYTES];
    rand::rng().fill_bytes(&mut buffer);

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}
