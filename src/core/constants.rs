//! Constants fixed by the token scheme.
//!
//! These values define the wire format and MUST NOT be changed: tokens
//! produced under different values do not interoperate.

// =============================================================================
// TOKEN GEOMETRY
// =============================================================================

/// Random bytes drawn for a token identifier (16 hex characters once encoded).
pub const TOKEN_ID_SIZE: usize = 8;

/// AES-128 key size. Session identifiers must encode to at least this many
/// UTF-8 bytes, since the key is taken from their leading bytes.
pub const KEY_SIZE: usize = 16;

/// AEAD nonce size: the UTF-8 byte length of a hex-encoded token identifier.
pub const NONCE_SIZE: usize = TOKEN_ID_SIZE * 2;

/// GCM authentication tag size (128 bits).
pub const TAG_SIZE: usize = 16;

/// Field separator in the token wire format and the encrypted payload.
pub const SEPARATOR: char = '|';

// =============================================================================
// DEFAULTS
// =============================================================================

/// Default recency window for tokens: 60 minutes, in milliseconds.
pub const DEFAULT_EXPIRY_MILLIS: u64 = 60 * 60 * 1000;

/// Default name for the request parameter carrying the token.
pub const DEFAULT_TOKEN_NAME: &str = "csrf_token";
