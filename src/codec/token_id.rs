//! Random token identifiers.
//!
//! A token identifier is [`TOKEN_ID_SIZE`] bytes from the configured
//! [`RandomSource`], hex-encoded to 16 lowercase characters. Hex keeps the
//! full entropy of the raw bytes printable, and the encoded form is exactly
//! the [`NONCE_SIZE`] UTF-8 bytes the AEAD nonce requires.

use std::fmt;

use crate::core::{CipherError, NONCE_SIZE, RandomSource, TOKEN_ID_SIZE};

/// A freshly drawn token identifier.
///
/// Uniqueness rests on the 64 bits of entropy behind each identifier; reuse
/// is not detected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenId {
    encoded: String,
}

impl TokenId {
    /// Draw a new identifier from `random`.
    pub fn generate(random: &dyn RandomSource) -> Self {
        let mut bytes = [0u8; TOKEN_ID_SIZE];
        random.fill_bytes(&mut bytes);

        Self {
            encoded: hex::encode(bytes),
        }
    }

    /// The 16-character lowercase hex form.
    pub fn as_str(&self) -> &str {
        &self.encoded
    }

    /// The identifier's UTF-8 bytes, used as the AEAD nonce.
    pub fn nonce(&self) -> [u8; NONCE_SIZE] {
        let mut nonce = [0u8; NONCE_SIZE];
        nonce.copy_from_slice(self.encoded.as_bytes());
        nonce
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded)
    }
}

/// Nonce bytes for a token identifier field taken off the wire: its first
/// [`NONCE_SIZE`] UTF-8 bytes. Longer fields are truncated; shorter fields
/// cannot produce a nonce.
pub(crate) fn wire_nonce(token_id: &str) -> Result<[u8; NONCE_SIZE], CipherError> {
    let bytes = token_id.as_bytes();
    if bytes.len() < NONCE_SIZE {
        return Err(CipherError::ShortNonce);
    }

    let mut nonce = [0u8; NONCE_SIZE];
    nonce.copy_from_slice(&bytes[..NONCE_SIZE]);
    Ok(nonce)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::OsRandom;

    #[test]
    fn test_generate_is_lowercase_hex() {
        let id = TokenId::generate(&OsRandom);

        assert_eq!(id.as_str().len(), NONCE_SIZE);
        assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(id.as_str(), id.as_str().to_lowercase());
    }

    #[test]
    fn test_nonce_matches_encoding() {
        let id = TokenId::generate(&OsRandom);
        assert_eq!(&id.nonce(), id.as_str().as_bytes());
    }

    #[test]
    fn test_ids_are_distinct() {
        let first = TokenId::generate(&OsRandom);
        let second = TokenId::generate(&OsRandom);
        assert_ne!(first, second);
    }

    #[test]
    fn test_wire_nonce_uses_leading_bytes() {
        let nonce = wire_nonce("0123456789abcdefEXTRA").unwrap();
        assert_eq!(&nonce, b"0123456789abcdef");
    }

    #[test]
    fn test_wire_nonce_rejects_short_fields() {
        assert!(matches!(
            wire_nonce("0123456789abcde"),
            Err(CipherError::ShortNonce)
        ));
    }
}
