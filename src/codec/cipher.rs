//! AES-128-GCM sealing and opening for token payloads.
//!
//! The scheme fixes AES-128-GCM with a 128-bit tag, empty associated data,
//! and a 16-byte nonce taken from the hex-encoded token identifier. Key
//! material comes from the leading bytes of the session identifier and never
//! outlives the call that derived it.

use aes_gcm::{
    AesGcm, Nonce,
    aead::{Aead, KeyInit, generic_array::typenum::U16},
    aes::Aes128,
};
use zeroize::Zeroize;

use crate::core::{CipherError, KEY_SIZE, NONCE_SIZE, TAG_SIZE};

/// AES-128-GCM parameterized with this scheme's 16-byte nonce.
type TokenCipher = AesGcm<Aes128, U16>;

/// An AES-128 key derived from a session identifier.
///
/// Zeroized on drop.
pub struct TokenKey {
    key: [u8; KEY_SIZE],
}

impl TokenKey {
    /// Derive a key from the leading [`KEY_SIZE`] bytes of a session
    /// identifier.
    ///
    /// # Errors
    ///
    /// `ShortKey` when the identifier encodes to fewer than [`KEY_SIZE`]
    /// UTF-8 bytes.
    pub fn derive(session_id: &str) -> Result<Self, CipherError> {
        let bytes = session_id.as_bytes();
        if bytes.len() < KEY_SIZE {
            return Err(CipherError::ShortKey);
        }

        let mut key = [0u8; KEY_SIZE];
        key.copy_from_slice(&bytes[..KEY_SIZE]);
        Ok(Self { key })
    }
}

impl Drop for TokenKey {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

/// Encrypt a token payload.
///
/// # Returns
/// Ciphertext with the 16-byte GCM tag appended.
pub fn seal(
    key: &TokenKey,
    nonce: &[u8; NONCE_SIZE],
    plaintext: &[u8],
) -> Result<Vec<u8>, CipherError> {
    let cipher = TokenCipher::new((&key.key).into());

    cipher
        .encrypt(Nonce::from_slice(nonce), plaintext)
        .map_err(|_| CipherError::EncryptionFailed)
}

/// Decrypt a token payload.
///
/// # Returns
/// The plaintext, or `DecryptionFailed` when the tag does not verify.
pub fn open(
    key: &TokenKey,
    nonce: &[u8; NONCE_SIZE],
    ciphertext: &[u8],
) -> Result<Vec<u8>, CipherError> {
    if ciphertext.len() < TAG_SIZE {
        return Err(CipherError::DecryptionFailed);
    }

    let cipher = TokenCipher::new((&key.key).into());

    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| CipherError::DecryptionFailed)
}
