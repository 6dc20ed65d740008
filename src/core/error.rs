//! Error types for the token codec.

use thiserror::Error;

/// Caller contract violations.
///
/// These indicate a programming mistake by the integrator, not an attack or
/// a transient condition, and are never retried. Every other failure mode is
/// reported to the configured diagnostics sink and surfaced only through the
/// operation's return value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CsrfError {
    /// An empty session identifier was supplied.
    #[error("token cannot be generated from an empty session identifier")]
    EmptySessionId,
}

/// Errors in the AEAD layer.
///
/// Carried as the cause of internal-failure notices; they never escape the
/// codec's public operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// Session identifier provides fewer than 16 bytes of key material.
    #[error("session identifier provides fewer than 16 bytes of key material")]
    ShortKey,

    /// Token identifier provides fewer than 16 bytes of nonce material.
    #[error("token identifier provides fewer than 16 bytes of nonce material")]
    ShortNonce,

    /// AEAD encryption failed.
    #[error("AEAD encryption failed")]
    EncryptionFailed,

    /// AEAD decryption failed (invalid tag or corrupted).
    #[error("AEAD decryption failed (invalid tag or corrupted)")]
    DecryptionFailed,
}
