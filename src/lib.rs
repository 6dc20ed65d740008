//! # stateless-csrf
//!
//! Stateless anti-forgery (CSRF) tokens bound to a caller's session
//! identifier.
//!
//! Tokens are tied to a session but stored nowhere: no token table, no
//! per-session nonce cache. A valid token proves that the bearer possessed
//! the session identifier when the token was issued, and that issuance
//! happened within an allowed recency window. Because nothing is persisted,
//! tokens can be generated anywhere in an application and validated anywhere
//! else.
//!
//! Tokens are generated in this manner:
//!
//! 1. Given a session identifier (at least 16 UTF-8 bytes), draw a random
//!    token identifier from a CSPRNG.
//! 2. Read the current timestamp from the configured clock.
//! 3. Encrypt `session|timestamp` under AES-128-GCM, keyed by the first 16
//!    bytes of the session identifier, with the token identifier as nonce.
//! 4. The token is the token identifier followed by the hex ciphertext:
//!    `token_id|hex(ciphertext)`.
//!
//! Validation splits an incoming token, re-derives the same key and nonce
//! from the caller-supplied session identifier and the token identifier,
//! decrypts, and checks that the full session identifier matches (not just
//! the key bytes) and that the embedded timestamp is within the allowed
//! expiry window.
//!
//! The scheme defends against forgery only. It is not a confidentiality
//! layer, a token can be replayed within its expiry window, and session
//! lifecycle is the caller's concern.
//!
//! ## Feature Flags
//!
//! - `tracing` (default): the [`TracingSink`] diagnostics implementation.
//!
//! ## Modules
//!
//! - [`core`]: constants, error types, and the injectable capability traits
//! - [`codec`]: the token codec (identifiers, AEAD sealing, the manager)
//! - [`report`]: provided diagnostics sinks
//!
//! ## Example Usage
//!
//! ```rust
//! use stateless_csrf::TokenManager;
//!
//! let manager = TokenManager::new();
//! let session = "f81d4fae7dec11d0a765";
//!
//! let token = manager.generate_token(session).unwrap().unwrap();
//! assert!(manager.validate_token(&token, session));
//! assert!(!manager.validate_token(&token, "a-different-session-id"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod codec;
pub mod core;
pub mod report;

// Re-export commonly used items at crate root
pub use codec::{TokenId, TokenManager};
pub use core::{
    CipherError, Clock, CsrfError, DEFAULT_EXPIRY_MILLIS, DEFAULT_TOKEN_NAME, DiagnosticsSink,
    OsRandom, RandomSource, SystemClock,
};
pub use report::StderrSink;

#[cfg(feature = "tracing")]
#[cfg_attr(docsrs, doc(cfg(feature = "tracing")))]
pub use report::TracingSink;
