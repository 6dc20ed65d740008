//! The token codec.
//!
//! Implements the stateless commitment scheme:
//! - `token_id`: random token identifiers (hex, doubling as the AEAD nonce)
//! - `cipher`: AES-128-GCM sealing and opening with session-derived keys
//! - `manager`: configuration plus the generate/validate operations

mod cipher;
mod manager;
mod token_id;

pub use cipher::*;
pub use manager::*;
pub use token_id::*;
