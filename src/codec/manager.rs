//! Token generation and validation.
//!
//! [`TokenManager`] issues anti-forgery tokens bound to a session identifier
//! and validates them without consulting any server-side record: key and
//! nonce are pure functions of the caller-supplied session identifier and
//! the token's own identifier, recomputed on every call. There is nothing to
//! cache and nothing to invalidate.

use std::error::Error;

use super::cipher::{self, TokenKey};
use super::token_id::{TokenId, wire_nonce};
use crate::core::{
    Clock, CsrfError, DEFAULT_EXPIRY_MILLIS, DEFAULT_TOKEN_NAME, DiagnosticsSink, KEY_SIZE,
    OsRandom, RandomSource, SEPARATOR, SystemClock,
};
use crate::report::StderrSink;

/// Issues and validates stateless anti-forgery tokens.
///
/// A token has the wire form `token_id|hex(ciphertext)`, where the
/// ciphertext seals `session|timestamp` under AES-128-GCM keyed by the
/// leading bytes of the session identifier, with the token identifier as
/// nonce. Validation re-derives both from the caller's inputs and checks the
/// recovered session identifier in full, plus the timestamp against the
/// *currently configured* expiry window; reconfiguring the window
/// retroactively changes the validity of outstanding tokens.
///
/// Aside from the empty-session contract violation, failures never escape as
/// errors: generation yields `None`, validation yields `false`, and the
/// condition is reported to the configured [`DiagnosticsSink`]. Integrators
/// can fail closed on the return value alone and centralize observability of
/// suspicious activity in the sink.
///
/// Generation and validation take `&self` and are safe to call from multiple
/// threads as long as the injected random source and sink are; the codec
/// requires but does not enforce that property of its dependencies.
pub struct TokenManager {
    /// Cosmetic name for the request parameter carrying tokens.
    token_name: String,
    /// Recency window applied at validation time, in milliseconds.
    allowed_expiry: u64,
    /// CSPRNG behind token identifiers.
    random: Box<dyn RandomSource>,
    /// Time source; injectable for deterministic testing.
    clock: Box<dyn Clock>,
    /// Receives misuse, validation-failure, and internal-failure notices.
    sink: Box<dyn DiagnosticsSink>,
}

impl TokenManager {
    /// Create a manager with all defaults: the process CSPRNG, the system
    /// clock, a one-hour expiry window, and stderr diagnostics.
    pub fn new() -> Self {
        Self::with_sources(Box::new(OsRandom), Box::new(SystemClock))
    }

    /// Create a manager with an injected random source and clock.
    ///
    /// The remaining configuration takes the defaults.
    pub fn with_sources(random: Box<dyn RandomSource>, clock: Box<dyn Clock>) -> Self {
        Self {
            token_name: DEFAULT_TOKEN_NAME.to_owned(),
            allowed_expiry: DEFAULT_EXPIRY_MILLIS,
            random,
            clock,
            sink: Box::new(StderrSink),
        }
    }

    /// The assigned name for the request parameter carrying tokens.
    pub fn token_name(&self) -> &str {
        &self.token_name
    }

    /// Configure a new token parameter name.
    ///
    /// A convenience for integrators; the name never enters the token.
    pub fn set_token_name(&mut self, name: impl Into<String>) {
        self.token_name = name.into();
    }

    /// The expiry window applied to tokens, in milliseconds.
    pub fn allowed_expiry(&self) -> u64 {
        self.allowed_expiry
    }

    /// Configure a new expiry window in milliseconds.
    ///
    /// Takes effect immediately on all outstanding tokens: widening the
    /// window from 10 to 20 minutes makes a token generated 19 minutes ago
    /// valid, even though it was expired a moment before.
    pub fn set_allowed_expiry(&mut self, millis: u64) {
        self.allowed_expiry = millis;
    }

    /// Replace the diagnostics sink.
    pub fn set_diagnostics_sink(&mut self, sink: Box<dyn DiagnosticsSink>) {
        self.sink = sink;
    }

    /// Build a token bound to `session_id`.
    ///
    /// Returns `Ok(None)`, after reporting to the diagnostics sink, when
    /// the session identifier is shorter than [`KEY_SIZE`] UTF-8 bytes or
    /// the cipher fails; callers must treat an absent token as "do not
    /// issue".
    ///
    /// # Errors
    ///
    /// [`CsrfError::EmptySessionId`] when `session_id` is empty. This is a
    /// caller contract violation, not a security event.
    pub fn generate_token(&self, session_id: &str) -> Result<Option<String>, CsrfError> {
        if session_id.is_empty() {
            return Err(CsrfError::EmptySessionId);
        }

        let Ok(key) = TokenKey::derive(session_id) else {
            self.sink.notify_misuse(&format!(
                "token cannot be generated from a session identifier shorter than {KEY_SIZE} bytes"
            ));
            return Ok(None);
        };

        let token_id = TokenId::generate(self.random.as_ref());
        let timestamp = self.clock.now_millis();
        let payload = format!("{session_id}{SEPARATOR}{timestamp}");

        match cipher::seal(&key, &token_id.nonce(), payload.as_bytes()) {
            Ok(sealed) => Ok(Some(format!(
                "{token_id}{SEPARATOR}{}",
                hex::encode(sealed)
            ))),
            Err(cause) => {
                self.sink.notify_internal_failure(
                    &format!(
                        "token generation failed for token id {token_id} and session {session_id}"
                    ),
                    &cause,
                );
                Ok(None)
            }
        }
    }

    /// Check that `token` is valid for `session_id`.
    ///
    /// Valid tokens decrypt under the key and nonce re-derived from the
    /// caller's session identifier, carry that exact session identifier, and
    /// were issued within the configured expiry window. Anything else
    /// (malformed input, tampering, a different session, a stale timestamp)
    /// returns `false` and reports the condition to the diagnostics sink.
    pub fn validate_token(&self, token: &str, session_id: &str) -> bool {
        let Some((token_id, sealed_hex)) = token.split_once(SEPARATOR) else {
            self.sink.notify_misuse("token is not properly formed");
            return false;
        };

        self.validate_parts(token_id, sealed_hex, session_id)
    }

    fn validate_parts(&self, token_id: &str, sealed_hex: &str, session_id: &str) -> bool {
        let now = self.clock.now_millis();

        let key = match TokenKey::derive(session_id) {
            Ok(key) => key,
            Err(cause) => {
                self.notify_defect(token_id, session_id, &cause);
                return false;
            }
        };

        let nonce = match wire_nonce(token_id) {
            Ok(nonce) => nonce,
            Err(cause) => {
                self.notify_defect(token_id, session_id, &cause);
                return false;
            }
        };

        let sealed = match hex::decode(sealed_hex) {
            Ok(sealed) => sealed,
            Err(cause) => {
                self.notify_defect(token_id, session_id, &cause);
                return false;
            }
        };

        let payload = match cipher::open(&key, &nonce, &sealed) {
            Ok(payload) => payload,
            Err(cause) => {
                self.notify_defect(token_id, session_id, &cause);
                return false;
            }
        };

        let payload = match String::from_utf8(payload) {
            Ok(payload) => payload,
            Err(cause) => {
                self.notify_defect(token_id, session_id, &cause);
                return false;
            }
        };

        // A payload that passed GCM authentication but does not have the
        // shape this codec produces is either a codec defect or a forgery.
        let parts: Vec<&str> = payload.split(SEPARATOR).collect();
        let (recovered_session, recovered_timestamp) = match parts.as_slice() {
            [session, timestamp] => (*session, *timestamp),
            _ => {
                self.sink.notify_validation_failure(&format!(
                    "decrypted payload for token id {token_id} is not well formed"
                ));
                return false;
            }
        };

        let timestamp: u64 = match recovered_timestamp.parse() {
            Ok(timestamp) => timestamp,
            Err(cause) => {
                self.notify_defect(token_id, session_id, &cause);
                return false;
            }
        };

        // Full-identifier comparison: the key covers only the leading bytes,
        // so sessions sharing a 16-byte prefix decrypt each other's tokens.
        if recovered_session != session_id {
            self.sink.notify_validation_failure(&format!(
                "token session does not match: expected {session_id} but received {recovered_session}"
            ));
            return false;
        }

        if timestamp.saturating_add(self.allowed_expiry) < now {
            self.sink.notify_validation_failure(&format!(
                "token has expired: issued at {timestamp}, evaluated at {now}"
            ));
            return false;
        }

        true
    }

    fn notify_defect(&self, token_id: &str, session_id: &str, cause: &(dyn Error + 'static)) {
        self.sink.notify_internal_failure(
            &format!("could not validate token {token_id} for session {session_id}"),
            cause,
        );
    }
}

impl Default for TokenManager {
    fn default() -> Self {
        Self::new()
    }
}
