//! Capability traits for injected dependencies.
//!
//! The codec reads time and randomness and reports diagnostics through these
//! seams, so integrators can substitute a deterministic clock in tests or
//! route notices into their own observability stack. All three traits take
//! `&self`: generation and validation run concurrently, and implementations
//! are responsible for their own synchronization.

use std::error::Error;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::{RngCore, rngs::OsRng};

/// A time source reporting milliseconds since the Unix epoch.
///
/// Injectable primarily for deterministic testing.
pub trait Clock: Send + Sync {
    /// Current time in milliseconds since the Unix epoch.
    fn now_millis(&self) -> u64;
}

/// The system UTC clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        // A clock set before the epoch reads as zero rather than failing.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_millis() as u64)
    }
}

/// A cryptographically secure random byte generator.
///
/// Token identifier uniqueness rests entirely on the entropy this source
/// provides; implementations must be backed by a CSPRNG.
pub trait RandomSource: Send + Sync {
    /// Fill `dest` with random bytes.
    fn fill_bytes(&self, dest: &mut [u8]);
}

/// The process CSPRNG ([`OsRng`]).
#[derive(Clone, Copy, Debug, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill_bytes(&self, dest: &mut [u8]) {
        OsRng.fill_bytes(dest);
    }
}

/// Receiver for the codec's diagnostics notices.
///
/// Three distinct event classes are reported:
///
/// - *misuse*: a malformed token or an unusable session identifier
/// - *validation failure*: a structurally sound token failed validation,
///   the signal of a forgery attempt or a stale token
/// - *internal failure*: a cryptographic primitive or decoding step failed,
///   with the triggering cause attached
///
/// Notices are fire-and-forget: nothing the sink does changes the codec's
/// return values.
pub trait DiagnosticsSink: Send + Sync {
    /// A malformed token or an unusable session identifier was supplied.
    fn notify_misuse(&self, message: &str);

    /// A structurally sound token failed validation.
    fn notify_validation_failure(&self, message: &str);

    /// A cryptographic primitive or decoding step failed unexpectedly.
    fn notify_internal_failure(&self, message: &str, cause: &(dyn Error + 'static));
}
