//! Provided diagnostics sinks.
//!
//! [`StderrSink`] is the zero-configuration default: every notice becomes one
//! line on standard error. [`TracingSink`] (feature `tracing`) routes notices
//! into `tracing` events for integrators running a structured-logging stack.
//! Alternate destinations such as metrics or alerting implement
//! [`DiagnosticsSink`] themselves.

use std::error::Error;

use crate::core::DiagnosticsSink;

/// Writes every notice as one line on standard error.
#[derive(Clone, Copy, Debug, Default)]
pub struct StderrSink;

impl DiagnosticsSink for StderrSink {
    fn notify_misuse(&self, message: &str) {
        eprintln!("csrf misuse: {message}");
    }

    fn notify_validation_failure(&self, message: &str) {
        eprintln!("csrf validation failure: {message}");
    }

    fn notify_internal_failure(&self, message: &str, cause: &(dyn Error + 'static)) {
        eprintln!("csrf internal failure: {message}: {cause}");
    }
}

/// Routes notices into `tracing` events.
///
/// Misuse and validation failures emit `warn` events; internal failures emit
/// `error` events carrying the cause.
#[cfg(feature = "tracing")]
#[cfg_attr(docsrs, doc(cfg(feature = "tracing")))]
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

#[cfg(feature = "tracing")]
impl DiagnosticsSink for TracingSink {
    fn notify_misuse(&self, message: &str) {
        tracing::warn!(target: "stateless_csrf", kind = "misuse", "{message}");
    }

    fn notify_validation_failure(&self, message: &str) {
        tracing::warn!(target: "stateless_csrf", kind = "validation_failure", "{message}");
    }

    fn notify_internal_failure(&self, message: &str, cause: &(dyn Error + 'static)) {
        tracing::error!(target: "stateless_csrf", kind = "internal_failure", cause = %cause, "{message}");
    }
}
