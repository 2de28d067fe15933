//! Telemetry side channel. The engine reports two kinds of events: novel
//! signatures that the fallback classifier resolved (candidates for
//! promotion into the static signature table) and recognition failures.
//!
//! The sink is injected by the caller so the engine stays decoupled from
//! any particular monitoring backend.

use log::{info, warn};

use crate::models::NewSignature;
use crate::utils::RecognitionError;

pub trait TelemetrySink: Sync {
    /// A signature not present in the static table was resolved by the
    /// fallback classifier. Deduplicated per recognition by the caller.
    fn new_signature(&self, observation: &NewSignature);

    /// A recognition attempt ended in an aggregate failure.
    fn recognition_failed(&self, error: &RecognitionError);
}

/// Routes telemetry into the process log.
pub struct LogSink;

impl TelemetrySink for LogSink {
    fn new_signature(&self, observation: &NewSignature) {
        info!(
            "new signature observed for digit {}: {}",
            observation.digit, observation.signature
        );
    }

    fn recognition_failed(&self, error: &RecognitionError) {
        warn!("card recognition failed: {}", error);
    }
}

/// Discards all events. Useful for tests and batch reprocessing.
pub struct NoopSink;

impl TelemetrySink for NoopSink {
    fn new_signature(&self, _observation: &NewSignature) {}
    fn recognition_failed(&self, _error: &RecognitionError) {}
}
