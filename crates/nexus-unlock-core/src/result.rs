// crates/nexus-unlock-core/src/result.rs
// ============================================================================
// Module: Nexus Unlock Result Ledger
// Description: Ordered test result records and the shared check-and-log helper.
// Purpose: Preserve execution order and summary counters for report fidelity.
// Dependencies: serde, crate::interfaces
// ============================================================================

//! ## Overview
//! Every sub-check in the validation sweep records exactly one [`TestResult`]
//! through [`TestLedger::log`], which timestamps the record, appends it in
//! execution order, and emits it to the host transcript sink. Results are
//! immutable once recorded; insertion order equals execution order and is
//! preserved through report serialization.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Deserialize;
use serde::Serialize;

use crate::interfaces::TranscriptSink;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Transcript marker recorded for passing checks.
pub const PASS_MARKER: &str = "✓ PASS";

/// Transcript marker recorded for failing checks.
pub const FAIL_MARKER: &str = "✗ FAIL";

// ============================================================================
// SECTION: Test Results
// ============================================================================

/// One recorded sub-check outcome.
///
/// # Invariants
/// - Immutable once created; ledger order equals execution order.
/// - `status_label` always matches `passed` ([`PASS_MARKER`] / [`FAIL_MARKER`]).
/// - `timestamp` is float seconds since the Unix epoch (`0.0` if the system
///   clock is before the epoch).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    /// Name of the sub-check.
    #[serde(rename = "test")]
    pub test_name: String,
    /// Pass/fail marker string recorded for the transcript.
    #[serde(rename = "status")]
    pub status_label: String,
    /// Whether the sub-check passed.
    pub passed: bool,
    /// Optional detail line (empty when the check has no detail).
    pub details: String,
    /// Seconds since the Unix epoch at which the result was recorded.
    pub timestamp: f64,
}

// ============================================================================
// SECTION: Ledger
// ============================================================================

/// Ordered ledger of recorded test results.
///
/// # Invariants
/// - Append-only; results are never reordered or mutated.
#[derive(Debug, Default)]
pub struct TestLedger {
    /// Recorded results in execution order.
    results: Vec<TestResult>,
}

impl TestLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            results: Vec::new(),
        }
    }

    /// Records one sub-check outcome, emits it to the sink, and returns
    /// `passed` so callers can fold results into category aggregates.
    pub fn log(
        &mut self,
        sink: &dyn TranscriptSink,
        test_name: &str,
        passed: bool,
        details: impl Into<String>,
    ) -> bool {
        let status_label = if passed { PASS_MARKER } else { FAIL_MARKER };
        let result = TestResult {
            test_name: test_name.to_string(),
            status_label: status_label.to_string(),
            passed,
            details: details.into(),
            timestamp: unix_timestamp(),
        };
        sink.result(&result);
        self.results.push(result);
        passed
    }

    /// Returns the recorded results in execution order.
    #[must_use]
    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    /// Returns the number of recorded results.
    #[must_use]
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Returns the number of recorded results that passed.
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|result| result.passed).count()
    }

    /// Returns the pass percentage in `[0.0, 100.0]` (`0.0` when empty).
    #[must_use]
    #[allow(clippy::cast_precision_loss, reason = "Ledger sizes are far below f64 precision.")]
    pub fn success_rate(&self) -> f64 {
        if self.results.is_empty() {
            return 0.0;
        }
        (self.passed_count() as f64 / self.total() as f64) * 100.0
    }
}

// ============================================================================
// SECTION: Time
// ============================================================================

/// Returns float seconds since the Unix epoch (`0.0` on pre-epoch clocks).
fn unix_timestamp() -> f64 {
    SystemTime::now().duration_since(UNIX_EPOCH).map_or(0.0, |elapsed| elapsed.as_secs_f64())
}
