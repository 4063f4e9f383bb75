// crates/nexus-unlock-core/src/interfaces.rs
// ============================================================================
// Module: Nexus Unlock Host Interfaces
// Description: Output seams between the validation engine and its host.
// Purpose: Keep the core free of console I/O while preserving live transcripts.
// Dependencies: crate::result
// ============================================================================

//! ## Overview
//! The validation engine emits each section header and test result to a
//! [`TranscriptSink`] the moment it is recorded, so hosts can render a live
//! transcript. The core itself never touches stdout or stderr.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::result::TestResult;

// ============================================================================
// SECTION: Transcript Sink
// ============================================================================

/// Receiver for live validation transcript events.
///
/// # Invariants
/// - `result` is called exactly once per recorded [`TestResult`], in
///   execution order.
/// - Implementations must not panic; sink failures are the host's concern.
pub trait TranscriptSink {
    /// Called when a category section begins.
    fn section(&self, title: &str);

    /// Called when a sub-check result is recorded.
    fn result(&self, result: &TestResult);
}

/// Sink that discards all transcript events.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSink;

impl TranscriptSink for SilentSink {
    fn section(&self, _title: &str) {}

    fn result(&self, _result: &TestResult) {}
}
