// crates/nexus-unlock-core/src/categories/command_engine.rs
// ============================================================================
// Module: Watson Command Engine Checks
// Description: State, fingerprint, visual-state, and history validation.
// Purpose: Confirm the command engine reports memory awareness and identity.
// Dependencies: crate::endpoint, crate::probe, crate::result
// ============================================================================

//! ## Overview
//! The command engine category gates on the state endpoint: if it is
//! unreachable the category fails immediately. Otherwise it checks memory
//! awareness, the fingerprint lock (either accepted literal is valid), and
//! access to the visual-state and history endpoints.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::endpoint::EndpointClient;
use crate::interfaces::TranscriptSink;
use crate::probe::bool_field;
use crate::probe::str_field;
use crate::result::TestLedger;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Section title emitted before the checks.
pub const SECTION_TITLE: &str = "Watson Command Engine";

/// The fingerprint literal this build validates against.
pub const FINGERPRINT_LOCK: &str = "WATSON_COMMAND_READY";

/// Accepted fingerprint literals; both are treated as equally valid.
pub const ACCEPTED_FINGERPRINTS: [&str; 2] =
    [FINGERPRINT_LOCK, "WATSON_FINAL_INFINITY_PATCH_2025_06_05"];

// ============================================================================
// SECTION: Routine
// ============================================================================

/// Validates the Watson command engine integration.
pub fn validate_watson_command_engine(
    client: &EndpointClient,
    ledger: &mut TestLedger,
    sink: &dyn TranscriptSink,
) -> bool {
    sink.section(SECTION_TITLE);

    let state = client.check("/api/watson/state");
    if !state.success {
        ledger.log(sink, "Watson State Access", false, "Cannot access Watson state");
        return false;
    }
    let state_data = state.data.as_ref();

    let memory_aware = bool_field(state_data, "isMemoryAware");
    ledger.log(sink, "Watson Memory Awareness", memory_aware, format!("Memory aware: {memory_aware}"));

    let fingerprint = str_field(state_data, "fingerprintLock");
    let fingerprint_match =
        ACCEPTED_FINGERPRINTS.iter().any(|accepted| fingerprint.contains(accepted));
    ledger.log(
        sink,
        "Watson Fingerprint Lock",
        fingerprint_match,
        format!("System fingerprint: {fingerprint}"),
    );

    let visual_accessible = client.check("/api/watson/visual-state").success;
    ledger.log(sink, "Watson Visual State", visual_accessible, "");

    let history_accessible = client.check("/api/watson/history").success;
    ledger.log(sink, "Watson Command History", history_accessible, "");

    memory_aware && fingerprint_match && visual_accessible && history_accessible
}
