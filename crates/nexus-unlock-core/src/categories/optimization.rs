// crates/nexus-unlock-core/src/categories/optimization.rs
// ============================================================================
// Module: KaizenGPT Optimization Agent Checks
// Description: Agent activity, cycle count, and efficiency validation.
// Purpose: Confirm the optimization agent is active and above thresholds.
// Dependencies: crate::endpoint, crate::probe, crate::result
// ============================================================================

//! ## Overview
//! Gates on the metrics endpoint, then requires the agent to be active, to
//! have completed at least one optimization cycle, and to report an
//! efficiency strictly greater than 90 percent.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::endpoint::EndpointClient;
use crate::interfaces::TranscriptSink;
use crate::probe::bool_field;
use crate::probe::f64_field;
use crate::probe::u64_field;
use crate::result::TestLedger;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Section title emitted before the checks.
pub const SECTION_TITLE: &str = "KaizenGPT Agent";

/// Efficiency must be strictly greater than this percentage.
pub const MIN_EFFICIENCY_PERCENT: f64 = 90.0;

// ============================================================================
// SECTION: Routine
// ============================================================================

/// Validates the KaizenGPT optimization agent.
pub fn validate_kaizen_agent(
    client: &EndpointClient,
    ledger: &mut TestLedger,
    sink: &dyn TranscriptSink,
) -> bool {
    sink.section(SECTION_TITLE);

    let metrics = client.check("/api/kaizen/metrics");
    if !metrics.success {
        ledger.log(sink, "Kaizen Metrics Access", false, "Cannot access Kaizen metrics");
        return false;
    }
    let metrics_data = metrics.data.as_ref();

    let is_active = bool_field(metrics_data, "isActive");
    ledger.log(sink, "Kaizen Agent Active", is_active, "");

    let cycles = u64_field(metrics_data, "optimizationCycles");
    let cycles_running = cycles > 0;
    ledger.log(sink, "Kaizen Optimization Cycles", cycles_running, format!("Cycles completed: {cycles}"));

    let efficiency = f64_field(metrics_data, "currentEfficiency");
    let good_efficiency = efficiency > MIN_EFFICIENCY_PERCENT;
    ledger.log(sink, "Kaizen System Efficiency", good_efficiency, format!("Efficiency: {efficiency}%"));

    is_active && cycles_running && good_efficiency
}
