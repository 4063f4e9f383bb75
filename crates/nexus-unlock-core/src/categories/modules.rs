// crates/nexus-unlock-core/src/categories/modules.rs
// ============================================================================
// Module: Dashboard Module Access Sweep
// Description: Bulk HTTP 200 check across the fixed dashboard path list.
// Purpose: Verify unrestricted module access at the 80 percent threshold.
// Dependencies: crate::endpoint, crate::result
// ============================================================================

//! ## Overview
//! The sweep requires only an HTTP 200 from each of the fixed module paths.
//! Each path records one result; a final aggregate result passes when at
//! least 80 percent of the paths are accessible.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::endpoint::EndpointClient;
use crate::interfaces::TranscriptSink;
use crate::result::TestLedger;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Section title emitted before the sweep.
pub const SECTION_TITLE: &str = "Dashboard Module Access";

/// Fixed list of dashboard module paths required to respond with HTTP 200.
pub const MODULE_PATHS: [&str; 14] = [
    "/api/dashboard/stats",
    "/api/dashboard/activity",
    "/api/dashboard/learning-progress",
    "/api/quantum/knowledge-graph",
    "/api/market/summary",
    "/api/market/alerts",
    "/api/research/metrics",
    "/api/research/targets",
    "/api/automation/metrics",
    "/api/kaizen/metrics",
    "/api/infinity/health",
    "/api/infinity/modules",
    "/api/watson/state",
    "/api/watson/visual-state",
];

/// Minimum fraction of module paths that must be accessible.
pub const MIN_ACCESS_RATIO: f64 = 0.8;

// ============================================================================
// SECTION: Routine
// ============================================================================

/// Sweeps the fixed module path list and applies the 80 percent threshold.
#[allow(clippy::cast_precision_loss, reason = "Path counts are far below f64 precision.")]
pub fn validate_dashboard_modules(
    client: &EndpointClient,
    ledger: &mut TestLedger,
    sink: &dyn TranscriptSink,
) -> bool {
    sink.section(SECTION_TITLE);

    let mut passed_count = 0_usize;
    for path in MODULE_PATHS {
        let check = client.check(path);
        if check.success {
            passed_count += 1;
            ledger.log(sink, &format!("Module Access: {path}"), true, "");
        } else {
            let detail = check
                .status_code
                .map_or_else(|| "Status: Error".to_string(), |code| format!("Status: {code}"));
            ledger.log(sink, &format!("Module Access: {path}"), false, detail);
        }
    }

    let access_ratio = passed_count as f64 / MODULE_PATHS.len() as f64;
    ledger.log(
        sink,
        "Dashboard Module Access",
        access_ratio >= MIN_ACCESS_RATIO,
        format!("{passed_count}/{} modules accessible", MODULE_PATHS.len()),
    );

    access_ratio >= MIN_ACCESS_RATIO
}
