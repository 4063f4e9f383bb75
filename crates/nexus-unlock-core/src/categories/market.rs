// crates/nexus-unlock-core/src/categories/market.rs
// ============================================================================
// Module: Market Intelligence Hub Checks
// Description: Summary and alert endpoint validation with data thresholds.
// Purpose: Confirm the hub is collecting data from at least one source.
// Dependencies: crate::endpoint, crate::probe, crate::result
// ============================================================================

//! ## Overview
//! Records access results for the summary and alerts endpoints. When the
//! summary endpoint returns a body with content, the category verdict
//! requires at least one data point and one active source; otherwise it
//! falls back to the two access booleans.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::endpoint::EndpointClient;
use crate::interfaces::TranscriptSink;
use crate::probe::array_len;
use crate::probe::f64_field;
use crate::probe::has_content;
use crate::result::TestLedger;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Section title emitted before the checks.
pub const SECTION_TITLE: &str = "Market Intelligence Hub";

// ============================================================================
// SECTION: Routine
// ============================================================================

/// Validates the market intelligence hub.
pub fn validate_market_intelligence(
    client: &EndpointClient,
    ledger: &mut TestLedger,
    sink: &dyn TranscriptSink,
) -> bool {
    sink.section(SECTION_TITLE);

    let summary = client.check("/api/market/summary");
    let alerts = client.check("/api/market/alerts");

    let summary_accessible = summary.success;
    let alerts_accessible = alerts.success;

    ledger.log(sink, "Market Summary Access", summary_accessible, "");
    ledger.log(sink, "Market Alerts Access", alerts_accessible, "");

    if summary_accessible && summary.data.as_ref().is_some_and(has_content) {
        let summary_data = summary.data.as_ref();

        let data_points = f64_field(summary_data, "totalDataPoints");
        let active_sources = array_len(summary_data, "activeSources");

        let has_data = data_points > 0.0;
        let has_sources = active_sources > 0;

        ledger.log(sink, "Market Data Collection", has_data, format!("Data points: {data_points}"));
        ledger.log(sink, "Market Data Sources", has_sources, format!("Active sources: {active_sources}"));

        return has_data && has_sources;
    }

    summary_accessible && alerts_accessible
}
