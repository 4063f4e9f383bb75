// crates/nexus-unlock-core/src/categories/sovereign.rs
// ============================================================================
// Module: Infinity Sovereign Control Checks
// Description: Health and module endpoint validation with status thresholds.
// Purpose: Confirm system health above 90 percent with acceptable security.
// Dependencies: crate::endpoint, crate::probe, crate::result
// ============================================================================

//! ## Overview
//! Records access results for the health and modules endpoints. When the
//! health endpoint returns a body with content, the category verdict comes
//! from the health and security thresholds; otherwise it falls back to the
//! two access booleans.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::endpoint::EndpointClient;
use crate::interfaces::TranscriptSink;
use crate::probe::f64_field;
use crate::probe::has_content;
use crate::probe::str_field_or;
use crate::result::TestLedger;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Section title emitted before the checks.
pub const SECTION_TITLE: &str = "Infinity Sovereign Control";

/// Overall health must be strictly greater than this percentage.
pub const MIN_HEALTH_PERCENT: f64 = 90.0;

/// Security status values considered acceptable.
pub const ACCEPTED_SECURITY_STATUSES: [&str; 2] = ["excellent", "good"];

// ============================================================================
// SECTION: Routine
// ============================================================================

/// Validates the Infinity sovereign control plane.
pub fn validate_infinity_sovereign(
    client: &EndpointClient,
    ledger: &mut TestLedger,
    sink: &dyn TranscriptSink,
) -> bool {
    sink.section(SECTION_TITLE);

    let health = client.check("/api/infinity/health");
    let modules = client.check("/api/infinity/modules");

    let health_accessible = health.success;
    let modules_accessible = modules.success;

    ledger.log(sink, "Infinity Health Access", health_accessible, "");
    ledger.log(sink, "Infinity Modules Access", modules_accessible, "");

    if health_accessible && health.data.as_ref().is_some_and(has_content) {
        let health_data = health.data.as_ref();

        let overall_health = f64_field(health_data, "overallHealth");
        let good_health = overall_health > MIN_HEALTH_PERCENT;
        ledger.log(sink, "System Health Status", good_health, format!("Health: {overall_health}%"));

        let reported_status = str_field_or(health_data, "securityStatus", "unknown");
        let good_security =
            ACCEPTED_SECURITY_STATUSES.contains(&reported_status.as_str());
        ledger.log(sink, "Security Status", good_security, format!("Security: {reported_status}"));

        return good_health && good_security;
    }

    health_accessible && modules_accessible
}
