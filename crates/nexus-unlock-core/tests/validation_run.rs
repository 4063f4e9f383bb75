// crates/nexus-unlock-core/tests/validation_run.rs
// ============================================================================
// Module: Validation Run Integration Tests
// Description: Full validation sweeps against a mock dashboard server.
// Purpose: Pin category thresholds, degradation behavior, and report math.
// Dependencies: nexus-unlock-core, serde_json, tempfile, tiny_http
// ============================================================================

//! ## Overview
//! Runs the complete validator against a fixture-driven loopback server and
//! flips one condition at a time: efficiency at the strict threshold,
//! fingerprint mismatches, module-sweep ratios, unreachable servers, and
//! malformed bodies. Also pins report counter arithmetic and determinism
//! across identical runs.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    clippy::float_cmp,
    reason = "Test-only output and panic-based assertions are permitted."
)]

mod common;

use std::net::TcpListener;

use nexus_unlock_core::SilentSink;
use nexus_unlock_core::UnlockValidator;
use nexus_unlock_core::ValidationReport;
use nexus_unlock_core::ValidatorConfig;
use serde_json::Value;
use serde_json::json;

use crate::common::Fixture;
use crate::common::MockDashboard;
use crate::common::healthy_fixture;

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Runs a fresh validator against the given base URL.
fn run_against(base_url: &str) -> ValidationReport {
    let config = ValidatorConfig {
        base_url: base_url.to_string(),
        ..ValidatorConfig::default()
    };
    let mut validator = UnlockValidator::new(&config).unwrap();
    validator.run_comprehensive_validation(&SilentSink)
}

/// Returns the recorded result with the given test name.
fn find_result<'a>(
    report: &'a ValidationReport,
    test_name: &str,
) -> &'a nexus_unlock_core::TestResult {
    report
        .test_details
        .iter()
        .find(|result| result.test_name == test_name)
        .unwrap_or_else(|| panic!("missing result: {test_name}"))
}

// ============================================================================
// SECTION: Healthy Sweep
// ============================================================================

#[test]
fn healthy_dashboard_unlocks_every_category() {
    let server = MockDashboard::start(healthy_fixture());
    let report = run_against(server.base_url());

    assert!(report.overall_success);
    assert!(report.results.all_operational());
    assert_eq!(report.passed_tests, report.total_tests);
    assert_eq!(report.success_rate, 100.0);
    assert_eq!(report.fingerprint_validated, "WATSON_COMMAND_READY");
    assert!(report.duration >= 0.0);
}

#[test]
fn report_counters_match_recorded_details() {
    let server = MockDashboard::start(healthy_fixture());
    let report = run_against(server.base_url());

    let recorded_passes =
        report.test_details.iter().filter(|result| result.passed).count();
    assert_eq!(report.passed_tests, recorded_passes);
    assert_eq!(report.total_tests, report.test_details.len());

    #[allow(clippy::cast_precision_loss, reason = "Test-scale counts fit f64 exactly.")]
    let expected_rate = report.passed_tests as f64 / report.total_tests as f64 * 100.0;
    assert_eq!(report.success_rate, expected_rate);
}

#[test]
fn identical_runs_produce_identical_verdicts() {
    let server = MockDashboard::start(healthy_fixture());
    let first = run_against(server.base_url());
    let second = run_against(server.base_url());

    assert_eq!(first.overall_success, second.overall_success);
    assert_eq!(first.passed_tests, second.passed_tests);
    assert_eq!(first.total_tests, second.total_tests);
    assert_eq!(first.results, second.results);
}

// ============================================================================
// SECTION: Threshold Edges
// ============================================================================

#[test]
fn efficiency_at_ninety_is_not_enough() {
    let mut fixture = healthy_fixture();
    fixture.insert(
        "/api/kaizen/metrics".to_string(),
        (
            200,
            json!({"isActive": true, "optimizationCycles": 5, "currentEfficiency": 90})
                .to_string(),
        ),
    );
    let server = MockDashboard::start(fixture);
    let report = run_against(server.base_url());

    assert!(!report.results.kaizen_agent);
    assert!(!report.overall_success);
    assert!(find_result(&report, "Kaizen Agent Active").passed);
    assert!(find_result(&report, "Kaizen Optimization Cycles").passed);
    assert!(!find_result(&report, "Kaizen System Efficiency").passed);
}

#[test]
fn unknown_fingerprint_fails_command_engine() {
    let mut fixture = healthy_fixture();
    fixture.insert(
        "/api/watson/state".to_string(),
        (
            200,
            json!({"isMemoryAware": true, "fingerprintLock": "WATSON_STALE_BUILD"}).to_string(),
        ),
    );
    let server = MockDashboard::start(fixture);
    let report = run_against(server.base_url());

    assert!(!report.results.watson_command_engine);
    let fingerprint = find_result(&report, "Watson Fingerprint Lock");
    assert!(!fingerprint.passed);
    assert!(fingerprint.details.contains("WATSON_STALE_BUILD"));
}

#[test]
fn legacy_fingerprint_is_equally_valid() {
    let mut fixture = healthy_fixture();
    fixture.insert(
        "/api/watson/state".to_string(),
        (
            200,
            json!({
                "isMemoryAware": true,
                "fingerprintLock": "WATSON_FINAL_INFINITY_PATCH_2025_06_05",
            })
            .to_string(),
        ),
    );
    let server = MockDashboard::start(fixture);
    let report = run_against(server.base_url());

    assert!(report.results.watson_command_engine);
    assert!(find_result(&report, "Watson Fingerprint Lock").passed);
}

#[test]
fn module_sweep_fails_below_eighty_percent() {
    let mut fixture = healthy_fixture();
    for path in
        ["/api/dashboard/stats", "/api/dashboard/activity", "/api/dashboard/learning-progress"]
    {
        fixture.insert(path.to_string(), (500, String::new()));
    }
    let server = MockDashboard::start(fixture);
    let report = run_against(server.base_url());

    assert!(!report.results.dashboard_modules);
    let sweep = find_result(&report, "Dashboard Module Access");
    assert!(!sweep.passed);
    assert_eq!(sweep.details, "11/14 modules accessible");
    let failed = find_result(&report, "Module Access: /api/dashboard/stats");
    assert!(!failed.passed);
    assert_eq!(failed.details, "Status: 500");
}

#[test]
fn module_sweep_tolerates_two_failures() {
    let mut fixture = healthy_fixture();
    for path in ["/api/dashboard/stats", "/api/dashboard/activity"] {
        fixture.insert(path.to_string(), (500, String::new()));
    }
    let server = MockDashboard::start(fixture);
    let report = run_against(server.base_url());

    assert!(report.results.dashboard_modules);
    let sweep = find_result(&report, "Dashboard Module Access");
    assert!(sweep.passed);
    assert_eq!(sweep.details, "12/14 modules accessible");
}

// ============================================================================
// SECTION: Degradation
// ============================================================================

#[test]
fn unreachable_server_degrades_to_failed_results() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let report = run_against(&base_url);

    assert!(!report.overall_success);
    // Only the websocket placeholder can pass without a reachable server.
    assert_eq!(report.passed_tests, 1);
    assert!(find_result(&report, "WebSocket Configuration").passed);
    let module = find_result(&report, "Module Access: /api/dashboard/stats");
    assert_eq!(module.details, "Status: Error");
    let state = find_result(&report, "Watson State Access");
    assert_eq!(state.details, "Cannot access Watson state");
}

#[test]
fn malformed_state_body_fails_the_gate_not_the_run() {
    let mut fixture = healthy_fixture();
    fixture.insert("/api/watson/state".to_string(), (200, "<html>state</html>".to_string()));
    let server = MockDashboard::start(fixture);
    let report = run_against(server.base_url());

    assert!(!report.results.watson_command_engine);
    assert!(!find_result(&report, "Watson State Access").passed);
    // The sweep loses only that path; the remaining categories still run.
    assert!(report.results.dashboard_modules);
    assert!(report.results.kaizen_agent);
    assert!(report.results.ui_readiness);
}

#[test]
fn empty_health_body_falls_back_to_access_checks() {
    let mut fixture = healthy_fixture();
    fixture.insert("/api/infinity/health".to_string(), (200, json!({}).to_string()));
    let server = MockDashboard::start(fixture);
    let report = run_against(server.base_url());

    assert!(report.results.infinity_sovereign);
    assert!(find_result(&report, "Infinity Health Access").passed);
    assert!(
        !report.test_details.iter().any(|result| result.test_name == "System Health Status")
    );
}

#[test]
fn empty_market_summary_falls_back_to_access_checks() {
    let mut fixture = healthy_fixture();
    fixture.insert("/api/market/summary".to_string(), (200, json!({}).to_string()));
    let server = MockDashboard::start(fixture);
    let report = run_against(server.base_url());

    assert!(report.results.market_intelligence);
    assert!(
        !report.test_details.iter().any(|result| result.test_name == "Market Data Collection")
    );
}

#[test]
fn degraded_security_status_blocks_sovereign() {
    let mut fixture = healthy_fixture();
    fixture.insert(
        "/api/infinity/health".to_string(),
        (200, json!({"overallHealth": 97, "securityStatus": "degraded"}).to_string()),
    );
    let server = MockDashboard::start(fixture);
    let report = run_against(server.base_url());

    assert!(!report.results.infinity_sovereign);
    assert!(find_result(&report, "System Health Status").passed);
    let security = find_result(&report, "Security Status");
    assert!(!security.passed);
    assert_eq!(security.details, "Security: degraded");
}

#[test]
fn empty_security_status_is_reported_verbatim() {
    let mut fixture = healthy_fixture();
    fixture.insert(
        "/api/infinity/health".to_string(),
        (200, json!({"overallHealth": 97, "securityStatus": ""}).to_string()),
    );
    let server = MockDashboard::start(fixture);
    let report = run_against(server.base_url());

    let security = find_result(&report, "Security Status");
    assert!(!security.passed);
    assert_eq!(security.details, "Security: ");
}

#[test]
fn absent_security_status_defaults_to_unknown() {
    let mut fixture = healthy_fixture();
    fixture.insert(
        "/api/infinity/health".to_string(),
        (200, json!({"overallHealth": 97}).to_string()),
    );
    let server = MockDashboard::start(fixture);
    let report = run_against(server.base_url());

    assert!(!report.results.infinity_sovereign);
    let security = find_result(&report, "Security Status");
    assert!(!security.passed);
    assert_eq!(security.details, "Security: unknown");
}

// ============================================================================
// SECTION: Report File
// ============================================================================

#[test]
fn report_file_roundtrips_as_indented_json() {
    let server = MockDashboard::start(healthy_fixture());
    let report = run_against(server.base_url());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("unlock_validation_report.json");
    report.write_to(&path).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains('\n'));
    let value: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["overall_success"], json!(true));
    assert_eq!(value["results"]["Dashboard Modules"], json!(true));
    assert_eq!(
        value["test_details"].as_array().unwrap().len(),
        report.test_details.len()
    );
}

#[test]
fn report_file_is_overwritten_each_run() {
    let server = MockDashboard::start(healthy_fixture());
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("unlock_validation_report.json");

    std::fs::write(&path, "{\"stale\": true}").unwrap();
    let report = run_against(server.base_url());
    report.write_to(&path).unwrap();

    let value: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert!(value.get("stale").is_none());
    assert_eq!(value["overall_success"], json!(true));
}

// ============================================================================
// SECTION: Fixture Sanity
// ============================================================================

#[test]
fn healthy_fixture_covers_every_swept_path() {
    let fixture: Fixture = healthy_fixture();
    for path in nexus_unlock_core::categories::modules::MODULE_PATHS {
        assert!(fixture.contains_key(path), "fixture missing {path}");
    }
    assert!(fixture.contains_key("/"));
    assert!(fixture.contains_key("/api/watson/history"));
}
