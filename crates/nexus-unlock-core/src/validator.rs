// crates/nexus-unlock-core/src/validator.rs
// ============================================================================
// Module: Nexus Unlock Orchestrator
// Description: Fixed-order execution of the six category routines.
// Purpose: Run every category to completion and assemble the final report.
// Dependencies: crate::categories, crate::endpoint, crate::report
// ============================================================================

//! ## Overview
//! The orchestrator runs the six category routines in fixed order. A panic
//! inside one routine records a single failing result for that category and
//! does not abort the remaining categories. Overall success is the logical
//! AND across category outcomes; wall-clock duration and summary counters
//! are captured into the returned [`ValidationReport`].
//!
//! Execution is strictly sequential: each endpoint call blocks until
//! response or timeout before the next begins.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::panic;
use std::panic::AssertUnwindSafe;
use std::time::Instant;

use crate::categories;
use crate::categories::CategoryRoutine;
use crate::categories::command_engine::FINGERPRINT_LOCK;
use crate::config::ValidatorConfig;
use crate::endpoint::EndpointClient;
use crate::endpoint::EndpointClientConfig;
use crate::error::EndpointClientError;
use crate::interfaces::TranscriptSink;
use crate::report::CategoryOutcomes;
use crate::report::ValidationReport;
use crate::result::TestLedger;

// ============================================================================
// SECTION: Validator
// ============================================================================

/// Sequential unlock validator for one dashboard instance.
///
/// # Invariants
/// - The ledger is append-only and shared across categories within a run.
/// - Category order is fixed; it matters for transcript fidelity only.
pub struct UnlockValidator {
    /// Endpoint client shared by all category routines.
    client: EndpointClient,
    /// Ordered ledger of recorded results.
    ledger: TestLedger,
}

impl UnlockValidator {
    /// Creates a validator from the resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EndpointClientError`] when the HTTP client cannot be built.
    pub fn new(config: &ValidatorConfig) -> Result<Self, EndpointClientError> {
        let client = EndpointClient::new(EndpointClientConfig {
            base_url: config.base_url.clone(),
            timeout_ms: config.timeout_ms,
            ..EndpointClientConfig::default()
        })?;
        Ok(Self {
            client,
            ledger: TestLedger::new(),
        })
    }

    /// Runs all category routines in fixed order and assembles the report.
    pub fn run_comprehensive_validation(&mut self, sink: &dyn TranscriptSink) -> ValidationReport {
        let started = Instant::now();

        let results = CategoryOutcomes {
            dashboard_modules: self.run_category(
                sink,
                "Dashboard Modules",
                categories::modules::validate_dashboard_modules,
            ),
            watson_command_engine: self.run_category(
                sink,
                "Watson Command Engine",
                categories::command_engine::validate_watson_command_engine,
            ),
            kaizen_agent: self.run_category(
                sink,
                "KaizenGPT Agent",
                categories::optimization::validate_kaizen_agent,
            ),
            infinity_sovereign: self.run_category(
                sink,
                "Infinity Sovereign",
                categories::sovereign::validate_infinity_sovereign,
            ),
            market_intelligence: self.run_category(
                sink,
                "Market Intelligence",
                categories::market::validate_market_intelligence,
            ),
            ui_readiness: self.run_category(
                sink,
                "UI Readiness",
                categories::ui::validate_ui_readiness,
            ),
        };

        ValidationReport {
            overall_success: results.all_operational(),
            success_rate: self.ledger.success_rate(),
            passed_tests: self.ledger.passed_count(),
            total_tests: self.ledger.total(),
            duration: started.elapsed().as_secs_f64(),
            results,
            test_details: self.ledger.results().to_vec(),
            fingerprint_validated: FINGERPRINT_LOCK.to_string(),
        }
    }

    /// Runs one category routine, converting a panic into a failing result.
    fn run_category(
        &mut self,
        sink: &dyn TranscriptSink,
        category_name: &str,
        routine: CategoryRoutine,
    ) -> bool {
        let outcome =
            panic::catch_unwind(AssertUnwindSafe(|| routine(&self.client, &mut self.ledger, sink)));
        match outcome {
            Ok(passed) => passed,
            Err(payload) => {
                let detail = panic_text(payload.as_ref());
                self.ledger.log(sink, &format!("{category_name} Exception"), false, detail);
                false
            }
        }
    }
}

// ============================================================================
// SECTION: Panic Payloads
// ============================================================================

/// Extracts a displayable message from a panic payload.
fn panic_text(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "unknown category failure".to_string()
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
