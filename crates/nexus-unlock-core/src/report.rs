// crates/nexus-unlock-core/src/report.rs
// ============================================================================
// Module: Nexus Unlock Validation Report
// Description: Aggregate report model for one validation run.
// Purpose: Serialize the full run outcome as indented JSON for operators.
// Dependencies: serde, serde_json, crate::result
// ============================================================================

//! ## Overview
//! The report aggregates every recorded test result with summary counters and
//! the six per-category outcomes. It is created once at the end of a run and
//! overwrites the report file on disk. Report serialization and the file
//! write are the only validation-run failures that propagate.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ReportError;
use crate::result::TestResult;

// ============================================================================
// SECTION: Category Outcomes
// ============================================================================

/// Per-category boolean outcomes, keyed by category name in fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryOutcomes {
    /// Module-access sweep over the fixed dashboard path list.
    #[serde(rename = "Dashboard Modules")]
    pub dashboard_modules: bool,
    /// Watson command engine integration checks.
    #[serde(rename = "Watson Command Engine")]
    pub watson_command_engine: bool,
    /// KaizenGPT optimization agent checks.
    #[serde(rename = "KaizenGPT Agent")]
    pub kaizen_agent: bool,
    /// Infinity sovereign control health checks.
    #[serde(rename = "Infinity Sovereign")]
    pub infinity_sovereign: bool,
    /// Market intelligence hub checks.
    #[serde(rename = "Market Intelligence")]
    pub market_intelligence: bool,
    /// UI and frontend readiness checks.
    #[serde(rename = "UI Readiness")]
    pub ui_readiness: bool,
}

impl CategoryOutcomes {
    /// Returns whether every category passed.
    #[must_use]
    pub const fn all_operational(&self) -> bool {
        self.dashboard_modules
            && self.watson_command_engine
            && self.kaizen_agent
            && self.infinity_sovereign
            && self.market_intelligence
            && self.ui_readiness
    }

    /// Returns `(category name, outcome)` pairs in fixed presentation order.
    #[must_use]
    pub const fn entries(&self) -> [(&'static str, bool); 6] {
        [
            ("Dashboard Modules", self.dashboard_modules),
            ("Watson Command Engine", self.watson_command_engine),
            ("KaizenGPT Agent", self.kaizen_agent),
            ("Infinity Sovereign", self.infinity_sovereign),
            ("Market Intelligence", self.market_intelligence),
            ("UI Readiness", self.ui_readiness),
        ]
    }
}

// ============================================================================
// SECTION: Validation Report
// ============================================================================

/// Aggregate outcome of one validation run.
///
/// # Invariants
/// - `passed_tests` equals the number of `test_details` entries with
///   `passed = true`; `success_rate` is `passed/total * 100` (`0.0` when
///   `total_tests` is zero).
/// - `test_details` preserves execution order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Logical AND across all category outcomes.
    pub overall_success: bool,
    /// Pass percentage across all recorded sub-checks.
    pub success_rate: f64,
    /// Number of sub-checks that passed.
    pub passed_tests: usize,
    /// Number of sub-checks recorded.
    pub total_tests: usize,
    /// Wall-clock run duration in seconds.
    pub duration: f64,
    /// Per-category outcomes.
    pub results: CategoryOutcomes,
    /// Every recorded sub-check, in execution order.
    pub test_details: Vec<TestResult>,
    /// The fingerprint literal this build validates against.
    pub fingerprint_validated: String,
}

impl ValidationReport {
    /// Serializes the report as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Serialize`] when serialization fails.
    pub fn to_pretty_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the report as indented JSON, overwriting any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] when serialization or the file write fails.
    pub fn write_to(&self, path: &Path) -> Result<(), ReportError> {
        let rendered = self.to_pretty_json()?;
        fs::write(path, rendered).map_err(|source| ReportError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
