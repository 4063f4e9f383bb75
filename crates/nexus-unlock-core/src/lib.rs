// crates/nexus-unlock-core/src/lib.rs
// ============================================================================
// Module: Nexus Unlock Core
// Description: Endpoint checklist validation engine for the NEXUS dashboard.
// Purpose: Run the fixed unlock validation sweep and assemble the report.
// Dependencies: reqwest, serde, serde_json, thiserror, toml
// ============================================================================

//! ## Overview
//! This crate implements the NEXUS unlock validation engine: a fixed sequence
//! of HTTP GET checks against a running dashboard instance, evaluated against
//! hardcoded thresholds and accumulated into an ordered pass/fail ledger.
//! The crate performs no console I/O; hosts supply a [`TranscriptSink`] to
//! observe results as they are recorded.
//!
//! All endpoint and JSON failures degrade to failed test results. Only report
//! serialization and file writes are allowed to fail with an error.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod categories;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod interfaces;
pub mod probe;
pub mod report;
pub mod result;
pub mod validator;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use config::ValidatorConfig;
pub use endpoint::EndpointCheck;
pub use endpoint::EndpointClient;
pub use endpoint::EndpointClientConfig;
pub use error::ConfigError;
pub use error::EndpointClientError;
pub use error::ReportError;
pub use interfaces::SilentSink;
pub use interfaces::TranscriptSink;
pub use report::CategoryOutcomes;
pub use report::ValidationReport;
pub use result::TestLedger;
pub use result::TestResult;
pub use validator::UnlockValidator;
