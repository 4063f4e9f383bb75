// crates/nexus-unlock-core/src/error.rs
// ============================================================================
// Module: Nexus Unlock Error Types
// Description: Error taxonomy for the unlock validation engine.
// Purpose: Distinguish the few fatal failure paths from degraded results.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! The validation engine converts transport failures and malformed JSON into
//! failed test results rather than errors. The error types here cover the
//! remaining fatal paths: client construction, configuration loading, and
//! report serialization or writing.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;

use thiserror::Error;

// ============================================================================
// SECTION: Endpoint Client Errors
// ============================================================================

/// Errors raised while constructing the endpoint client.
///
/// # Invariants
/// - Request failures never surface here; they are captured as
///   [`EndpointCheck`](crate::endpoint::EndpointCheck) data.
#[derive(Debug, Error)]
pub enum EndpointClientError {
    /// The underlying HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

// ============================================================================
// SECTION: Configuration Errors
// ============================================================================

/// Errors raised while loading validator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The config file could not be parsed as TOML.
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },
}

// ============================================================================
// SECTION: Report Errors
// ============================================================================

/// Errors raised while serializing or writing the validation report.
///
/// # Invariants
/// - These are the only validation-run failures that propagate to the host;
///   everything else degrades to a failed test result.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The report could not be serialized to JSON.
    #[error("failed to serialize validation report: {0}")]
    Serialize(#[from] serde_json::Error),
    /// The report file could not be written.
    #[error("failed to write validation report to {path}: {source}")]
    Write {
        /// Destination path of the report file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
