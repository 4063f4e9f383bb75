// crates/nexus-unlock-core/src/config.rs
// ============================================================================
// Module: Nexus Unlock Configuration
// Description: Validator configuration model and TOML loading.
// Purpose: Resolve base URL, timeout, and report path with stable defaults.
// Dependencies: serde, toml
// ============================================================================

//! ## Overview
//! Configuration resolves from defaults, an optional TOML file
//! (`nexus-unlock.toml` or the `NEXUS_UNLOCK_CONFIG` path override), and
//! host-supplied overrides. A missing default file yields defaults; an
//! explicitly requested file must exist and parse.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::ConfigError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default base URL of the dashboard under validation.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Fixed per-request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

/// Default report output path, overwritten on each run.
pub const DEFAULT_REPORT_PATH: &str = "unlock_validation_report.json";

/// Default config file consulted when no explicit path is given.
pub const DEFAULT_CONFIG_PATH: &str = "nexus-unlock.toml";

/// Environment variable overriding the default config file path.
pub const CONFIG_ENV: &str = "NEXUS_UNLOCK_CONFIG";

// ============================================================================
// SECTION: Configuration Model
// ============================================================================

/// Resolved validator configuration.
///
/// # Invariants
/// - `timeout_ms` is fixed per run; there is no per-endpoint override.
/// - `report_path` is overwritten on every run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Base URL of the dashboard under validation.
    pub base_url: String,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Destination path for the JSON report.
    pub report_path: PathBuf,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
        }
    }
}

/// Raw config file shape; every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    /// Optional base URL override.
    base_url: Option<String>,
    /// Optional timeout override in milliseconds.
    timeout_ms: Option<u64>,
    /// Optional report path override.
    report_path: Option<PathBuf>,
}

impl ValidatorConfig {
    /// Loads configuration from an optional explicit path.
    ///
    /// With no explicit path, the `NEXUS_UNLOCK_CONFIG` environment variable
    /// is consulted, then the default `nexus-unlock.toml`. The default file
    /// is allowed to be absent; explicit and env-provided paths are not.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load_file(path);
        }
        if let Ok(env_path) = std::env::var(CONFIG_ENV) {
            return Self::load_file(Path::new(&env_path));
        }
        let default_path = Path::new(DEFAULT_CONFIG_PATH);
        if default_path.exists() {
            return Self::load_file(default_path);
        }
        Ok(Self::default())
    }

    /// Loads and applies one config file over the defaults.
    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: ConfigFile = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::default();
        if let Some(base_url) = file.base_url {
            config.base_url = base_url;
        }
        if let Some(timeout_ms) = file.timeout_ms {
            config.timeout_ms = timeout_ms;
        }
        if let Some(report_path) = file.report_path {
            config.report_path = report_path;
        }
        Ok(config)
    }
}
