// crates/nexus-unlock-core/src/endpoint.rs
// ============================================================================
// Module: Nexus Unlock Endpoint Client
// Description: Blocking HTTP GET checks against dashboard API paths.
// Purpose: Capture transport and parse failures as data, never as errors.
// Dependencies: reqwest, serde_json
// ============================================================================

//! ## Overview
//! The endpoint client issues one blocking GET per check with a fixed
//! timeout. Any transport failure (timeout, connection refused, DNS failure)
//! is captured in the returned [`EndpointCheck`] instead of propagating. The
//! response body is parsed as JSON only for HTTP 200 responses; a parse
//! failure on a 200 is likewise captured as a failed check.
//!
//! Response bodies are untrusted input; nothing in this module panics on
//! malformed data.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;

use crate::config::DEFAULT_BASE_URL;
use crate::config::DEFAULT_TIMEOUT_MS;
use crate::error::EndpointClientError;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Configuration for the endpoint client.
///
/// # Invariants
/// - `timeout_ms` applies to the full request lifecycle of every check.
/// - `base_url` carries no trailing slash; check paths start with `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointClientConfig {
    /// Base URL of the dashboard under validation.
    pub base_url: String,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
    /// User agent string for outbound requests.
    pub user_agent: String,
}

impl Default for EndpointClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: "nexus-unlock/0.1".to_string(),
        }
    }
}

// ============================================================================
// SECTION: Check Outcome
// ============================================================================

/// Outcome of one endpoint check.
///
/// # Invariants
/// - `success` implies the response status equaled the expected status.
/// - `data` is populated only for HTTP 200 responses with valid JSON bodies.
/// - `error` is populated only for transport or JSON parse failures.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointCheck {
    /// Whether the check succeeded.
    pub success: bool,
    /// HTTP status code, absent when the request never completed.
    pub status_code: Option<u16>,
    /// Parsed JSON body for 200 responses.
    pub data: Option<Value>,
    /// Captured transport or parse error message.
    pub error: Option<String>,
}

impl EndpointCheck {
    /// Builds a failed check from a captured error message.
    fn failure(message: String) -> Self {
        Self {
            success: false,
            status_code: None,
            data: None,
            error: Some(message),
        }
    }
}

// ============================================================================
// SECTION: Client
// ============================================================================

/// Blocking HTTP client for dashboard endpoint checks.
pub struct EndpointClient {
    /// Client configuration.
    config: EndpointClientConfig,
    /// HTTP client used for outbound requests.
    client: Client,
}

impl EndpointClient {
    /// Creates a new endpoint client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EndpointClientError`] when the HTTP client cannot be built.
    pub fn new(config: EndpointClientConfig) -> Result<Self, EndpointClientError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self {
            config,
            client,
        })
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Checks an endpoint expecting HTTP 200.
    #[must_use]
    pub fn check(&self, path: &str) -> EndpointCheck {
        self.check_expecting(path, 200)
    }

    /// Checks an endpoint against an explicit expected status.
    ///
    /// Transport failures never propagate; they are captured in the returned
    /// [`EndpointCheck`].
    #[must_use]
    pub fn check_expecting(&self, path: &str, expected_status: u16) -> EndpointCheck {
        let url = format!("{}{}", self.config.base_url, path);
        let response = match self.client.get(&url).send() {
            Ok(response) => response,
            Err(err) => return EndpointCheck::failure(err.to_string()),
        };
        let status = response.status().as_u16();
        let body = match response.text() {
            Ok(body) => body,
            Err(err) => return EndpointCheck::failure(err.to_string()),
        };
        let data = if status == 200 {
            match serde_json::from_str::<Value>(&body) {
                Ok(parsed) => Some(parsed),
                Err(err) => return EndpointCheck::failure(err.to_string()),
            }
        } else {
            None
        };
        EndpointCheck {
            success: status == expected_status,
            status_code: Some(status),
            data,
            error: None,
        }
    }
}
