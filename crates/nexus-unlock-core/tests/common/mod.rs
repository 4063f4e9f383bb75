// crates/nexus-unlock-core/tests/common/mod.rs
// ============================================================================
// Module: Mock Dashboard Test Harness
// Description: Configurable tiny_http server imitating the dashboard API.
// Purpose: Serve fixture responses for full validation-run tests.
// Dependencies: nexus-unlock-core, serde_json, tiny_http
// ============================================================================

//! ## Overview
//! Spawns a loopback HTTP server whose responses come from a path-keyed
//! fixture map. The healthy fixture satisfies every category threshold so
//! tests can flip one condition at a time.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::sync::Arc;
use std::thread;
use std::thread::JoinHandle;

use serde_json::json;
use tiny_http::Header;
use tiny_http::Response;
use tiny_http::Server;

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Path-keyed response fixture: status code and raw body.
pub type Fixture = HashMap<String, (u16, String)>;

/// Builds a fixture that satisfies every category threshold.
pub fn healthy_fixture() -> Fixture {
    let mut fixture = Fixture::new();
    let generic = json!({"status": "ok"}).to_string();
    for path in [
        "/",
        "/api/dashboard/stats",
        "/api/dashboard/activity",
        "/api/dashboard/learning-progress",
        "/api/quantum/knowledge-graph",
        "/api/research/metrics",
        "/api/research/targets",
        "/api/automation/metrics",
        "/api/watson/visual-state",
        "/api/watson/history",
    ] {
        fixture.insert(path.to_string(), (200, generic.clone()));
    }
    fixture.insert(
        "/api/watson/state".to_string(),
        (
            200,
            json!({"isMemoryAware": true, "fingerprintLock": "WATSON_COMMAND_READY"}).to_string(),
        ),
    );
    fixture.insert(
        "/api/kaizen/metrics".to_string(),
        (
            200,
            json!({"isActive": true, "optimizationCycles": 5, "currentEfficiency": 95})
                .to_string(),
        ),
    );
    fixture.insert(
        "/api/infinity/health".to_string(),
        (200, json!({"overallHealth": 95, "securityStatus": "excellent"}).to_string()),
    );
    fixture.insert(
        "/api/infinity/modules".to_string(),
        (200, json!({"modules": ["watson", "kaizen", "market"]}).to_string()),
    );
    fixture.insert(
        "/api/market/summary".to_string(),
        (
            200,
            json!({"totalDataPoints": 1200, "activeSources": ["reuters", "bloomberg"]})
                .to_string(),
        ),
    );
    fixture.insert(
        "/api/market/alerts".to_string(),
        (200, json!({"alerts": []}).to_string()),
    );
    fixture
}

// ============================================================================
// SECTION: Mock Server
// ============================================================================

/// Loopback dashboard server answering from a fixture map.
pub struct MockDashboard {
    /// Underlying server handle, shared with the worker thread.
    server: Arc<Server>,
    /// Worker thread answering requests until unblocked.
    worker: Option<JoinHandle<()>>,
    /// Base URL for validator configuration.
    base_url: String,
}

impl MockDashboard {
    /// Starts a server on an ephemeral loopback port.
    pub fn start(fixture: Fixture) -> Self {
        let server = Arc::new(Server::http("127.0.0.1:0").unwrap());
        let addr = server.server_addr().to_ip().unwrap();
        let base_url = format!("http://{addr}");
        let worker = {
            let server = Arc::clone(&server);
            thread::spawn(move || {
                while let Ok(request) = server.recv() {
                    let (status, body) = fixture
                        .get(request.url())
                        .cloned()
                        .unwrap_or((404, String::new()));
                    let header =
                        Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                            .unwrap();
                    let response =
                        Response::from_string(body).with_status_code(status).with_header(header);
                    let _ = request.respond(response);
                }
            })
        };
        Self {
            server,
            worker: Some(worker),
            base_url,
        }
    }

    /// Returns the server base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Drop for MockDashboard {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
