//! Common test utilities for makehub tests

use makehub::config::ApiConfig;
use makehub::{MakeClient, MakehubServer};
use serde_json::{json, Value};
use wiremock::MockServer;

/// Token used by all test clients
pub const TEST_TOKEN: &str = "test-token";

/// Build an API client pointed at a wiremock server
pub fn client_for(mock: &MockServer) -> MakeClient {
    MakeClient::new(&ApiConfig {
        token: TEST_TOKEN.to_string(),
        base_url: mock.uri(),
    })
}

/// Build an MCP server pointed at a wiremock server
pub fn server_for(mock: &MockServer) -> MakehubServer {
    MakehubServer::with_client(client_for(mock))
}

/// Upstream `GET /scenarios` body with one scheduled and one unscheduled
/// scenario
pub fn sample_scenarios_body() -> Value {
    json!({
        "scenarios": [
            {
                "id": "101",
                "name": "Sync contacts",
                "scheduling": { "type": "indefinitely" },
                "lastRun": "2024-01-15T10:00:00Z",
                "folder": { "name": "CRM" }
            },
            {
                "id": "102",
                "name": "Weekly report"
            }
        ]
    })
}

/// Upstream `GET /scenarios/{id}/executions` body
pub fn sample_executions_body() -> Value {
    json!({
        "executions": [
            {
                "id": "exec-1",
                "status": "success",
                "startedAt": "2024-01-15T10:00:00Z",
                "finishedAt": "2024-01-15T10:00:05Z",
                "operations": 12,
                "errors": []
            },
            {
                "id": "exec-2",
                "status": "error",
                "startedAt": "2024-01-14T09:00:00Z",
                "finishedAt": null,
                "operations": 3,
                "errors": [{ "message": "module 3 failed" }]
            }
        ]
    })
}
