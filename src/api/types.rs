//! Make.com API data types
//!
//! Two layers: raw wire types mirroring the upstream response bodies, and
//! the mapped types this adapter exposes. Nothing here is cached or
//! persisted; the remote service is authoritative for all state.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status reported when a scenario has no scheduling information
const STATUS_INACTIVE: &str = "inactive";

/// A Make.com automation scenario, as exposed by `list_scenarios`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    /// Opaque scenario identifier
    pub id: String,
    /// Human-readable scenario name
    pub name: String,
    /// Scheduling type, or `"inactive"` when the scenario is not scheduled
    pub status: String,
    /// Timestamp of the last run, if any
    #[serde(rename = "lastRun")]
    pub last_run: Option<String>,
    /// Name of the folder containing the scenario, if any
    pub folder: Option<String>,
}

/// One execution of a scenario, as exposed by `get_scenario_logs`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Execution {
    /// Opaque execution identifier
    pub id: String,
    /// Execution status reported by Make.com
    pub status: String,
    #[serde(rename = "startedAt")]
    pub started_at: Option<String>,
    #[serde(rename = "finishedAt")]
    pub finished_at: Option<String>,
    /// Number of operations consumed by the execution
    #[serde(default)]
    pub operations: u64,
    /// Error descriptors, passed through unmodified
    #[serde(default)]
    pub errors: Vec<Value>,
}

/// Result of triggering a scenario run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunOutcome {
    pub success: bool,
    #[serde(rename = "executionId")]
    pub execution_id: String,
    pub message: String,
}

// === Raw wire types (upstream response bodies) ===

/// `GET /scenarios` response body
#[derive(Debug, Deserialize)]
pub(crate) struct ScenarioListBody {
    pub scenarios: Vec<RawScenario>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawScenario {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub scheduling: Option<RawScheduling>,
    #[serde(default, rename = "lastRun")]
    pub last_run: Option<String>,
    #[serde(default)]
    pub folder: Option<RawFolder>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawScheduling {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawFolder {
    #[serde(default)]
    pub name: Option<String>,
}

impl From<RawScenario> for Scenario {
    fn from(raw: RawScenario) -> Self {
        Scenario {
            id: raw.id,
            name: raw.name,
            status: raw
                .scheduling
                .and_then(|s| s.kind)
                .unwrap_or_else(|| STATUS_INACTIVE.to_string()),
            last_run: raw.last_run,
            folder: raw.folder.and_then(|f| f.name),
        }
    }
}

/// `POST /scenarios/{id}/run` response body
#[derive(Debug, Deserialize)]
pub(crate) struct RunBody {
    #[serde(rename = "executionId")]
    pub execution_id: String,
}

/// `GET /scenarios/{id}/executions` response body
#[derive(Debug, Deserialize)]
pub(crate) struct ExecutionListBody {
    pub executions: Vec<Execution>,
}
