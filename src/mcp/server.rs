//! MCP Server implementation
//!
//! Exposes the three Make.com tools and the `make://scenarios` resource
//! over the rmcp SDK. Tool routing is an exact match on the tool name;
//! every operation maps 1:1 to one upstream HTTP call and the adapter
//! holds no state between calls.

use std::sync::Arc;

use once_cell::sync::Lazy;
use rmcp::model::{
    AnnotateAble, CallToolRequestParam, CallToolResult, Content, Implementation, JsonObject,
    ListResourcesResult, ListToolsResult, PaginatedRequestParam, RawResource,
    ReadResourceRequestParam, ReadResourceResult, Resource, ResourceContents,
    ResourcesCapability, ServerCapabilities, ServerInfo, Tool, ToolsCapability,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::ServerHandler;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::{Execution, MakeClient, Scenario, DEFAULT_LOG_LIMIT};
use crate::config::{interpolate_config, load_config, Config};
use crate::error::MakeError;

/// URI of the single static resource this server advertises
pub const SCENARIOS_RESOURCE_URI: &str = "make://scenarios";

const MIME_JSON: &str = "application/json";

/// MCP server for Make.com scenario automation
#[derive(Clone)]
pub struct MakehubServer {
    /// API client holding the credential read once at startup
    client: Arc<MakeClient>,
}

impl MakehubServer {
    /// Create a new MCP server from the layered configuration
    pub fn new() -> Result<Self, anyhow::Error> {
        let mut config = load_config(None)?;
        interpolate_config(&mut config);
        Ok(Self::with_config(config))
    }

    /// Create with a specific config
    pub fn with_config(config: Config) -> Self {
        Self {
            client: Arc::new(MakeClient::new(&config.api)),
        }
    }

    /// Create with a preconstructed API client
    pub fn with_client(client: MakeClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Route a `{name, arguments}` pair to the matching API operation.
    ///
    /// Returns the pretty-printed JSON text for the MCP content envelope.
    /// Unknown names fail with `UnknownTool` before any outbound call.
    pub async fn dispatch_tool(
        &self,
        name: &str,
        arguments: JsonObject,
    ) -> Result<String, MakeError> {
        match name {
            "list_scenarios" => self.list_scenarios_text().await,
            "run_scenario" => {
                let params: RunScenarioParams = parse_params(arguments)?;
                let outcome = self
                    .client
                    .run_scenario(&params.scenario_id, params.data)
                    .await?;
                to_pretty_json(&outcome)
            }
            "get_scenario_logs" => {
                let params: GetScenarioLogsParams = parse_params(arguments)?;
                let logs = self
                    .client
                    .get_scenario_logs(&params.scenario_id, params.limit)
                    .await?;
                to_pretty_json(&ExecutionLogList { logs })
            }
            other => Err(MakeError::UnknownTool(other.to_string())),
        }
    }

    /// Serve a resource read by delegating to the list operation.
    ///
    /// The returned text is byte-identical to the `list_scenarios` tool
    /// output. Any URI other than `make://scenarios` fails with
    /// `UnknownResource` before any outbound call.
    pub async fn read_resource_text(&self, uri: &str) -> Result<String, MakeError> {
        if uri != SCENARIOS_RESOURCE_URI {
            return Err(MakeError::UnknownResource(uri.to_string()));
        }
        self.list_scenarios_text().await
    }

    async fn list_scenarios_text(&self) -> Result<String, MakeError> {
        let scenarios = self.client.list_scenarios().await?;
        to_pretty_json(&ScenarioList { scenarios })
    }
}

impl Default for MakehubServer {
    fn default() -> Self {
        Self::with_config(Config::default())
    }
}

// === Tool Parameter Types ===

/// Parameters for the run_scenario tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct RunScenarioParams {
    /// ID of the scenario to run
    #[serde(rename = "scenarioId")]
    pub scenario_id: String,

    /// Data passed to the scenario
    #[serde(default)]
    pub data: JsonObject,
}

/// Parameters for the get_scenario_logs tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetScenarioLogsParams {
    /// ID of the scenario
    #[serde(rename = "scenarioId")]
    pub scenario_id: String,

    /// Number of log entries to return
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    DEFAULT_LOG_LIMIT
}

/// Response wrapper for list_scenarios
#[derive(Debug, Serialize)]
pub struct ScenarioList {
    pub scenarios: Vec<Scenario>,
}

/// Response wrapper for get_scenario_logs
#[derive(Debug, Serialize)]
pub struct ExecutionLogList {
    pub logs: Vec<Execution>,
}

// === Response formatting ===

fn parse_params<T: serde::de::DeserializeOwned>(arguments: JsonObject) -> Result<T, MakeError> {
    serde_json::from_value(Value::Object(arguments))
        .map_err(|e| MakeError::InvalidArguments(e.to_string()))
}

/// Pretty-print a payload with 2-space indentation for the text envelope
fn to_pretty_json<T: Serialize>(payload: &T) -> Result<String, MakeError> {
    Ok(serde_json::to_string_pretty(payload)?)
}

// === Tool and resource declarations ===

static LIST_SCENARIOS_SCHEMA: Lazy<Arc<JsonObject>> = Lazy::new(empty_object_schema);
static RUN_SCENARIO_SCHEMA: Lazy<Arc<JsonObject>> =
    Lazy::new(param_schema::<RunScenarioParams>);
static GET_SCENARIO_LOGS_SCHEMA: Lazy<Arc<JsonObject>> =
    Lazy::new(param_schema::<GetScenarioLogsParams>);

fn param_schema<T: JsonSchema>() -> Arc<JsonObject> {
    let schema = schemars::gen::SchemaGenerator::default().into_root_schema_for::<T>();
    match serde_json::to_value(schema) {
        Ok(Value::Object(map)) => Arc::new(map),
        _ => empty_object_schema(),
    }
}

fn empty_object_schema() -> Arc<JsonObject> {
    let mut map = JsonObject::new();
    map.insert("type".to_string(), Value::String("object".to_string()));
    map.insert("properties".to_string(), Value::Object(JsonObject::new()));
    Arc::new(map)
}

/// The three tool declarations served by `tools/list`
pub(crate) fn tool_definitions() -> Vec<Tool> {
    vec![
        Tool::new(
            "list_scenarios",
            "List all available Make.com scenarios",
            LIST_SCENARIOS_SCHEMA.clone(),
        ),
        Tool::new(
            "run_scenario",
            "Run the specified Make.com scenario",
            RUN_SCENARIO_SCHEMA.clone(),
        ),
        Tool::new(
            "get_scenario_logs",
            "Fetch execution logs for a Make.com scenario",
            GET_SCENARIO_LOGS_SCHEMA.clone(),
        ),
    ]
}

/// The single static resource declaration served by `resources/list`
pub(crate) fn scenarios_resource() -> Resource {
    let mut resource = RawResource::new(SCENARIOS_RESOURCE_URI, "Make.com scenarios");
    resource.description = Some("All available automation scenarios".to_string());
    resource.mime_type = Some(MIME_JSON.to_string());
    resource.no_annotation()
}

impl ServerHandler for MakehubServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                resources: Some(ResourcesCapability {
                    subscribe: None,
                    list_changed: Some(false),
                }),
                ..Default::default()
            },
            server_info: Implementation {
                name: "makehub".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(
                "MCP server for Make.com automation. List scenarios, trigger scenario \
                 runs, and fetch execution logs through the Make.com REST API."
                    .to_string(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: PaginatedRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, rmcp::Error> {
        Ok(ListToolsResult {
            next_cursor: None,
            tools: tool_definitions(),
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, rmcp::Error> {
        let arguments = request.arguments.unwrap_or_default();
        let text = self.dispatch_tool(&request.name, arguments).await?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    async fn list_resources(
        &self,
        _request: PaginatedRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, rmcp::Error> {
        Ok(ListResourcesResult {
            next_cursor: None,
            resources: vec![scenarios_resource()],
        })
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, rmcp::Error> {
        let text = self.read_resource_text(&request.uri).await?;
        Ok(ReadResourceResult {
            contents: vec![ResourceContents::TextResourceContents {
                uri: request.uri,
                mime_type: Some(MIME_JSON.to_string()),
                text,
            }],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_unknown_tool_fails_without_network() {
        let server = MakehubServer::default();
        let err = server
            .dispatch_tool("delete_scenario", JsonObject::new())
            .await
            .unwrap_err();

        assert!(matches!(err, MakeError::UnknownTool(name) if name == "delete_scenario"));
    }

    #[tokio::test]
    async fn test_unknown_resource_fails_without_network() {
        let server = MakehubServer::default();
        let err = server.read_resource_text("make://unknown").await.unwrap_err();

        assert!(matches!(err, MakeError::UnknownResource(uri) if uri == "make://unknown"));
    }

    #[tokio::test]
    async fn test_run_scenario_requires_scenario_id() {
        let server = MakehubServer::default();
        let err = server
            .dispatch_tool("run_scenario", JsonObject::new())
            .await
            .unwrap_err();

        assert!(matches!(err, MakeError::InvalidArguments(_)));
    }

    #[test]
    fn test_run_scenario_params_deserialize() {
        let params: RunScenarioParams = serde_json::from_value(json!({
            "scenarioId": "123",
            "data": { "key": "value" }
        }))
        .unwrap();

        assert_eq!(params.scenario_id, "123");
        assert_eq!(params.data.get("key"), Some(&json!("value")));
    }

    #[test]
    fn test_run_scenario_params_data_defaults_to_empty() {
        let params: RunScenarioParams =
            serde_json::from_value(json!({ "scenarioId": "123" })).unwrap();
        assert!(params.data.is_empty());
    }

    #[test]
    fn test_get_scenario_logs_params_limit_defaults_to_10() {
        let params: GetScenarioLogsParams =
            serde_json::from_value(json!({ "scenarioId": "123" })).unwrap();
        assert_eq!(params.limit, 10);
    }

    #[test]
    fn test_tool_definitions_declare_three_tools() {
        let tools = tool_definitions();
        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert_eq!(names, ["list_scenarios", "run_scenario", "get_scenario_logs"]);
    }

    #[test]
    fn test_run_scenario_schema_requires_scenario_id() {
        let schema = RUN_SCENARIO_SCHEMA.clone();
        let required = schema
            .get("required")
            .and_then(|v| v.as_array())
            .cloned()
            .unwrap_or_default();
        assert!(required.contains(&json!("scenarioId")));
    }

    #[test]
    fn test_list_scenarios_schema_is_empty_object() {
        let schema = LIST_SCENARIOS_SCHEMA.clone();
        assert_eq!(schema.get("type"), Some(&json!("object")));
        assert_eq!(schema.get("properties"), Some(&json!({})));
    }

    #[test]
    fn test_scenarios_resource_declaration() {
        let resource = scenarios_resource();
        assert_eq!(resource.raw.uri, SCENARIOS_RESOURCE_URI);
        assert_eq!(resource.raw.mime_type.as_deref(), Some("application/json"));
    }

    #[test]
    fn test_server_info() {
        let server = MakehubServer::default();
        let info = server.get_info();

        assert_eq!(info.server_info.name, "makehub");
        assert!(!info.server_info.version.is_empty());
        assert!(info.capabilities.resources.is_some());
        assert!(info.capabilities.tools.is_some());
    }
}
