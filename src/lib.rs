//! makehub - Make.com Automation MCP Server
//!
//! A thin adapter between the Model Context Protocol and the Make.com REST
//! API. Each MCP tool call maps 1:1 to one authenticated HTTP request;
//! responses are reshaped into pretty-printed JSON text. The adapter is
//! stateless: nothing is cached, persisted, or retried, and the remote
//! service is authoritative for all scenario and execution state.
//!
//! ## MCP Tools
//!
//! - `list_scenarios` - List all available Make.com scenarios
//! - `run_scenario` - Run the specified scenario with optional input data
//! - `get_scenario_logs` - Fetch execution logs for a scenario
//!
//! ## MCP Resources
//!
//! - `make://scenarios` - JSON listing of all scenarios (same payload as
//!   `list_scenarios`)

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod mcp;

pub use api::{Execution, MakeClient, RunOutcome, Scenario};
pub use cli::{Cli, Commands};
pub use config::Config;
pub use error::MakeError;
pub use mcp::{MakehubServer, SCENARIOS_RESOURCE_URI};
