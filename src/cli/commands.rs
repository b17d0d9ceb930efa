//! CLI command definitions using clap
//!
//! Defines all CLI subcommands and their arguments.

use clap::{Parser, Subcommand, ValueEnum};
use serde_json::{Map, Value};

/// Make.com scenario automation from the command line and over MCP.
///
/// Lists scenarios, triggers runs, and fetches execution logs through the
/// Make.com REST API. Can be used as a standalone CLI or as an MCP server
/// for Claude Code.
#[derive(Parser, Debug)]
#[command(name = "makehub")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (overrides default XDG paths)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start MCP server over stdio (for Claude Code integration)
    Mcp,

    /// List all available scenarios
    Scenarios(ScenariosArgs),

    /// Run a scenario
    Run(RunArgs),

    /// Fetch execution logs for a scenario
    Logs(LogsArgs),
}

/// Arguments for the `scenarios` subcommand
#[derive(Parser, Debug)]
pub struct ScenariosArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the `run` subcommand
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// ID of the scenario to run
    #[arg(required = true)]
    pub scenario_id: String,

    /// JSON object passed to the scenario as input data
    #[arg(short, long, value_parser = parse_json_object, default_value = "{}")]
    pub data: Map<String, Value>,
}

/// Parse a JSON object argument
fn parse_json_object(s: &str) -> Result<Map<String, Value>, String> {
    match serde_json::from_str::<Value>(s) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err("expected a JSON object, e.g. '{\"key\": \"value\"}'".to_string()),
        Err(e) => Err(format!("invalid JSON: {}", e)),
    }
}

/// Arguments for the `logs` subcommand
#[derive(Parser, Debug)]
pub struct LogsArgs {
    /// ID of the scenario
    #[arg(required = true)]
    pub scenario_id: String,

    /// Number of log entries to return
    #[arg(short, long, default_value = "10")]
    pub limit: u32,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    Table,
    /// JSON output
    Json,
}
