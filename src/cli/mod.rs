//! CLI module for makehub
//!
//! Provides command-line interface with the following subcommands:
//! - `mcp` - Start MCP server over stdio
//! - `scenarios` - List all available scenarios
//! - `run` - Run a scenario
//! - `logs` - Fetch execution logs for a scenario

pub mod commands;
pub mod mcp;

pub use commands::{Cli, Commands};
pub use mcp::run_mcp_server;
