//! MCP module for makehub
//!
//! Tool dispatch, resource provider, and protocol envelope formatting.

pub mod server;

pub use server::{MakehubServer, SCENARIOS_RESOURCE_URI};
