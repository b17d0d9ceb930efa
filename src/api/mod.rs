//! Make.com API module
//!
//! HTTP client and data types for the upstream Make.com REST API.

pub mod client;
pub mod types;

pub use client::{MakeClient, DEFAULT_LOG_LIMIT};
pub use types::{Execution, RunOutcome, Scenario};
