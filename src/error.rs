//! Error types for makehub
//!
//! Every failure is surfaced as a structured `MakeError` and propagated
//! unchanged to the transport boundary; the MCP layer translates it into a
//! protocol-level error response via the `From<MakeError>` impl below.

use thiserror::Error;

/// Main error type for adapter operations
#[derive(Error, Debug)]
pub enum MakeError {
    /// An outbound HTTP call failed (network error, non-2xx status, or
    /// malformed response body)
    #[error("{operation} failed: {message}")]
    Upstream { operation: String, message: String },

    /// Caller requested a tool this adapter does not implement
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// Caller requested a resource URI this adapter does not implement
    #[error("unknown resource: {0}")]
    UnknownResource(String),

    /// Tool arguments did not match the declared schema
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MakeError {
    /// Build an `Upstream` error tagged with the human-readable operation name.
    pub fn upstream(operation: impl Into<String>, message: impl std::fmt::Display) -> Self {
        MakeError::Upstream {
            operation: operation.into(),
            message: message.to_string(),
        }
    }
}

impl From<MakeError> for rmcp::Error {
    fn from(err: MakeError) -> Self {
        match &err {
            MakeError::UnknownTool(name) => rmcp::Error::invalid_params(
                err.to_string(),
                Some(serde_json::json!({ "tool": name })),
            ),
            MakeError::UnknownResource(uri) => rmcp::Error::resource_not_found(
                err.to_string(),
                Some(serde_json::json!({ "uri": uri })),
            ),
            MakeError::InvalidArguments(_) => rmcp::Error::invalid_params(err.to_string(), None),
            _ => rmcp::Error::internal_error(err.to_string(), None),
        }
    }
}
