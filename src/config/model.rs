//! Configuration model for makehub
//!
//! Process-wide settings loaded once at startup and injected into the API
//! client at construction. Immutable for the process lifetime.

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Make.com API settings
    #[serde(default)]
    pub api: ApiConfig,
}

/// Make.com API settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// API token sent as `Authorization: Token <token>` on every request.
    ///
    /// An empty token is still attached; a missing credential surfaces as an
    /// authentication failure from the remote service, not as a local error.
    #[serde(default)]
    pub token: String,

    /// Base URL of the Make.com REST API
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "https://eu1.make.com/api/v2".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            base_url: default_base_url(),
        }
    }
}
