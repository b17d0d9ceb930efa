//! Make.com API client
//!
//! Performs the three authenticated HTTP operations against the configured
//! base URL. One attempt per call, no retry, no timeout override; the
//! credential is attached unconditionally even when empty, so a missing
//! token surfaces as an authentication failure from the remote service.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Response, StatusCode};
use serde_json::{json, Map, Value};

use crate::config::ApiConfig;
use crate::error::MakeError;

use super::types::{
    Execution, ExecutionListBody, RunBody, RunOutcome, Scenario, ScenarioListBody,
};

/// Human-readable operation names used in error messages
pub(crate) const OP_LIST_SCENARIOS: &str = "list scenarios";
pub(crate) const OP_RUN_SCENARIO: &str = "run scenario";
pub(crate) const OP_GET_LOGS: &str = "fetch execution logs";

/// Default number of execution log entries returned when no limit is given
pub const DEFAULT_LOG_LIMIT: u32 = 10;

/// Authenticated client for the Make.com REST API
#[derive(Debug, Clone)]
pub struct MakeClient {
    http: Client,
    base_url: String,
    token: String,
}

impl MakeClient {
    /// Create a client from API configuration.
    ///
    /// The credential is read once here and never refreshed.
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        }
    }

    /// Base URL this client targets (for verbose CLI output)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(&format!("Token {}", self.token)) {
            headers.insert(AUTHORIZATION, value);
        }
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    /// List all scenarios: `GET /scenarios`
    pub async fn list_scenarios(&self) -> Result<Vec<Scenario>, MakeError> {
        let url = format!("{}/scenarios", self.base_url);
        tracing::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .headers(self.headers())
            .send()
            .await
            .map_err(|e| MakeError::upstream(OP_LIST_SCENARIOS, e))?;

        let body: ScenarioListBody = decode(response, OP_LIST_SCENARIOS).await?;
        Ok(body.scenarios.into_iter().map(Scenario::from).collect())
    }

    /// Trigger a scenario run: `POST /scenarios/{id}/run`
    ///
    /// The request body is exactly `{"data": data}`. The scenario ID is not
    /// validated locally; an unknown ID is rejected by the remote service.
    pub async fn run_scenario(
        &self,
        scenario_id: &str,
        data: Map<String, Value>,
    ) -> Result<RunOutcome, MakeError> {
        let url = format!("{}/scenarios/{}/run", self.base_url, scenario_id);
        tracing::debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .headers(self.headers())
            .json(&json!({ "data": data }))
            .send()
            .await
            .map_err(|e| MakeError::upstream(OP_RUN_SCENARIO, e))?;

        let body: RunBody = decode(response, OP_RUN_SCENARIO).await?;
        Ok(RunOutcome {
            success: true,
            execution_id: body.execution_id,
            message: "Scenario run started".to_string(),
        })
    }

    /// Fetch execution logs: `GET /scenarios/{id}/executions?limit=N`
    pub async fn get_scenario_logs(
        &self,
        scenario_id: &str,
        limit: u32,
    ) -> Result<Vec<Execution>, MakeError> {
        let url = format!("{}/scenarios/{}/executions", self.base_url, scenario_id);
        tracing::debug!("GET {} (limit={})", url, limit);

        let response = self
            .http
            .get(&url)
            .query(&[("limit", limit)])
            .headers(self.headers())
            .send()
            .await
            .map_err(|e| MakeError::upstream(OP_GET_LOGS, e))?;

        let body: ExecutionListBody = decode(response, OP_GET_LOGS).await?;
        Ok(body.executions)
    }
}

/// Check the status code and decode the JSON body, mapping any failure to
/// an `Upstream` error tagged with the operation name.
async fn decode<T: serde::de::DeserializeOwned>(
    response: Response,
    operation: &str,
) -> Result<T, MakeError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(MakeError::upstream(
            operation,
            format_status_error(status, &body),
        ));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| MakeError::upstream(operation, format!("unexpected response body: {}", e)))
}

fn format_status_error(status: StatusCode, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        format!("HTTP {}", status)
    } else {
        format!("HTTP {}: {}", status, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;

    fn client() -> MakeClient {
        MakeClient::new(&ApiConfig {
            token: "test-token".into(),
            base_url: "https://eu1.make.com/api/v2/".into(),
        })
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        assert_eq!(client().base_url(), "https://eu1.make.com/api/v2");
    }

    #[test]
    fn test_headers_carry_token_and_content_type() {
        let headers = client().headers();
        assert_eq!(
            headers.get(AUTHORIZATION).unwrap().to_str().unwrap(),
            "Token test-token"
        );
        assert_eq!(
            headers.get(CONTENT_TYPE).unwrap().to_str().unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_headers_attach_empty_token() {
        let client = MakeClient::new(&ApiConfig {
            token: String::new(),
            base_url: "https://eu1.make.com/api/v2".into(),
        });
        assert_eq!(
            client.headers().get(AUTHORIZATION).unwrap().to_str().unwrap(),
            "Token "
        );
    }

    #[test]
    fn test_format_status_error_with_body() {
        let msg = format_status_error(StatusCode::INTERNAL_SERVER_ERROR, "boom");
        assert_eq!(msg, "HTTP 500 Internal Server Error: boom");
    }

    #[test]
    fn test_format_status_error_empty_body() {
        let msg = format_status_error(StatusCode::BAD_GATEWAY, "  ");
        assert_eq!(msg, "HTTP 502 Bad Gateway");
    }
}
