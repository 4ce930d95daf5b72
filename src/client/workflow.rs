//! Workflow-execution client
//!
//! Issues exactly one POST per call to the configured endpoint. There is no
//! retry or backoff: a failure goes straight back to the caller.

use std::time::{Duration, Instant};

use serde_json::Value;
use tracing::{debug, info, warn};

use super::error::WorkflowError;
use super::types::{WorkflowRequest, WorkflowResponse};
use crate::config::ClientConfig;

/// One configured HTTP client shared by every operation
#[derive(Debug, Clone)]
pub struct WorkflowClient {
    config: ClientConfig,
    endpoint: String,
    client: reqwest::Client,
}

impl WorkflowClient {
    pub fn new(config: ClientConfig) -> Result<Self, WorkflowError> {
        config
            .validate()
            .map_err(|e| WorkflowError::ConfigError(e.to_string()))?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| WorkflowError::ConfigError(e.to_string()))?;

        Ok(Self {
            endpoint: config.endpoint(),
            config,
            client,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.config.timeout()
    }

    /// Fill in the fields the caller left to the client
    fn envelope(&self, request: &WorkflowRequest) -> WorkflowRequest {
        let mut body = request.clone();
        if body.user.is_none() {
            body.user = Some(self.config.user.clone());
        }
        body
    }

    fn apply_auth(
        &self,
        request: reqwest::RequestBuilder,
        credential: Option<&str>,
    ) -> reqwest::RequestBuilder {
        match credential.filter(|token| !token.is_empty()) {
            Some(token) => request.header("Authorization", format!("Bearer {}", token)),
            None => request,
        }
    }

    /// Run the workflow and return its envelope.
    ///
    /// Any non-2xx status becomes [`WorkflowError::Http`] carrying the parsed
    /// response body, so callers can read server-supplied details.
    pub async fn run_workflow(
        &self,
        request: &WorkflowRequest,
        credential: Option<&str>,
    ) -> Result<WorkflowResponse, WorkflowError> {
        let body = self.envelope(request);
        let authorized = credential.is_some_and(|token| !token.is_empty());

        debug!(
            endpoint = %self.endpoint,
            task_type = body.task_type().unwrap_or("-"),
            response_mode = ?body.response_mode,
            authorized,
            "Running workflow"
        );

        let start = Instant::now();
        let call = self.apply_auth(self.client.post(&self.endpoint).json(&body), credential);

        let response = call.send().await.map_err(|e| {
            warn!("Workflow request failed: {}", e);
            WorkflowError::from(e)
        })?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| {
            warn!("Failed to read workflow response: {}", e);
            WorkflowError::from(e)
        })?;
        let elapsed_ms = start.elapsed().as_millis() as u64;
        let body = parse_body(text);

        if !(200..300).contains(&status) {
            warn!("POST {} -> {} ({}ms)", self.endpoint, status, elapsed_ms);
            return Err(WorkflowError::Http { status, body });
        }

        let response = WorkflowResponse::from(body);
        info!(
            run_id = response.run_id().unwrap_or("-"),
            workflow_status = response.status().unwrap_or("-"),
            "POST {} -> {} ({}ms)",
            self.endpoint,
            status,
            elapsed_ms
        );
        Ok(response)
    }
}

/// Parse a body as JSON, keeping non-JSON text as a JSON string
fn parse_body(text: String) -> Value {
    if text.is_empty() {
        Value::Null
    } else {
        serde_json::from_str(&text).unwrap_or(Value::String(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map};

    fn make_client() -> WorkflowClient {
        WorkflowClient::new(ClientConfig::default().with_base_url("http://localhost:9/v1/"))
            .unwrap()
    }

    #[test]
    fn test_endpoint_from_config() {
        let client = make_client();
        assert_eq!(client.endpoint(), "http://localhost:9/v1/workflows/run");
        assert_eq!(client.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = ClientConfig {
            timeout_ms: 0,
            ..Default::default()
        };
        let err = WorkflowClient::new(config).unwrap_err();
        assert!(matches!(err, WorkflowError::ConfigError(_)));
    }

    #[test]
    fn test_envelope_fills_default_user() {
        let client = make_client();
        let body = client.envelope(&WorkflowRequest::new(Map::new()));
        assert_eq!(body.user.as_deref(), Some("paper-generator-ui"));
    }

    #[test]
    fn test_envelope_keeps_caller_user() {
        let client = make_client();
        let body = client.envelope(&WorkflowRequest::new(Map::new()).with_user("someone"));
        assert_eq!(body.user.as_deref(), Some("someone"));
    }

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body(String::new()), Value::Null);
        assert_eq!(parse_body("{\"a\":1}".to_string()), json!({ "a": 1 }));
        assert_eq!(parse_body("Bad Gateway".to_string()), json!("Bad Gateway"));
    }
}
