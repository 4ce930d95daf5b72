//! Client configuration
//!
//! Loaded from a YAML file, with environment variables taking precedence:
//!
//! ```yaml
//! base_url: "https://api.dify.ai/v1"
//! workflow_path: "/workflows/run"
//! timeout_ms: 60000
//! user: "paper-generator-ui"
//! ```
//!
//! The API key is never read from here; it is supplied per call.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const ENV_BASE_URL: &str = "PAPER_WORKFLOW_BASE_URL";
pub const ENV_TIMEOUT_MS: &str = "PAPER_WORKFLOW_TIMEOUT_MS";
pub const ENV_USER: &str = "PAPER_WORKFLOW_USER";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error in {file}: {error}")]
    Yaml {
        file: String,
        error: serde_yaml::Error,
    },

    #[error("Invalid value for {var}: {value}")]
    InvalidEnv { var: String, value: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the workflow service, or of the proxy prefix in front of it
    pub base_url: String,

    /// Path of the workflow-execution endpoint, relative to `base_url`
    pub workflow_path: String,

    /// Client-side timeout for a single call in milliseconds
    pub timeout_ms: u64,

    /// Identity sent as `user` when a request does not set one
    pub user: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.dify.ai/v1".to_string(),
            workflow_path: "/workflows/run".to_string(),
            timeout_ms: 60_000,
            user: "paper-generator-ui".to_string(),
        }
    }
}

impl ClientConfig {
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: ClientConfig =
            serde_yaml::from_str(&content).map_err(|e| ConfigError::Yaml {
                file: path.display().to_string(),
                error: e,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings no call could succeed with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "timeout_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|var| std::env::var(var).ok())
    }

    /// Apply overrides from any variable source
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            self.base_url = base_url;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            self.timeout_ms = raw
                .trim()
                .parse()
                .ok()
                .filter(|ms: &u64| *ms > 0)
                .ok_or_else(|| ConfigError::InvalidEnv {
                    var: ENV_TIMEOUT_MS.to_string(),
                    value: raw.clone(),
                })?;
        }
        if let Some(user) = lookup(ENV_USER) {
            self.user = user;
        }
        Ok(self)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Full URL of the workflow-execution endpoint
    pub fn endpoint(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = if self.workflow_path.starts_with('/') {
            self.workflow_path.clone()
        } else {
            format!("/{}", self.workflow_path)
        };
        format!("{}{}", base, path)
    }
}
