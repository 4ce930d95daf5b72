//! Workflow client error types

use serde_json::Value;

use crate::tasks::TaskKind;

/// Errors that can occur while calling the workflow endpoint or
/// interpreting its response
#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    #[error("Request timed out")]
    Timeout,

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error: {status}")]
    Http { status: u16, body: Value },

    #[error("{}", crate::messages::missing_content_text(.0))]
    MissingContent(TaskKind),

    #[error("Invalid input: {0}")]
    InvalidInput(InputError),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Task parameters that must be filled in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Title,
    SeedText,
    Outline,
}

impl InputField {
    pub fn name(&self) -> &'static str {
        match self {
            InputField::Title => "title",
            InputField::SeedText => "seed_text",
            InputField::Outline => "outline",
        }
    }
}

/// Task parameters rejected before any request is sent
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("{} is required", .0.name())]
    Missing(InputField),

    #[error("word_count must be between {min} and {max}, got {value}")]
    WordCountOutOfRange { value: u32, min: u32, max: u32 },
}

impl WorkflowError {
    /// Status code of a response that was received, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            WorkflowError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Classify a transport failure by whether any response came back
    pub fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            WorkflowError::Timeout
        } else if let Some(status) = err.status() {
            WorkflowError::Http {
                status: status.as_u16(),
                body: Value::Null,
            }
        } else {
            WorkflowError::Network(err.to_string())
        }
    }
}

impl From<reqwest::Error> for WorkflowError {
    fn from(err: reqwest::Error) -> Self {
        Self::from_transport(&err)
    }
}
