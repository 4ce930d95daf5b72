use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::response::extract_text;

/// How the workflow endpoint should deliver its result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseMode {
    #[default]
    Blocking,
    Streaming,
    NoWait,
    Async,
}

/// Body of a workflow-execution call.
///
/// `user` left as `None` is filled in by the client with its configured
/// default identity, so anything set here wins over the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowRequest {
    pub inputs: Map<String, Value>,
    #[serde(default)]
    pub response_mode: ResponseMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

impl WorkflowRequest {
    pub fn new(inputs: Map<String, Value>) -> Self {
        Self {
            inputs,
            response_mode: ResponseMode::Blocking,
            user: None,
            workflow_id: None,
            metadata: None,
        }
    }

    /// Minimal fire-and-forget request used to check that a credential is accepted
    pub fn probe() -> Self {
        let mut inputs = Map::new();
        inputs.insert("ping".to_string(), Value::from("health_check"));
        Self::new(inputs).with_response_mode(ResponseMode::NoWait)
    }

    pub fn with_response_mode(mut self, mode: ResponseMode) -> Self {
        self.response_mode = mode;
        self
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn with_workflow_id(mut self, workflow_id: impl Into<String>) -> Self {
        self.workflow_id = Some(workflow_id.into());
        self
    }

    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// The `task_type` discriminator, when one was set
    pub fn task_type(&self) -> Option<&str> {
        self.inputs.get("task_type").and_then(Value::as_str)
    }
}

/// Envelope returned by the workflow endpoint.
///
/// The upstream shape is not guaranteed: results may sit at the top level or
/// under `data`, and output values can be of any type. Every accessor here is
/// a total probe over the raw JSON and returns `None` rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkflowResponse {
    raw: Value,
}

impl WorkflowResponse {
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn into_raw(self) -> Value {
        self.raw
    }

    fn top_level(&self, key: &str) -> Option<&Value> {
        self.raw.get(key).filter(|v| !v.is_null())
    }

    fn nested(&self, key: &str) -> Option<&Value> {
        self.raw
            .get("data")
            .and_then(|data| data.get(key))
            .filter(|v| !v.is_null())
    }

    /// First present value of `key`, then `data.key`
    fn probe(&self, key: &str) -> Option<&Value> {
        self.top_level(key).or_else(|| self.nested(key))
    }

    /// Workflow outputs from `outputs`, falling back to `data.outputs`
    pub fn outputs(&self) -> Option<&Map<String, Value>> {
        self.probe("outputs").and_then(Value::as_object)
    }

    /// Raw `result` string, falling back to `data.result`. Not trimmed.
    pub fn result(&self) -> Option<&str> {
        self.probe("result").and_then(Value::as_str)
    }

    /// Text extracted from the outputs, else the raw result string.
    /// `None` when neither yields anything.
    pub fn final_text(&self) -> Option<String> {
        extract_text(self.outputs())
            .or_else(|| self.result().map(str::to_string))
            .filter(|text| !text.is_empty())
    }

    pub fn run_id(&self) -> Option<&str> {
        self.top_level("workflow_run_id")
            .or_else(|| self.top_level("id"))
            .and_then(Value::as_str)
    }

    pub fn status(&self) -> Option<&str> {
        self.nested("status")
            .or_else(|| self.top_level("status"))
            .and_then(Value::as_str)
    }
}

impl From<Value> for WorkflowResponse {
    fn from(raw: Value) -> Self {
        Self { raw }
    }
}
