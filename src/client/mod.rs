//! Workflow client module
//!
//! This module contains:
//! - `workflow` - The HTTP client for the workflow-execution endpoint
//! - `types` - Request and response envelope types
//! - `error` - Transport, HTTP and content error types

pub mod error;
pub mod types;
pub mod workflow;

pub use error::{InputError, InputField, WorkflowError};
pub use types::{ResponseMode, WorkflowRequest, WorkflowResponse};
pub use workflow::WorkflowClient;
