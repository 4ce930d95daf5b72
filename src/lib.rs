//! # Paper Workflow
//!
//! Client for a generative workflow API that drafts academic papers. Form
//! values (title, major, direction, word count, description) go in; an
//! outline, title suggestions or the full text come out.
//!
//! ## Features
//!
//! - **Blocking workflow calls** - One POST per operation with a fixed client-side timeout
//! - **Tolerant response parsing** - Outputs may sit at the top level or under `data`
//! - **List parsing** - Suggestions arrive as a JSON array or as a bulleted list
//! - **Localized errors** - Every failure maps to one actionable message
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use paper_workflow::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = WorkflowClient::new(ClientConfig::default().with_env_overrides()?)?;
//!
//!     let params = OutlineParams {
//!         word_count: Some(3000),
//!         ..OutlineParams::new("Text summarization with deep learning")
//!     };
//!
//!     match generate_outline(&client, &params, Some("app-key")).await {
//!         Ok(outline) => println!("{}", outline),
//!         Err(e) => eprintln!("{}", format_error(&e)),
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod messages;
pub mod response;
pub mod tasks;

// Re-export main types
pub use client::{
    InputError, InputField, ResponseMode, WorkflowClient, WorkflowError, WorkflowRequest,
    WorkflowResponse,
};
pub use config::{ClientConfig, ConfigError};
pub use messages::{format_error, format_error_with, Locale};
pub use response::{extract_text, parse_list};
pub use tasks::{
    fetch_title_suggestions, generate_content, generate_outline, validate_key, ContentParams,
    OutlineParams, TaskKind, MAX_WORD_COUNT, MIN_WORD_COUNT,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::client::{WorkflowClient, WorkflowError, WorkflowRequest, WorkflowResponse};
    pub use crate::config::ClientConfig;
    pub use crate::messages::{format_error, format_error_with, Locale};
    pub use crate::tasks::{
        fetch_title_suggestions, generate_content, generate_outline, validate_key,
        ContentParams, OutlineParams, MAX_WORD_COUNT, MIN_WORD_COUNT,
    };
}
