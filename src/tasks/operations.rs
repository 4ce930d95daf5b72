//! Outline, title suggestion and content generation

use tracing::{debug, instrument};

use super::params::{check_word_count, require, title_suggestion_inputs};
use super::{ContentParams, OutlineParams, TaskKind};
use crate::client::{InputField, WorkflowClient, WorkflowError, WorkflowRequest};
use crate::response::parse_list;

/// Draft a paper outline from its metadata.
///
/// Fails with [`WorkflowError::MissingContent`] when the workflow answers
/// without any usable text.
#[instrument(skip_all, fields(task = "outline"))]
pub async fn generate_outline(
    client: &WorkflowClient,
    params: &OutlineParams,
    credential: Option<&str>,
) -> Result<String, WorkflowError> {
    require(InputField::Title, &params.title)?;
    check_word_count(params.word_count)?;

    let request = WorkflowRequest::new(params.to_inputs());
    let response = client.run_workflow(&request, credential).await?;

    response
        .final_text()
        .ok_or(WorkflowError::MissingContent(TaskKind::Outline))
}

/// Ask for alternative titles. An empty answer is an empty list, not an error.
#[instrument(skip_all, fields(task = "title_suggestions"))]
pub async fn fetch_title_suggestions(
    client: &WorkflowClient,
    seed_text: &str,
    credential: Option<&str>,
) -> Result<Vec<String>, WorkflowError> {
    require(InputField::SeedText, seed_text)?;

    let request = WorkflowRequest::new(title_suggestion_inputs(seed_text));
    let response = client.run_workflow(&request, credential).await?;

    let Some(text) = response.final_text() else {
        debug!("Workflow returned no suggestion text");
        return Ok(Vec::new());
    };

    let suggestions = parse_list(&text);
    debug!(count = suggestions.len(), "Parsed title suggestions");
    Ok(suggestions)
}

/// Expand an accepted outline into the full text.
#[instrument(skip_all, fields(task = "content"))]
pub async fn generate_content(
    client: &WorkflowClient,
    params: &ContentParams,
    credential: Option<&str>,
) -> Result<String, WorkflowError> {
    require(InputField::Outline, &params.outline)?;
    check_word_count(params.word_count)?;

    let request = WorkflowRequest::new(params.to_inputs());
    let response = client.run_workflow(&request, credential).await?;

    response
        .final_text()
        .ok_or(WorkflowError::MissingContent(TaskKind::Content))
}
