use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::TaskKind;
use crate::client::{InputError, InputField, WorkflowError};

/// Accepted range for a requested paper length
pub const MIN_WORD_COUNT: u32 = 500;
pub const MAX_WORD_COUNT: u32 = 20_000;

/// Paper metadata used to draft an outline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutlineParams {
    pub title: String,
    pub major: Option<String>,
    pub direction: Option<String>,
    pub word_count: Option<u32>,
    pub description: Option<String>,
}

impl OutlineParams {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Workflow inputs; absent fields are sent as `null`
    pub fn to_inputs(&self) -> Map<String, Value> {
        let mut inputs = Map::new();
        inputs.insert("title".to_string(), json!(self.title));
        inputs.insert("major".to_string(), json!(self.major));
        inputs.insert("direction".to_string(), json!(self.direction));
        inputs.insert("word_count".to_string(), json!(self.word_count));
        inputs.insert("description".to_string(), json!(self.description));
        with_task_type(inputs, TaskKind::Outline)
    }
}

/// An accepted outline plus the target length of the full text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentParams {
    pub outline: String,
    pub word_count: Option<u32>,
}

impl ContentParams {
    pub fn new(outline: impl Into<String>) -> Self {
        Self {
            outline: outline.into(),
            word_count: None,
        }
    }

    pub fn to_inputs(&self) -> Map<String, Value> {
        let mut inputs = Map::new();
        inputs.insert("outline".to_string(), json!(self.outline));
        inputs.insert("word_count".to_string(), json!(self.word_count));
        with_task_type(inputs, TaskKind::Content)
    }
}

pub(crate) fn title_suggestion_inputs(seed_text: &str) -> Map<String, Value> {
    let mut inputs = Map::new();
    inputs.insert("seed_text".to_string(), json!(seed_text));
    with_task_type(inputs, TaskKind::TitleSuggestions)
}

fn with_task_type(mut inputs: Map<String, Value>, task: TaskKind) -> Map<String, Value> {
    inputs.insert("task_type".to_string(), json!(task.task_type()));
    inputs
}

/// Reject a required text input that is blank
pub(crate) fn require(field: InputField, value: &str) -> Result<(), WorkflowError> {
    if value.trim().is_empty() {
        return Err(WorkflowError::InvalidInput(InputError::Missing(field)));
    }
    Ok(())
}

/// Reject a word count outside [`MIN_WORD_COUNT`]..=[`MAX_WORD_COUNT`]
pub(crate) fn check_word_count(word_count: Option<u32>) -> Result<(), WorkflowError> {
    match word_count {
        Some(value) if !(MIN_WORD_COUNT..=MAX_WORD_COUNT).contains(&value) => {
            Err(WorkflowError::InvalidInput(InputError::WordCountOutOfRange {
                value,
                min: MIN_WORD_COUNT,
                max: MAX_WORD_COUNT,
            }))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_inputs_title_only() {
        let inputs = OutlineParams::new("Text summarization with deep learning").to_inputs();
        assert_eq!(
            Value::Object(inputs),
            json!({
                "title": "Text summarization with deep learning",
                "major": null,
                "direction": null,
                "word_count": null,
                "description": null,
                "task_type": "outline"
            })
        );
    }

    #[test]
    fn test_outline_inputs_full() {
        let params = OutlineParams {
            title: "T".to_string(),
            major: Some("Computer Science".to_string()),
            direction: Some("NLP".to_string()),
            word_count: Some(3000),
            description: Some("Focus on evaluation".to_string()),
        };
        let inputs = params.to_inputs();
        assert_eq!(inputs["major"], "Computer Science");
        assert_eq!(inputs["word_count"], 3000);
        assert_eq!(inputs["task_type"], "outline");
    }

    #[test]
    fn test_content_inputs() {
        let params = ContentParams {
            outline: "I. Intro".to_string(),
            word_count: Some(5000),
        };
        assert_eq!(
            Value::Object(params.to_inputs()),
            json!({ "outline": "I. Intro", "word_count": 5000, "task_type": "content" })
        );
    }

    #[test]
    fn test_title_suggestion_inputs() {
        assert_eq!(
            Value::Object(title_suggestion_inputs("graph networks")),
            json!({ "seed_text": "graph networks", "task_type": "title_suggestions" })
        );
    }

    #[test]
    fn test_require() {
        assert!(require(InputField::Title, "x").is_ok());
        let err = require(InputField::Title, "  ").unwrap_err();
        assert!(matches!(
            err,
            WorkflowError::InvalidInput(InputError::Missing(InputField::Title))
        ));
    }

    #[test]
    fn test_word_count_bounds() {
        assert!(check_word_count(None).is_ok());
        assert!(check_word_count(Some(MIN_WORD_COUNT)).is_ok());
        assert!(check_word_count(Some(MAX_WORD_COUNT)).is_ok());

        for value in [0, 499, 20_001] {
            let err = check_word_count(Some(value)).unwrap_err();
            assert!(matches!(
                err,
                WorkflowError::InvalidInput(InputError::WordCountOutOfRange { value: v, .. }) if v == value
            ));
        }
    }
}
