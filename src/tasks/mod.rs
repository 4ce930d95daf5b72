//! Paper generation tasks
//!
//! Each task shapes its inputs, runs the workflow once and interprets the
//! envelope:
//! - `params` - Form parameters for each task
//! - `operations` - Outline, title suggestion and content generation
//! - `validate` - API key check

pub mod operations;
pub mod params;
pub mod validate;

pub use operations::{fetch_title_suggestions, generate_content, generate_outline};
pub use params::{ContentParams, OutlineParams, MAX_WORD_COUNT, MIN_WORD_COUNT};
pub use validate::validate_key;

/// Discriminator sent to the workflow as `task_type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Outline,
    TitleSuggestions,
    Content,
}

impl TaskKind {
    pub fn task_type(&self) -> &'static str {
        match self {
            TaskKind::Outline => "outline",
            TaskKind::TitleSuggestions => "title_suggestions",
            TaskKind::Content => "content",
        }
    }
}

impl std::fmt::Display for TaskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.task_type())
    }
}
