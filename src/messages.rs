//! User-facing error messages
//!
//! Turns any failure into one actionable, localized line. Status branches
//! prefer the detail the server sent over the built-in text.

use std::error::Error as StdError;
use std::str::FromStr;

use serde_json::Value;

use crate::client::{InputError, InputField, WorkflowError};
use crate::tasks::TaskKind;

/// Fields checked for a server-supplied detail, in order
const DETAIL_FIELDS: [&str; 3] = ["message", "error", "detail"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    ZhCn,
    En,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "zh" | "zh-cn" => Ok(Locale::ZhCn),
            "en" | "en-us" => Ok(Locale::En),
            other => Err(format!("unsupported locale: {}", other)),
        }
    }
}

enum Message {
    Timeout,
    Network,
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    RateLimited,
    ServerError,
    UpstreamUnavailable,
    RequestFailed(u16),
    MissingContent(TaskKind),
    MissingInput(InputField),
    WordCountOutOfRange { min: u32, max: u32 },
    Config(String),
    Unknown,
}

impl Message {
    fn render(&self, locale: Locale) -> String {
        match locale {
            Locale::ZhCn => self.zh_cn(),
            Locale::En => self.en(),
        }
    }

    fn zh_cn(&self) -> String {
        let text = match self {
            Message::Timeout => "请求超时，请检查网络状况或稍后重试。",
            Message::Network => "网络请求失败，请确认已连接至网络并检查代理配置。",
            Message::BadRequest => "请求参数有误，请检查输入内容后重试。",
            Message::Unauthorized => "鉴权失败，请确认 Dify API Key 是否填写正确。",
            Message::Forbidden => "无权访问所请求的工作流，请确认权限配置。",
            Message::NotFound => "未找到对应的接口，请确认代理或工作流地址是否正确。",
            Message::RateLimited => "请求过于频繁，请稍后重试或降低调用频率。",
            Message::ServerError => "服务内部错误，请稍后重试。",
            Message::UpstreamUnavailable => {
                "上游服务暂时不可用或超时，请稍后重试，必要时可调整工作流为流式或异步模式。"
            }
            Message::RequestFailed(status) => {
                return format!("请求失败（状态码：{}），请稍后再试。", status)
            }
            Message::MissingContent(TaskKind::Outline) => {
                "未能从工作流响应中解析到论文大纲，请稍后重试或检查工作流配置。"
            }
            Message::MissingContent(TaskKind::Content) => {
                "未能从工作流响应中解析到正文内容，请检查工作流返回格式。"
            }
            Message::MissingContent(TaskKind::TitleSuggestions) => {
                "未能从工作流响应中解析到标题建议，请检查工作流返回格式。"
            }
            Message::MissingInput(InputField::Title | InputField::SeedText) => {
                "请输入论文题目或主题"
            }
            Message::MissingInput(InputField::Outline) => "请先生成并确认大纲",
            Message::WordCountOutOfRange { min, max } => {
                return format!("字数要求需在 {} 到 {} 之间，请调整后重试。", min, max)
            }
            Message::Config(detail) => return format!("客户端配置有误：{}", detail),
            Message::Unknown => "发生未知错误，请稍后重试。",
        };
        text.to_string()
    }

    fn en(&self) -> String {
        let text = match self {
            Message::Timeout => "The request timed out. Check your network and try again later.",
            Message::Network => {
                "The request could not reach the server. Check your connection and proxy settings."
            }
            Message::BadRequest => "The request was rejected as invalid. Check your input and try again.",
            Message::Unauthorized => "Authentication failed. Check that the Dify API key is correct.",
            Message::Forbidden => "Access to this workflow is forbidden. Check its permission settings.",
            Message::NotFound => "Endpoint not found. Check the proxy or workflow address.",
            Message::RateLimited => "Too many requests. Wait a moment or lower the call rate.",
            Message::ServerError => "The service hit an internal error. Try again later.",
            Message::UpstreamUnavailable => {
                "The upstream service is unavailable or timed out. Try again later, or switch the workflow to streaming or async mode."
            }
            Message::RequestFailed(status) => {
                return format!("Request failed (status {}). Try again later.", status)
            }
            Message::MissingContent(TaskKind::Outline) => {
                "No outline could be read from the workflow response. Try again later or check the workflow configuration."
            }
            Message::MissingContent(TaskKind::Content) => {
                "No paper text could be read from the workflow response. Check the workflow output format."
            }
            Message::MissingContent(TaskKind::TitleSuggestions) => {
                "No title suggestions could be read from the workflow response. Check the workflow output format."
            }
            Message::MissingInput(InputField::Title | InputField::SeedText) => {
                "Enter a paper title or topic."
            }
            Message::MissingInput(InputField::Outline) => {
                "Generate and confirm an outline first."
            }
            Message::WordCountOutOfRange { min, max } => {
                return format!("The word count must be between {} and {}.", min, max)
            }
            Message::Config(detail) => return format!("Client configuration error: {}", detail),
            Message::Unknown => "An unknown error occurred. Try again later.",
        };
        text.to_string()
    }
}

/// Source-language text shown for a task that produced nothing
pub(crate) fn missing_content_text(task: &TaskKind) -> String {
    Message::MissingContent(*task).render(Locale::ZhCn)
}

/// Format any error for display, using the default locale
pub fn format_error(error: &(dyn StdError + 'static)) -> String {
    format_error_with(error, Locale::default())
}

/// Format any error for display. Never fails: unrecognized errors fall back
/// to their own text, or to a generic message when they have none.
pub fn format_error_with(error: &(dyn StdError + 'static), locale: Locale) -> String {
    if let Some(err) = error.downcast_ref::<WorkflowError>() {
        return describe(err, locale);
    }
    if let Some(err) = error.downcast_ref::<reqwest::Error>() {
        return describe(&WorkflowError::from_transport(err), locale);
    }

    let text = error.to_string();
    if text.trim().is_empty() {
        Message::Unknown.render(locale)
    } else {
        text
    }
}

fn describe(error: &WorkflowError, locale: Locale) -> String {
    match error {
        WorkflowError::Timeout => Message::Timeout.render(locale),
        WorkflowError::Network(_) => Message::Network.render(locale),
        WorkflowError::Http { status, body } => match server_detail(body) {
            Some(detail) => detail.to_string(),
            None => status_message(*status).render(locale),
        },
        WorkflowError::MissingContent(task) => Message::MissingContent(*task).render(locale),
        WorkflowError::InvalidInput(InputError::Missing(field)) => {
            Message::MissingInput(*field).render(locale)
        }
        WorkflowError::InvalidInput(InputError::WordCountOutOfRange { min, max, .. }) => {
            Message::WordCountOutOfRange {
                min: *min,
                max: *max,
            }
            .render(locale)
        }
        WorkflowError::ConfigError(detail) => Message::Config(detail.clone()).render(locale),
    }
}

fn status_message(status: u16) -> Message {
    match status {
        400 => Message::BadRequest,
        401 => Message::Unauthorized,
        403 => Message::Forbidden,
        404 => Message::NotFound,
        429 => Message::RateLimited,
        500 => Message::ServerError,
        502..=504 => Message::UpstreamUnavailable,
        other => Message::RequestFailed(other),
    }
}

/// Detail text from an error body: the body itself when it is a string,
/// else its first string field among [`DETAIL_FIELDS`]
fn server_detail(body: &Value) -> Option<&str> {
    let detail = match body {
        Value::String(text) => Some(text.as_str()),
        Value::Object(fields) => DETAIL_FIELDS
            .iter()
            .find_map(|field| fields.get(*field).and_then(Value::as_str)),
        _ => None,
    };
    detail.filter(|text| !text.is_empty())
}
