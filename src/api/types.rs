use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::Value;

pub const UPLOAD_FIELD: &str = "pdfFile";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AskResponse {
    #[serde(default, deserialize_with = "deserialize_answer")]
    pub answer: Option<String>,
    #[serde(default)]
    pub source: Option<AnswerSource>,
}

/// Where the service says an answer came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerSource {
    /// Previously answered question served from the service's cache.
    Db,
    Llm,
    #[serde(other)]
    Unknown,
}

/// Accepts a string answer and reads `null`, `false` and `0` as no answer.
/// Any other non-string value is rejected.
fn deserialize_answer<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(answer) => Ok(Some(answer)),
        Value::Null | Value::Bool(false) => Ok(None),
        Value::Number(n) if n.as_f64() == Some(0.0) => Ok(None),
        other => Err(de::Error::custom(format!(
            "expected a string answer, got {}",
            other
        ))),
    }
}

impl AskResponse {
    pub const FALLBACK_ANSWER: &'static str = "No response.";

    /// The answer text, or the fallback when it is absent or empty.
    pub fn answer_or_fallback(&self) -> &str {
        match self.answer.as_deref() {
            Some(answer) if !answer.is_empty() => answer,
            _ => Self::FALLBACK_ANSWER,
        }
    }
}
