//! Response bodies of the summarization service.

use serde::Deserialize;

use super::error::SummarizeError;

/// `{"summary": "..."}`
#[derive(Debug, Deserialize)]
struct SummaryBody {
    summary: String,
}

/// `{"error": "..."}`; the field is optional.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Extract `summary` from a success body.
///
/// A missing or non-string `summary` is an error, never an empty summary.
pub fn parse_summary(body: &str) -> Result<String, SummarizeError> {
    serde_json::from_str::<SummaryBody>(body)
        .map(|parsed| parsed.summary)
        .map_err(|e| SummarizeError::MalformedResponse(e.to_string()))
}

/// Extract a non-empty `error` from a failure body, if there is one.
pub fn parse_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .filter(|message| !message.is_empty())
}
