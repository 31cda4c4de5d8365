//! Errors from talking to the summarization service.

use thiserror::Error;

use crate::workflow::{
    FailureKind, Settlement, FALLBACK_ERROR_MESSAGE, MALFORMED_RESPONSE_MESSAGE,
};

#[derive(Debug, Error)]
pub enum SummarizeError {
    /// Request could not be built, sent, or its body read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status. `message` is the body's `error` field when it
    /// had a non-empty one.
    #[error("Summarization service returned {status}: {}", message.as_deref().unwrap_or("<no error message>"))]
    Api { status: u16, message: Option<String> },

    /// Success status but no usable `summary`.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The task driving the request panicked or was cancelled.
    #[error("Request task failed: {0}")]
    TaskFailed(String),
}

impl SummarizeError {
    pub fn kind(&self) -> FailureKind {
        match self {
            SummarizeError::Http(_) | SummarizeError::TaskFailed(_) => FailureKind::Transport,
            SummarizeError::Api { .. } => FailureKind::Remote,
            SummarizeError::MalformedResponse(_) => FailureKind::MalformedResponse,
        }
    }

    /// Message for display. Transport details stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            SummarizeError::Api {
                message: Some(message),
                ..
            } => message.clone(),
            SummarizeError::MalformedResponse(_) => MALFORMED_RESPONSE_MESSAGE.to_string(),
            _ => FALLBACK_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn into_settlement(self) -> Settlement {
        Settlement::Failure {
            kind: self.kind(),
            message: self.user_message(),
        }
    }
}
