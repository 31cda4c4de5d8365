//! Workflow state: active input, length preference and submission lifecycle.

use crate::mvi::UiState;
use crate::service::{RequestContent, SummarizeRequest};

use super::input::InputPayload;
use super::types::{Mode, SummaryLength};

/// Shown when submit is pressed with nothing to summarize.
pub const VALIDATION_MESSAGE: &str = "please provide input";

/// Shown when the service fails without saying why.
pub const FALLBACK_ERROR_MESSAGE: &str = "an error occurred while summarizing";

/// Shown when the service answers 2xx but the body has no `summary`.
pub const MALFORMED_RESPONSE_MESSAGE: &str = "invalid response from summarization service";

/// Where a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Active input was empty; no request was sent.
    Validation,
    /// The service answered with a non-success status.
    Remote,
    /// The request never completed (connect error, timeout, aborted task).
    Transport,
    /// Success status with an unusable body.
    MalformedResponse,
}

/// Lifecycle of one summarization attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,

    /// A request is outstanding. `ticket` identifies it so a late answer
    /// for a superseded request can be recognised and dropped.
    InFlight { ticket: u64 },

    Succeeded { summary: String },

    Failed { kind: FailureKind, message: String },
}

impl SubmissionState {
    pub fn failed(kind: FailureKind, message: impl Into<String>) -> Self {
        SubmissionState::Failed {
            kind,
            message: message.into(),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight { .. })
    }

    pub fn in_flight_ticket(&self) -> Option<u64> {
        match self {
            Self::InFlight { ticket } => Some(*ticket),
            _ => None,
        }
    }

    pub fn summary(&self) -> Option<&str> {
        match self {
            Self::Succeeded { summary } => Some(summary),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Failed { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Succeeded or Failed.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Succeeded { .. } | Self::Failed { .. })
    }
}

/// Everything the submission form holds between mount and unmount.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkflowState {
    pub(super) input: InputPayload,
    pub(super) summary_length: SummaryLength,
    pub(super) submission: SubmissionState,
    /// Last ticket handed out; tickets start at 1.
    pub(super) last_ticket: u64,
}

impl UiState for WorkflowState {}

impl WorkflowState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.input.mode()
    }

    pub fn input(&self) -> &InputPayload {
        &self.input
    }

    pub fn summary_length(&self) -> SummaryLength {
        self.summary_length
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    pub fn is_busy(&self) -> bool {
        self.submission.is_in_flight()
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_busy() && !self.input.is_empty()
    }

    /// Build the outbound request from the active mode's payload only.
    ///
    /// Returns `None` when the active payload is empty.
    pub fn build_request(&self) -> Option<SummarizeRequest> {
        if self.input.is_empty() {
            return None;
        }

        let content = match &self.input {
            InputPayload::Text(text) => RequestContent::Text(text.clone()),
            InputPayload::Url(url) => RequestContent::Url(url.clone()),
            InputPayload::File(file) => RequestContent::File(file.clone()?),
        };

        Some(SummarizeRequest {
            content,
            summary_length: self.summary_length,
        })
    }
}
