//! Intents accepted by the submission workflow.

use crate::mvi::Intent;

use super::state::FailureKind;
use super::types::{Attachment, Mode, SummaryLength};

/// Outcome of a settled request, already reduced to what the user sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    Summary(String),
    Failure { kind: FailureKind, message: String },
}

#[derive(Debug, Clone)]
pub enum WorkflowIntent {
    /// Switch tabs. Always clears every input and any result or error,
    /// even when `mode` is already active.
    SelectMode(Mode),

    SetText(String),
    SetUrl(String),
    /// `None` deselects the current file.
    SetFile(Option<Attachment>),

    SetSummaryLength(SummaryLength),

    /// Submit pressed: validate, then enter `InFlight` with a fresh ticket.
    Submit,

    /// The request identified by `ticket` finished.
    Settled { ticket: u64, outcome: Settlement },

    /// Clear the active input and any result or error.
    ClearAll,
}

impl Intent for WorkflowIntent {}
