//! Reducer for the submission workflow.

use crate::mvi::Reducer;

use super::input::InputPayload;
use super::intent::{Settlement, WorkflowIntent};
use super::state::{FailureKind, SubmissionState, WorkflowState, VALIDATION_MESSAGE};

pub struct WorkflowReducer;

impl Reducer for WorkflowReducer {
    type State = WorkflowState;
    type Intent = WorkflowIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Allowed mid-flight: the outstanding request is superseded and
            // its ticket will no longer match.
            WorkflowIntent::SelectMode(mode) => WorkflowState {
                input: InputPayload::empty(mode),
                submission: SubmissionState::Idle,
                ..state
            },

            WorkflowIntent::SetText(value) => match state.input {
                InputPayload::Text(_) if !state.is_busy() => WorkflowState {
                    input: InputPayload::Text(value),
                    ..state
                },
                _ => state,
            },

            WorkflowIntent::SetUrl(value) => match state.input {
                InputPayload::Url(_) if !state.is_busy() => WorkflowState {
                    input: InputPayload::Url(value),
                    ..state
                },
                _ => state,
            },

            WorkflowIntent::SetFile(file) => match state.input {
                InputPayload::File(_) if !state.is_busy() => WorkflowState {
                    input: InputPayload::File(file),
                    ..state
                },
                _ => state,
            },

            WorkflowIntent::SetSummaryLength(summary_length) if !state.is_busy() => {
                WorkflowState {
                    summary_length,
                    ..state
                }
            }
            WorkflowIntent::SetSummaryLength(_) => state,

            WorkflowIntent::Submit => {
                if state.is_busy() {
                    state
                } else if state.input.is_empty() {
                    WorkflowState {
                        submission: SubmissionState::failed(
                            FailureKind::Validation,
                            VALIDATION_MESSAGE,
                        ),
                        ..state
                    }
                } else {
                    let ticket = state.last_ticket + 1;
                    WorkflowState {
                        submission: SubmissionState::InFlight { ticket },
                        last_ticket: ticket,
                        ..state
                    }
                }
            }

            WorkflowIntent::Settled { ticket, outcome } => {
                if state.submission.in_flight_ticket() != Some(ticket) {
                    return state;
                }
                let submission = match outcome {
                    Settlement::Summary(summary) => SubmissionState::Succeeded { summary },
                    Settlement::Failure { kind, message } => {
                        SubmissionState::Failed { kind, message }
                    }
                };
                WorkflowState {
                    submission,
                    ..state
                }
            }

            WorkflowIntent::ClearAll => {
                if state.is_busy() {
                    return state;
                }
                WorkflowState {
                    input: InputPayload::empty(state.mode()),
                    submission: SubmissionState::Idle,
                    ..state
                }
            }
        }
    }
}
