//! Submission workflow: pick a mode, fill in one input, choose a summary
//! length, submit, and read or copy the result.
//!
//! - `types.rs` - mode, summary length, attachment
//! - `input.rs` - payload tagged by mode
//! - `state.rs` - submission lifecycle and workflow state
//! - `intent.rs` - user/system actions
//! - `reducer.rs` - state transitions
//! - `controller.rs` - request spawning and settlement routing

mod controller;
mod input;
mod intent;
mod reducer;
mod state;
mod types;

pub use controller::{CopyError, SubmitOutcome, Workflow};
pub use input::InputPayload;
pub use intent::{Settlement, WorkflowIntent};
pub use reducer::WorkflowReducer;
pub use state::{
    FailureKind, SubmissionState, WorkflowState, FALLBACK_ERROR_MESSAGE,
    MALFORMED_RESPONSE_MESSAGE, VALIDATION_MESSAGE,
};
pub use types::{
    Attachment, AttachmentError, Mode, SummaryLength, UnknownSummaryLength, ACCEPTED_EXTENSIONS,
};
