//! Drives [`WorkflowState`] and owns the single outstanding request.
//!
//! The reducer decides every transition; this type performs the side
//! effects around it: spawning the request, routing its outcome back in
//! as [`WorkflowIntent::Settled`], and cancelling a request that has been
//! superseded by a tab switch or by dropping the workflow.

use std::sync::Arc;

use thiserror::Error;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::{AbortHandle, JoinHandle};

use crate::clipboard::{ClipboardError, ClipboardSink};
use crate::mvi::Reducer;
use crate::service::{SummarizeError, SummarizeService};

use super::intent::{Settlement, WorkflowIntent};
use super::reducer::WorkflowReducer;
use super::state::{SubmissionState, WorkflowState};
use super::types::{Attachment, Mode, SummaryLength};

/// What `submit` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Request issued; the workflow is now `InFlight` with this ticket.
    Started { ticket: u64 },
    /// Active input was empty; state is `Failed(Validation)`, nothing sent.
    Invalid,
    /// A request is already in flight; nothing changed.
    Busy,
}

#[derive(Debug, Error)]
pub enum CopyError {
    #[error("No summary to copy")]
    NoResult,

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

/// Outcome of one request, tagged with the ticket it was issued under.
#[derive(Debug)]
struct Delivery {
    ticket: u64,
    outcome: Settlement,
}

struct Pending {
    ticket: u64,
    call: AbortHandle,
    supervisor: JoinHandle<()>,
}

impl Pending {
    fn abort(self) {
        self.call.abort();
        self.supervisor.abort();
    }
}

pub struct Workflow {
    state: WorkflowState,
    service: Arc<dyn SummarizeService>,
    runtime: Handle,
    pending: Option<Pending>,
    settled_tx: mpsc::UnboundedSender<Delivery>,
    settled_rx: mpsc::UnboundedReceiver<Delivery>,
}

impl Workflow {
    /// Fresh workflow: Text mode, medium length, idle.
    ///
    /// Requests are spawned on `runtime`.
    pub fn new(service: Arc<dyn SummarizeService>, runtime: Handle) -> Self {
        let (settled_tx, settled_rx) = mpsc::unbounded_channel();
        Self {
            state: WorkflowState::default(),
            service,
            runtime,
            pending: None,
            settled_tx,
            settled_rx,
        }
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    pub fn submission(&self) -> &SubmissionState {
        self.state.submission()
    }

    fn dispatch(&mut self, intent: WorkflowIntent) {
        WorkflowReducer::apply(&mut self.state, intent);
    }

    /// Switch tabs, clearing every input and any result or error.
    ///
    /// An outstanding request is cancelled and its answer, should one
    /// still arrive, is dropped.
    pub fn select_mode(&mut self, mode: Mode) {
        if let Some(pending) = self.pending.take() {
            tracing::info!(ticket = pending.ticket, "Request superseded by mode switch");
            pending.abort();
        }
        tracing::debug!(?mode, "Mode selected");
        self.dispatch(WorkflowIntent::SelectMode(mode));
    }

    pub fn set_text(&mut self, value: impl Into<String>) {
        self.set_input(Mode::Text, WorkflowIntent::SetText(value.into()));
    }

    pub fn set_url(&mut self, value: impl Into<String>) {
        self.set_input(Mode::Url, WorkflowIntent::SetUrl(value.into()));
    }

    pub fn set_file(&mut self, file: Option<Attachment>) {
        if let Some(file) = &file {
            if !file.has_accepted_extension() {
                tracing::debug!(
                    file_name = file.file_name(),
                    "File type outside the suggested list; the service will decide"
                );
            }
        }
        self.set_input(Mode::File, WorkflowIntent::SetFile(file));
    }

    fn set_input(&mut self, target: Mode, intent: WorkflowIntent) {
        if self.state.mode() != target || self.state.is_busy() {
            tracing::debug!(
                ?target,
                active = ?self.state.mode(),
                busy = self.state.is_busy(),
                "Input ignored"
            );
            return;
        }
        self.dispatch(intent);
    }

    pub fn set_summary_length(&mut self, level: SummaryLength) {
        self.dispatch(WorkflowIntent::SetSummaryLength(level));
    }

    /// Clear the active input and any result or error. Ignored while a
    /// request is in flight.
    pub fn clear_all(&mut self) {
        self.dispatch(WorkflowIntent::ClearAll);
    }

    /// Validate and, if there is something to send, issue exactly one request.
    ///
    /// Must be called from the thread that owns the workflow; completion is
    /// picked up by [`poll_settlements`](Self::poll_settlements) or
    /// [`wait_settled`](Self::wait_settled).
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.state.is_busy() {
            tracing::debug!("Submit ignored: request already in flight");
            return SubmitOutcome::Busy;
        }

        let request = self.state.build_request();
        self.dispatch(WorkflowIntent::Submit);

        let (Some(request), Some(ticket)) = (request, self.state.submission().in_flight_ticket())
        else {
            tracing::info!("Submit rejected: no input for active mode");
            return SubmitOutcome::Invalid;
        };

        tracing::info!(
            ticket,
            content = %request.describe(),
            summary_length = %request.summary_length,
            "Submitting"
        );

        let service = Arc::clone(&self.service);
        let call = self
            .runtime
            .spawn(async move { service.summarize(request).await });
        let call_abort = call.abort_handle();

        // A panicking or cancelled call still has to settle the ticket.
        let tx = self.settled_tx.clone();
        let supervisor = self.runtime.spawn(async move {
            let outcome = match call.await {
                Ok(Ok(summary)) => Settlement::Summary(summary),
                Ok(Err(err)) => {
                    tracing::warn!(ticket, error = %err, "Summarization failed");
                    err.into_settlement()
                }
                Err(join_err) => {
                    tracing::warn!(ticket, error = %join_err, "Summarization task did not finish");
                    SummarizeError::TaskFailed(join_err.to_string()).into_settlement()
                }
            };
            // Receiver is gone once the workflow is dropped.
            let _ = tx.send(Delivery { ticket, outcome });
        });

        self.pending = Some(Pending {
            ticket,
            call: call_abort,
            supervisor,
        });
        SubmitOutcome::Started { ticket }
    }

    /// Apply any settled requests without waiting. Returns true if the
    /// submission state changed.
    pub fn poll_settlements(&mut self) -> bool {
        let mut changed = false;
        while let Ok(delivery) = self.settled_rx.try_recv() {
            changed |= self.apply_delivery(delivery);
        }
        changed
    }

    /// Wait until no request is in flight and return the final state.
    ///
    /// Returns immediately when idle or already settled.
    pub async fn wait_settled(&mut self) -> &SubmissionState {
        while self.state.is_busy() {
            match self.settled_rx.recv().await {
                Some(delivery) => {
                    self.apply_delivery(delivery);
                }
                // We hold a sender, so the channel cannot close under us.
                None => break,
            }
        }
        self.state.submission()
    }

    fn apply_delivery(&mut self, delivery: Delivery) -> bool {
        let Delivery { ticket, outcome } = delivery;
        if self.state.submission().in_flight_ticket() != Some(ticket) {
            tracing::debug!(ticket, "Discarding stale settlement");
            return false;
        }
        if self.pending.as_ref().map(|p| p.ticket) == Some(ticket) {
            self.pending = None;
        }
        self.dispatch(WorkflowIntent::Settled { ticket, outcome });
        tracing::debug!(ticket, state = ?self.state.submission(), "Request settled");
        true
    }

    /// Copy the summary to `sink`. Only available after a success; never
    /// changes state.
    pub fn copy_result(&self, sink: &mut dyn ClipboardSink) -> Result<(), CopyError> {
        let summary = self.state.submission().summary().ok_or(CopyError::NoResult)?;
        sink.set_text(summary)?;
        tracing::debug!(len = summary.len(), "Summary copied");
        Ok(())
    }
}

impl Drop for Workflow {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            tracing::debug!(ticket = pending.ticket, "Workflow dropped with request in flight");
            pending.abort();
        }
    }
}
