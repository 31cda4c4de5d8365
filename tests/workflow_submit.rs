//! Controller tests: `Workflow` against a scripted in-process service.

mod common;

use common::{workflow_with, Reply, ScriptedService};
use std::time::Duration;
use summarist::clipboard::{ClipboardError, ClipboardSink};
use summarist::service::RequestContent;
use summarist::workflow::{
    Attachment, CopyError, FailureKind, Mode, SubmissionState, SubmitOutcome, SummaryLength,
    FALLBACK_ERROR_MESSAGE, MALFORMED_RESPONSE_MESSAGE, VALIDATION_MESSAGE,
};

#[derive(Default)]
struct RecordingSink {
    copied: Vec<String>,
    fail: bool,
}

impl ClipboardSink for RecordingSink {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Write("denied".into()));
        }
        self.copied.push(text.to_string());
        Ok(())
    }
}

#[tokio::test]
async fn empty_input_fails_without_calling_service() {
    let service = ScriptedService::new([]);
    let mut workflow = workflow_with(&service);
    workflow.select_mode(Mode::Url);

    assert_eq!(workflow.submit(), SubmitOutcome::Invalid);
    assert_eq!(
        workflow.wait_settled().await.error_message(),
        Some(VALIDATION_MESSAGE)
    );
    assert_eq!(service.call_count(), 0);
}

#[tokio::test]
async fn whitespace_text_counts_as_empty() {
    let service = ScriptedService::new([]);
    let mut workflow = workflow_with(&service);
    workflow.set_text("  \n\t");

    assert_eq!(workflow.submit(), SubmitOutcome::Invalid);
    assert_eq!(service.call_count(), 0);
}

#[tokio::test]
async fn text_submission_succeeds() {
    let service = ScriptedService::new([Reply::summary("Chào.")]);
    let mut workflow = workflow_with(&service);
    workflow.set_text("Xin chào");
    workflow.set_summary_length(SummaryLength::Short);

    assert_eq!(workflow.submit(), SubmitOutcome::Started { ticket: 1 });
    assert!(workflow.submission().is_in_flight());
    assert_eq!(
        workflow.wait_settled().await,
        &SubmissionState::Succeeded {
            summary: "Chào.".into()
        }
    );

    let calls = service.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].content, RequestContent::Text("Xin chào".into()));
    assert_eq!(calls[0].summary_length, SummaryLength::Short);
}

#[tokio::test]
async fn remote_error_message_is_shown() {
    let service = ScriptedService::new([Reply::api(400, "unsupported format")]);
    let mut workflow = workflow_with(&service);
    workflow.select_mode(Mode::File);
    workflow.set_file(Some(Attachment::new("report.pdf", b"%PDF-1.4".to_vec())));

    workflow.submit();
    let state = workflow.wait_settled().await;
    assert_eq!(state.error_message(), Some("unsupported format"));
    assert_eq!(state.failure_kind(), Some(FailureKind::Remote));
}

#[tokio::test]
async fn transport_error_uses_fallback_message() {
    let service = ScriptedService::new([Reply::Transport]);
    let mut workflow = workflow_with(&service);
    workflow.set_text("hello");

    workflow.submit();
    let state = workflow.wait_settled().await;
    assert_eq!(state.error_message(), Some(FALLBACK_ERROR_MESSAGE));
    assert_eq!(state.failure_kind(), Some(FailureKind::Transport));
}

#[tokio::test]
async fn malformed_response_fails() {
    let service = ScriptedService::new([Reply::Malformed]);
    let mut workflow = workflow_with(&service);
    workflow.set_text("hello");

    workflow.submit();
    assert_eq!(
        workflow.wait_settled().await.error_message(),
        Some(MALFORMED_RESPONSE_MESSAGE)
    );
}

#[tokio::test]
async fn panicking_service_still_settles() {
    let service = ScriptedService::new([Reply::Panic]);
    let mut workflow = workflow_with(&service);
    workflow.set_text("hello");

    workflow.submit();
    let state = workflow.wait_settled().await;
    assert_eq!(state.failure_kind(), Some(FailureKind::Transport));
    assert_eq!(state.error_message(), Some(FALLBACK_ERROR_MESSAGE));
}

#[tokio::test]
async fn submit_while_in_flight_is_rejected() {
    let service = ScriptedService::new([Reply::Delayed(
        "once".into(),
        Duration::from_millis(50),
    )]);
    let mut workflow = workflow_with(&service);
    workflow.set_text("hello");

    assert_eq!(workflow.submit(), SubmitOutcome::Started { ticket: 1 });
    assert_eq!(workflow.submit(), SubmitOutcome::Busy);
    assert_eq!(
        workflow.wait_settled().await.summary(),
        Some("once")
    );
    assert_eq!(service.call_count(), 1);
}

#[tokio::test]
async fn inputs_are_ignored_while_in_flight() {
    let service = ScriptedService::new([Reply::Delayed("s".into(), Duration::from_millis(30))]);
    let mut workflow = workflow_with(&service);
    workflow.set_text("hello");
    workflow.submit();

    workflow.set_text("changed");
    workflow.set_summary_length(SummaryLength::Long);
    workflow.clear_all();

    assert!(workflow.submission().is_in_flight());
    assert_eq!(workflow.state().input().text(), Some("hello"));
    assert_eq!(workflow.state().summary_length(), SummaryLength::Medium);
    workflow.wait_settled().await;
}

#[tokio::test]
async fn mode_switch_discards_outstanding_request() {
    let service = ScriptedService::new([Reply::Delayed(
        "late".into(),
        Duration::from_millis(30),
    )]);
    let mut workflow = workflow_with(&service);
    workflow.set_text("hello");
    workflow.submit();

    workflow.select_mode(Mode::Url);
    assert_eq!(workflow.submission(), &SubmissionState::Idle);

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(!workflow.poll_settlements());
    assert_eq!(workflow.submission(), &SubmissionState::Idle);
    assert_eq!(workflow.mode(), Mode::Url);
}

#[tokio::test]
async fn new_request_after_mode_switch_is_applied() {
    let service = ScriptedService::new([Reply::Hang, Reply::summary("fresh")]);
    let mut workflow = workflow_with(&service);
    workflow.set_text("first");
    workflow.submit();

    workflow.select_mode(Mode::Url);
    workflow.set_url("https://example.com/article");
    assert_eq!(workflow.submit(), SubmitOutcome::Started { ticket: 2 });
    assert_eq!(workflow.wait_settled().await.summary(), Some("fresh"));
}

#[tokio::test]
async fn poll_settlements_reports_changes() {
    let service = ScriptedService::new([Reply::summary("ok")]);
    let mut workflow = workflow_with(&service);
    workflow.set_text("hello");
    workflow.submit();

    let mut changed = false;
    for _ in 0..100 {
        if workflow.poll_settlements() {
            changed = true;
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert!(changed);
    assert_eq!(workflow.submission().summary(), Some("ok"));
    assert!(!workflow.poll_settlements());
}

#[tokio::test]
async fn dropping_workflow_mid_flight_is_quiet() {
    let service = ScriptedService::new([Reply::Delayed("x".into(), Duration::from_millis(20))]);
    let mut workflow = workflow_with(&service);
    workflow.set_text("hello");
    workflow.submit();
    drop(workflow);

    tokio::time::sleep(Duration::from_millis(60)).await;
    assert_eq!(service.call_count(), 1);
}

#[tokio::test]
async fn clear_all_after_success() {
    let service = ScriptedService::new([Reply::summary("done")]);
    let mut workflow = workflow_with(&service);
    workflow.set_summary_length(SummaryLength::Long);
    workflow.set_text("hello");
    workflow.submit();
    workflow.wait_settled().await;

    workflow.clear_all();
    assert_eq!(workflow.submission(), &SubmissionState::Idle);
    assert_eq!(workflow.state().input().text(), Some(""));
    assert_eq!(workflow.mode(), Mode::Text);
    assert_eq!(workflow.state().summary_length(), SummaryLength::Long);
}

#[tokio::test]
async fn copy_requires_success() {
    let service = ScriptedService::new([Reply::api(500, "boom")]);
    let mut workflow = workflow_with(&service);
    let mut sink = RecordingSink::default();

    assert!(matches!(
        workflow.copy_result(&mut sink),
        Err(CopyError::NoResult)
    ));

    workflow.set_text("hello");
    workflow.submit();
    workflow.wait_settled().await;
    assert!(matches!(
        workflow.copy_result(&mut sink),
        Err(CopyError::NoResult)
    ));
    assert!(sink.copied.is_empty());
}

#[tokio::test]
async fn copy_delivers_summary_without_changing_state() {
    let service = ScriptedService::new([Reply::summary("Chào.")]);
    let mut workflow = workflow_with(&service);
    workflow.set_text("Xin chào");
    workflow.submit();
    workflow.wait_settled().await;

    let mut sink = RecordingSink::default();
    workflow.copy_result(&mut sink).unwrap();
    assert_eq!(sink.copied, vec!["Chào.".to_string()]);
    assert_eq!(workflow.submission().summary(), Some("Chào."));

    let mut failing = RecordingSink {
        fail: true,
        ..RecordingSink::default()
    };
    assert!(matches!(
        workflow.copy_result(&mut failing),
        Err(CopyError::Clipboard(_))
    ));
}
