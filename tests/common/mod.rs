//! Shared test utilities and fakes.

#![allow(dead_code, unused_imports)]

pub mod mock_service;

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use summarist::service::{SummarizeError, SummarizeRequest, SummarizeService};
use summarist::workflow::Workflow;
use tempfile::TempDir;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Write `content` to a `config.toml` in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// A transport-level reqwest error, as produced by an unreachable service.
pub fn transport_error() -> SummarizeError {
    let err = reqwest::Client::new()
        .get("not a url")
        .build()
        .expect_err("invalid URL must fail to build");
    SummarizeError::Http(err)
}

// -- Scripted service ---------------------------------------------------------

/// One canned answer for [`ScriptedService`].
pub enum Reply {
    Summary(String),
    Api { status: u16, message: Option<String> },
    Malformed,
    Transport,
    Panic,
    /// Answer with a summary after a delay.
    Delayed(String, Duration),
    /// Never answer.
    Hang,
}

impl Reply {
    pub fn summary(text: &str) -> Self {
        Reply::Summary(text.to_string())
    }

    pub fn api(status: u16, message: &str) -> Self {
        Reply::Api {
            status,
            message: Some(message.to_string()),
        }
    }
}

/// In-process service that pops replies in order and records every call.
#[derive(Default)]
pub struct ScriptedService {
    replies: Mutex<VecDeque<Reply>>,
    calls: Mutex<Vec<SummarizeRequest>>,
}

impl ScriptedService {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<SummarizeRequest> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl SummarizeService for ScriptedService {
    async fn summarize(&self, request: SummarizeRequest) -> Result<String, SummarizeError> {
        self.calls.lock().push(request);
        let reply = self.replies.lock().pop_front().unwrap_or(Reply::Hang);
        match reply {
            Reply::Summary(summary) => Ok(summary),
            Reply::Api { status, message } => Err(SummarizeError::Api { status, message }),
            Reply::Malformed => Err(SummarizeError::MalformedResponse(
                "missing field `summary`".to_string(),
            )),
            Reply::Transport => Err(transport_error()),
            Reply::Panic => panic!("scripted panic"),
            Reply::Delayed(summary, delay) => {
                tokio::time::sleep(delay).await;
                Ok(summary)
            }
            Reply::Hang => std::future::pending().await,
        }
    }
}

/// Workflow on the current runtime backed by `service`.
pub fn workflow_with(service: &Arc<ScriptedService>) -> Workflow {
    Workflow::new(service.clone(), tokio::runtime::Handle::current())
}
