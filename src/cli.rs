//! Command-line interface.
//!
//! With one of `--text`, `--url` or `--file` the workflow runs once and the
//! summary is printed; otherwise the terminal UI starts.

use std::io::Read;
use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use thiserror::Error;

use crate::clipboard::ClipboardHandler;
use crate::config::{Config, ConfigError};
use crate::workflow::{
    Attachment, AttachmentError, CopyError, Mode, SubmissionState, SummaryLength, Workflow,
    FALLBACK_ERROR_MESSAGE,
};

#[derive(Debug, Parser)]
#[command(
    name = "summarist",
    version,
    about = "Summarize text, web pages and documents with a remote summarization service"
)]
#[command(group(ArgGroup::new("content").args(["text", "url", "file"]).multiple(false)))]
pub struct Cli {
    /// Text to summarize ("-" reads from stdin)
    #[arg(long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Web page to summarize
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Document to summarize (.txt, .docx, .doc, .pdf)
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Summary length
    #[arg(short, long, value_enum, default_value_t = SummaryLength::Medium)]
    pub length: SummaryLength,

    /// Full URL of the summarize endpoint (overrides config)
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Copy the summary to the clipboard as well as printing it
    #[arg(long)]
    pub copy: bool,
}

/// Content for a one-shot run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    Url(String),
    File(PathBuf),
}

impl Content {
    pub fn mode(&self) -> Mode {
        match self {
            Content::Text(_) => Mode::Text,
            Content::Url(_) => Mode::Url,
            Content::File(_) => Mode::File,
        }
    }
}

#[derive(Debug, Error)]
pub enum OneShotError {
    #[error("Failed to read text from stdin: {0}")]
    Stdin(#[source] std::io::Error),

    #[error(transparent)]
    Attachment(#[from] AttachmentError),

    /// The workflow ended in `Failed`; carries the message shown to users.
    #[error("{0}")]
    Failed(String),
}

impl Cli {
    /// True when a content flag was given.
    pub fn is_one_shot(&self) -> bool {
        self.text.is_some() || self.url.is_some() || self.file.is_some()
    }

    /// The content flag, with `--text -` resolved from stdin.
    pub fn content(&self) -> Result<Option<Content>, OneShotError> {
        if let Some(text) = &self.text {
            if text == "-" {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .map_err(OneShotError::Stdin)?;
                return Ok(Some(Content::Text(buf)));
            }
            return Ok(Some(Content::Text(text.clone())));
        }
        if let Some(url) = &self.url {
            return Ok(Some(Content::Url(url.clone())));
        }
        Ok(self.file.clone().map(Content::File))
    }

    /// Config from `--config` or the default path, with `--endpoint` applied.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        match &self.endpoint {
            Some(url) => config.with_endpoint_override(url),
            None => Ok(config),
        }
    }
}

/// Drive `workflow` through one submission and return the summary.
pub async fn run_once(
    workflow: &mut Workflow,
    content: Content,
    length: SummaryLength,
) -> Result<String, OneShotError> {
    workflow.select_mode(content.mode());
    workflow.set_summary_length(length);
    match content {
        Content::Text(text) => workflow.set_text(text),
        Content::Url(url) => workflow.set_url(url),
        Content::File(path) => workflow.set_file(Some(Attachment::from_path(&path)?)),
    }

    workflow.submit();
    match workflow.wait_settled().await {
        SubmissionState::Succeeded { summary } => Ok(summary.clone()),
        SubmissionState::Failed { message, .. } => Err(OneShotError::Failed(message.clone())),
        other => {
            tracing::error!(state = ?other, "Workflow did not settle");
            Err(OneShotError::Failed(FALLBACK_ERROR_MESSAGE.to_string()))
        }
    }
}

/// Copy the settled summary to the system clipboard, reporting but not
/// failing on clipboard problems.
pub fn copy_to_clipboard(workflow: &Workflow) {
    let result = ClipboardHandler::new()
        .map_err(CopyError::from)
        .and_then(|mut handler| workflow.copy_result(&mut handler));
    if let Err(e) = result {
        tracing::warn!(error = %e, "Copy to clipboard failed");
        eprintln!("Warning: {}", e);
    }
}
