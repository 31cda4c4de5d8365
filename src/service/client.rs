//! HTTP client for the summarization service.
//!
//! Sends one `multipart/form-data` POST per call and maps the reply onto
//! [`SummarizeError`]. There is no retry here; a new submit is the only
//! retry path.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::config::{ConfigError, ServiceConfig};

use super::error::SummarizeError;
use super::request::SummarizeRequest;
use super::response::{parse_error_message, parse_summary};
use super::SummarizeService;

pub struct HttpSummarizer {
    client: Client,
    endpoint: Url,
}

impl HttpSummarizer {
    /// Build a client for the endpoint and timeouts in `config`.
    pub fn from_config(config: &ServiceConfig) -> Result<Self, ConfigError> {
        let endpoint = config.endpoint_url()?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()
            .map_err(|e| ConfigError::ValidationError {
                message: format!("Failed to build HTTP client: {}", e),
            })?;
        Ok(Self { client, endpoint })
    }

    /// Client with default settings for an explicit endpoint.
    pub fn with_endpoint(endpoint: Url) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl SummarizeService for HttpSummarizer {
    async fn summarize(&self, request: SummarizeRequest) -> Result<String, SummarizeError> {
        let description = request.describe();
        let summary_length = request.summary_length;
        let form = request.into_form()?;

        tracing::debug!(
            url = %self.endpoint,
            content = %description,
            summary_length = %summary_length,
            "Sending summarization request"
        );

        let start = Instant::now();
        let response = self
            .client
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let latency_ms = start.elapsed().as_millis() as u64;

        if !status.is_success() {
            let message = parse_error_message(&body);
            tracing::warn!(
                status = %status,
                latency_ms,
                error = message.as_deref().unwrap_or("<none>"),
                "Summarization service returned an error"
            );
            return Err(SummarizeError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let summary = parse_summary(&body).inspect_err(|e| {
            tracing::error!(
                status = %status,
                latency_ms,
                error = %e,
                "Summarization response missing summary"
            );
        })?;

        tracing::info!(
            latency_ms,
            summary_len = summary.len(),
            "Summarization succeeded"
        );
        Ok(summary)
    }
}
