//! Remote summarization service: contract, HTTP client and wire codec.

mod client;
mod error;
mod request;
mod response;

use async_trait::async_trait;

pub use client::HttpSummarizer;
pub use error::SummarizeError;
pub use request::{RequestContent, SummarizeRequest};
pub use response::{parse_error_message, parse_summary};

/// Something that turns one request into a summary.
///
/// [`HttpSummarizer`] is the production implementation; tests substitute
/// scripted fakes.
#[async_trait]
pub trait SummarizeService: Send + Sync {
    async fn summarize(&self, request: SummarizeRequest) -> Result<String, SummarizeError>;
}
