//! Outbound summarization request and its multipart encoding.

use reqwest::multipart::{Form, Part};

use crate::workflow::{Attachment, SummaryLength};

use super::error::SummarizeError;

/// The one content field a request carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestContent {
    Text(String),
    Url(String),
    File(Attachment),
}

impl RequestContent {
    /// Name of the multipart field this content is sent under.
    pub fn field_name(&self) -> &'static str {
        match self {
            RequestContent::Text(_) => "text",
            RequestContent::Url(_) => "url",
            RequestContent::File(_) => "file",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizeRequest {
    pub content: RequestContent,
    pub summary_length: SummaryLength,
}

impl SummarizeRequest {
    /// Encode as `multipart/form-data`: `summary_length` plus exactly one of
    /// `text`, `url` or `file`.
    pub fn into_form(self) -> Result<Form, SummarizeError> {
        let form = Form::new().text("summary_length", self.summary_length.as_str());

        let form = match self.content {
            RequestContent::Text(text) => form.text("text", text),
            RequestContent::Url(url) => form.text("url", url),
            RequestContent::File(file) => {
                let file_name = file.file_name().to_string();
                let mime = file.mime_type();
                let part = Part::bytes(file.into_bytes())
                    .file_name(file_name)
                    .mime_str(mime)?;
                form.part("file", part)
            }
        };

        Ok(form)
    }

    /// Short description for logs; never includes the content itself.
    pub fn describe(&self) -> String {
        match &self.content {
            RequestContent::Text(text) => format!("text ({} chars)", text.chars().count()),
            RequestContent::Url(url) => format!("url {}", url),
            RequestContent::File(file) => {
                format!("file {} ({} bytes)", file.file_name(), file.len())
            }
        }
    }
}
