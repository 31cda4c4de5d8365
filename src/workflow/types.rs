//! Value types of the submission workflow.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File extensions offered as a hint in the file selector.
///
/// The remote service decides what it accepts; nothing here rejects a file.
pub const ACCEPTED_EXTENSIONS: &[&str] = &[".txt", ".docx", ".doc", ".pdf"];

/// Active input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Text,
    Url,
    File,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Text, Mode::Url, Mode::File];

    /// Tab label shown in the UI.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Text => "Text",
            Mode::Url => "Website",
            Mode::File => "File",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Mode::Text => 0,
            Mode::Url => 1,
            Mode::File => 2,
        }
    }

    pub fn next(self) -> Mode {
        Mode::ALL[(self.index() + 1) % Mode::ALL.len()]
    }

    pub fn previous(self) -> Mode {
        Mode::ALL[(self.index() + Mode::ALL.len() - 1) % Mode::ALL.len()]
    }
}

/// Requested summary verbosity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl SummaryLength {
    /// Value sent in the `summary_length` form field.
    pub fn as_str(self) -> &'static str {
        match self {
            SummaryLength::Short => "short",
            SummaryLength::Medium => "medium",
            SummaryLength::Long => "long",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SummaryLength::Short => "Short",
            SummaryLength::Medium => "Medium",
            SummaryLength::Long => "Detailed",
        }
    }

    /// Cycle order used by the selector: short → medium → long → short.
    pub fn next(self) -> SummaryLength {
        match self {
            SummaryLength::Short => SummaryLength::Medium,
            SummaryLength::Medium => SummaryLength::Long,
            SummaryLength::Long => SummaryLength::Short,
        }
    }
}

impl fmt::Display for SummaryLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown summary length '{0}' (expected short, medium or long)")]
pub struct UnknownSummaryLength(pub String);

impl FromStr for SummaryLength {
    type Err = UnknownSummaryLength;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short" => Ok(SummaryLength::Short),
            "medium" => Ok(SummaryLength::Medium),
            "long" => Ok(SummaryLength::Long),
            _ => Err(UnknownSummaryLength(s.to_string())),
        }
    }
}

/// Errors raised while reading a file into an [`Attachment`].
#[derive(Debug, Error)]
pub enum AttachmentError {
    #[error("Failed to read file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{path}' has no file name")]
    NoFileName { path: PathBuf },
}

/// A selected file: original name plus raw contents.
#[derive(Clone, PartialEq, Eq)]
pub struct Attachment {
    file_name: String,
    bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Read a file from disk, keeping only its final path component as the name.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, AttachmentError> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| AttachmentError::NoFileName {
                path: path.to_path_buf(),
            })?;
        let bytes = std::fs::read(path).map_err(|source| AttachmentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { file_name, bytes })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Content type for the upload, guessed from the extension.
    pub fn mime_type(&self) -> &'static str {
        let lower = self.file_name.to_ascii_lowercase();
        match lower.rsplit_once('.').map(|(_, ext)| ext) {
            Some("txt") => "text/plain",
            Some("pdf") => "application/pdf",
            Some("doc") => "application/msword",
            Some("docx") => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            _ => "application/octet-stream",
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whether the name ends in one of [`ACCEPTED_EXTENSIONS`] (case-insensitive).
    pub fn has_accepted_extension(&self) -> bool {
        let lower = self.file_name.to_ascii_lowercase();
        ACCEPTED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
    }
}

// Contents can be megabytes; keep Debug output readable.
impl fmt::Debug for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attachment")
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_cycles_in_tab_order() {
        assert_eq!(Mode::Text.next(), Mode::Url);
        assert_eq!(Mode::File.next(), Mode::Text);
        assert_eq!(Mode::Text.previous(), Mode::File);
        assert_eq!(Mode::Url.previous(), Mode::Text);
    }

    #[test]
    fn summary_length_defaults_to_medium() {
        assert_eq!(SummaryLength::default(), SummaryLength::Medium);
    }

    #[test]
    fn summary_length_parses_wire_values() {
        assert_eq!("short".parse(), Ok(SummaryLength::Short));
        assert_eq!(" LONG ".parse(), Ok(SummaryLength::Long));
        assert!("tiny".parse::<SummaryLength>().is_err());
    }

    #[test]
    fn accepted_extension_is_a_hint_only() {
        assert!(Attachment::new("report.PDF", vec![1]).has_accepted_extension());
        assert!(Attachment::new("notes.txt", vec![]).has_accepted_extension());
        assert!(!Attachment::new("photo.png", vec![1]).has_accepted_extension());
    }

    #[test]
    fn mime_type_follows_extension() {
        assert_eq!(Attachment::new("a.PDF", vec![]).mime_type(), "application/pdf");
        assert_eq!(Attachment::new("notes.txt", vec![]).mime_type(), "text/plain");
        assert_eq!(
            Attachment::new("archive", vec![]).mime_type(),
            "application/octet-stream"
        );
    }

    #[test]
    fn from_path_keeps_only_file_name() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("article.txt");
        std::fs::write(&path, "xin chào").unwrap();

        let attachment = Attachment::from_path(&path).unwrap();
        assert_eq!(attachment.file_name(), "article.txt");
        assert_eq!(attachment.bytes(), "xin chào".as_bytes());
    }

    #[test]
    fn from_path_reports_missing_file() {
        let err = Attachment::from_path("/definitely/not/here.pdf").unwrap_err();
        assert!(matches!(err, AttachmentError::Read { .. }));
    }
}
