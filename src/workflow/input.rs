//! Per-mode input payload.

use super::types::{Attachment, Mode};

/// The value the user has entered for the active mode.
///
/// The variant doubles as the active [`Mode`], so a value typed under one
/// tab can never be submitted from another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputPayload {
    Text(String),
    Url(String),
    File(Option<Attachment>),
}

impl Default for InputPayload {
    fn default() -> Self {
        InputPayload::empty(Mode::default())
    }
}

impl InputPayload {
    /// A blank payload for `mode`.
    pub fn empty(mode: Mode) -> Self {
        match mode {
            Mode::Text => InputPayload::Text(String::new()),
            Mode::Url => InputPayload::Url(String::new()),
            Mode::File => InputPayload::File(None),
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            InputPayload::Text(_) => Mode::Text,
            InputPayload::Url(_) => Mode::Url,
            InputPayload::File(_) => Mode::File,
        }
    }

    /// True when there is nothing worth sending: blank text, blank URL, or
    /// no file selected.
    pub fn is_empty(&self) -> bool {
        match self {
            InputPayload::Text(text) => text.trim().is_empty(),
            InputPayload::Url(url) => url.trim().is_empty(),
            InputPayload::File(file) => file.is_none(),
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            InputPayload::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            InputPayload::Url(url) => Some(url),
            _ => None,
        }
    }

    pub fn file(&self) -> Option<&Attachment> {
        match self {
            InputPayload::File(file) => file.as_ref(),
            _ => None,
        }
    }
}
