//! State of the form chrome that is not part of the workflow itself.

use crate::mvi::UiState;

/// One-line message under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Warning(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Info(text) | Notice::Warning(text) | Notice::Error(text) => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    /// Path typed into the file selector, before it is attached.
    pub file_path: String,
    pub notice: Option<Notice>,
    /// Spinner frame while a request is in flight.
    pub animation_tick: u8,
}

impl UiState for FormState {}
