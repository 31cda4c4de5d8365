//! Intents for the form chrome.

use crate::mvi::Intent;

use super::state::Notice;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// A character typed into the file path field.
    TypePath(char),

    /// Text pasted into the file path field. Newlines are dropped.
    PastePath(String),

    BackspacePath,

    /// Empty the file path field (mode switch, clear, file attached).
    ClearPath,

    Notify(Notice),

    DismissNotice,

    /// Advance the spinner.
    AnimationTick,
}

impl Intent for FormIntent {}
