//! Reducer for the form chrome.

use crate::mvi::Reducer;

use super::intent::FormIntent;
use super::state::FormState;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::TypePath(ch) => state.file_path.push(ch),
            FormIntent::PastePath(text) => state
                .file_path
                .extend(text.chars().filter(|c| *c != '\n' && *c != '\r')),
            FormIntent::BackspacePath => {
                state.file_path.pop();
            }
            FormIntent::ClearPath => state.file_path.clear(),
            FormIntent::Notify(notice) => state.notice = Some(notice),
            FormIntent::DismissNotice => state.notice = None,
            FormIntent::AnimationTick => {
                state.animation_tick = state.animation_tick.wrapping_add(1);
            }
        }
        state
    }
}
