//! Form chrome around the workflow: file path field, notices, spinner.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - form state
//! - `intent.rs` - user/system actions
//! - `reducer.rs` - state transitions

mod intent;
mod reducer;
mod state;

pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{FormState, Notice};
