//! Model-View-Intent primitives shared by the submission workflow and the
//! terminal front-end.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Every change to the workflow (mode switch, keystroke, settled request)
//! is expressed as an intent and applied by a reducer. Side effects such as
//! the network call live outside the reducer and feed their outcome back in
//! as another intent.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
