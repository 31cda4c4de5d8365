//! Intent marker trait.

/// Marker trait for intent objects.
///
/// Intents are either user actions (typing, switching tabs, pressing
/// submit) or system events (a request settling). They carry no behavior
/// of their own; reducers interpret them.
pub trait Intent: Send + 'static {}
