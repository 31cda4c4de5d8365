//! State marker trait.

/// Marker trait for state objects driven by a [`Reducer`](super::Reducer).
///
/// `Default` is the freshly mounted state; `PartialEq` lets the view skip
/// redraws and lets tests compare whole states.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
