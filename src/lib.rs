//! Client for a remote text-summarization service.
//!
//! The [`workflow`] module holds the submission state machine; [`service`]
//! talks to the backend; [`ui`] and [`cli`] are the two front-ends.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod logging;
pub mod mvi;
pub mod service;
pub mod ui;
pub mod workflow;
