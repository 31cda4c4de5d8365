//! Interactive terminal front-end for the workflow.

mod app;
mod events;
mod footer;
mod form;
mod header;
mod input;
mod layout;
mod render;
mod runtime;
mod terminal_guard;
mod theme;

pub use runtime::run;
