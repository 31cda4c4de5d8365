//! TOML configuration: service location, timeouts and UI tick rate.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, ServiceConfig, UiConfig};
