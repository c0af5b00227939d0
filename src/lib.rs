//! Depviz - dependency graph visualization tool
//!
//! This crate is the configuration front-end of the tool: it turns command-line
//! tokens into a validated [`config::Configuration`] that the graph builder and
//! renderers will consume.

// Public modules
pub mod cli;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::{load_config, Configuration, OutputFormat};
pub use error::{ConfigError, DepvizError, Result};

/// Current version of depviz
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
