//! CLI interface
//!
//! This module wires the configuration pipeline to the process:
//! arguments in, report on stdout.

pub mod app;

// Re-export main types
pub use app::*;
