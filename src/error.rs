//! Error types for depviz

use std::io;
use thiserror::Error;

/// Result type alias for depviz operations
pub type Result<T> = std::result::Result<T, DepvizError>;

/// Main error type for depviz
#[derive(Error, Debug)]
pub enum DepvizError {
    /// Command-line parsing and validation errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// I/O errors while writing the report
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Command-line parsing and configuration validation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Option {0} requires a value.")]
    MissingValue(&'static str),

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Unsupported output format '{0}'. Accepted values: ascii-tree, json, dot.")]
    InvalidEnum(String),

    #[error("Invalid value for --max-depth: expected an integer.")]
    InvalidInteger,

    #[error("Maximum depth cannot be negative.")]
    NegativeDepth,

    #[error("{0} is required.")]
    RequiredFieldMissing(&'static str),

    #[error("repo must be a local path in test mode, not a URL.")]
    InvalidModeRepoCombination,
}

/// Specialized result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
