//! Core configuration types
//!
//! This module defines the record the command line is parsed into.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Default value of `--version`
pub const DEFAULT_VERSION: &str = "1.0";

/// Default value of `--max-depth`
pub const DEFAULT_MAX_DEPTH: u64 = 5;

/// Output format of the rendered dependency graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Indented tree drawn with ascii characters
    #[default]
    AsciiTree,
    /// JSON document
    Json,
    /// Graphviz dot
    Dot,
}

impl OutputFormat {
    /// Every accepted format, in the order they are listed to the user
    pub const ALL: [OutputFormat; 3] = [OutputFormat::AsciiTree, OutputFormat::Json, OutputFormat::Dot];

    /// The command-line literal for this format
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::AsciiTree => "ascii-tree",
            OutputFormat::Json => "json",
            OutputFormat::Dot => "dot",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| ConfigError::InvalidEnum(s.to_string()))
    }
}

/// Settings for one run of the tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// Name of the package to analyze
    pub package: String,

    /// Filesystem path or URL of the source repository
    pub repo: String,

    /// Whether the repository is a local test fixture
    pub test_mode: bool,

    /// Package version to analyze
    pub version: String,

    /// Output format of the graph
    pub output_format: OutputFormat,

    /// Maximum depth of the dependency graph
    pub max_depth: u64,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            package: String::new(),
            repo: String::new(),
            test_mode: false,
            version: DEFAULT_VERSION.to_string(),
            output_format: OutputFormat::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Configuration {
    /// Field names and rendered values, in display order
    pub fn entries(&self) -> [(&'static str, String); 6] {
        [
            ("package", self.package.clone()),
            ("repo", self.repo.clone()),
            ("test_mode", self.test_mode.to_string()),
            ("version", self.version.clone()),
            ("output_format", self.output_format.to_string()),
            ("max_depth", self.max_depth.to_string()),
        ]
    }
}
