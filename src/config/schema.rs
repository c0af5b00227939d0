//! Configuration validation
//!
//! Rules that span several fields, or that concern options which may never
//! have been given, are checked here after parsing.

use crate::config::types::Configuration;
use crate::error::{ConfigError, ConfigResult};

/// URL schemes that mark a repository as remote
const URL_PREFIXES: &[&str] = &["http://", "https://"];

/// Check whether a repository reference is a URL rather than a local path
pub fn is_url(repo: &str) -> bool {
    URL_PREFIXES.iter().any(|prefix| repo.starts_with(prefix))
}

/// Validate a parsed configuration
///
/// Rules are checked in order and the first violation is returned.
pub fn validate_config(config: &Configuration) -> ConfigResult<()> {
    if config.package.trim().is_empty() {
        return Err(ConfigError::RequiredFieldMissing("package"));
    }

    if config.repo.trim().is_empty() {
        return Err(ConfigError::RequiredFieldMissing("repo"));
    }

    if config.test_mode && is_url(&config.repo) {
        return Err(ConfigError::InvalidModeRepoCombination);
    }

    Ok(())
}
