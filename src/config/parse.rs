//! Command-line token parsing
//!
//! Options are looked up in a static table; the token loop only moves the
//! cursor and hands values to the matching option's action.

use crate::config::schema::validate_config;
use crate::config::types::{Configuration, OutputFormat};
use crate::error::{ConfigError, ConfigResult};
use log::{debug, info};

/// What a recognized option does with the token stream
#[derive(Clone, Copy)]
enum Action {
    /// Takes no value
    Flag(fn(&mut Configuration)),

    /// Takes exactly one value, already trimmed
    Value(fn(&mut Configuration, &str) -> ConfigResult<()>),
}

/// A recognized command-line option
struct OptionSpec {
    long: &'static str,
    short: &'static str,
    action: Action,
}

impl OptionSpec {
    fn matches(&self, token: &str) -> bool {
        token == self.long || token == self.short
    }
}

/// Every option the tool accepts
const OPTIONS: &[OptionSpec] = &[
    OptionSpec {
        long: "--package",
        short: "-p",
        action: Action::Value(set_package),
    },
    OptionSpec {
        long: "--repo",
        short: "-r",
        action: Action::Value(set_repo),
    },
    OptionSpec {
        long: "--test-mode",
        short: "-t",
        action: Action::Flag(set_test_mode),
    },
    OptionSpec {
        long: "--version",
        short: "-v",
        action: Action::Value(set_version),
    },
    OptionSpec {
        long: "--output-format",
        short: "-o",
        action: Action::Value(set_output_format),
    },
    OptionSpec {
        long: "--max-depth",
        short: "-d",
        action: Action::Value(set_max_depth),
    },
];

fn set_package(config: &mut Configuration, value: &str) -> ConfigResult<()> {
    config.package = value.to_string();
    Ok(())
}

fn set_repo(config: &mut Configuration, value: &str) -> ConfigResult<()> {
    config.repo = value.to_string();
    Ok(())
}

fn set_test_mode(config: &mut Configuration) {
    config.test_mode = true;
}

fn set_version(config: &mut Configuration, value: &str) -> ConfigResult<()> {
    config.version = value.to_string();
    Ok(())
}

fn set_output_format(config: &mut Configuration, value: &str) -> ConfigResult<()> {
    config.output_format = value.parse::<OutputFormat>()?;
    Ok(())
}

fn set_max_depth(config: &mut Configuration, value: &str) -> ConfigResult<()> {
    config.max_depth = parse_max_depth(value)?;
    Ok(())
}

/// Parse a `--max-depth` value as a non-negative base-10 integer
///
/// Any negative integer is rejected as negative, however large. Values above
/// `u64::MAX` are not accepted as integers.
pub fn parse_max_depth(value: &str) -> ConfigResult<u64> {
    let (negative, digits) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConfigError::InvalidInteger);
    }

    if negative && digits.bytes().any(|b| b != b'0') {
        return Err(ConfigError::NegativeDepth);
    }

    digits.parse().map_err(|_| ConfigError::InvalidInteger)
}

fn find_option(token: &str) -> Option<&'static OptionSpec> {
    OPTIONS.iter().find(|spec| spec.matches(token))
}

/// Parse command-line tokens (without the program name) into a configuration
///
/// Unset options keep their defaults. Repeated options overwrite earlier ones.
pub fn parse_args<I, S>(args: I) -> ConfigResult<Configuration>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut config = Configuration::default();
    let mut tokens = args.into_iter();

    while let Some(token) = tokens.next() {
        let token = token.as_ref();
        let spec =
            find_option(token).ok_or_else(|| ConfigError::UnknownOption(token.to_string()))?;

        match spec.action {
            Action::Flag(apply) => {
                debug!("{} set", spec.long);
                apply(&mut config);
            }
            Action::Value(apply) => {
                let raw = tokens.next().ok_or(ConfigError::MissingValue(spec.long))?;
                let value = raw.as_ref().trim();
                debug!("{} = {:?}", spec.long, value);
                apply(&mut config, value)?;
            }
        }
    }

    Ok(config)
}

/// Parse and validate command-line tokens in one step
pub fn load_config<I, S>(args: I) -> ConfigResult<Configuration>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let config = parse_args(args)?;
    info!("Parsed command line, validating configuration");

    validate_config(&config)?;
    info!("Configuration accepted");

    Ok(config)
}
