//! Main CLI application

use crate::config::{load_config, Configuration};
use crate::error::DepvizError;
use colored::Colorize;
use log::info;
use std::env;
use std::io::{self, Write};

/// Header printed above the configuration listing
const HEADER: &str = "Configuration";

/// Message printed once the configuration has been accepted
const SUCCESS_MESSAGE: &str = "Configuration complete. Application is ready.";

/// CLI application
pub struct App {
    /// Accepted configuration
    config: Configuration,
}

impl App {
    /// Create an app from command-line tokens (without the program name)
    pub fn from_args<I, S>(args: I) -> Result<Self, DepvizError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let config = load_config(args)?;
        Ok(App { config })
    }

    /// The accepted configuration
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Report the configuration to the given output
    pub fn run<W: Write>(&self, out: &mut W) -> Result<(), DepvizError> {
        write_report(&self.config, out)?;
        Ok(())
    }
}

/// Write the header, one `key: value` line per field, and the success message
pub fn write_report<W: Write>(config: &Configuration, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", HEADER.bold())?;
    for (key, value) in config.entries() {
        writeln!(out, "{}: {}", key, value)?;
    }
    writeln!(out)?;
    writeln!(out, "{}", SUCCESS_MESSAGE.green())?;
    out.flush()
}

/// Run the CLI application with the process arguments
pub fn run() -> Result<(), DepvizError> {
    info!("depviz {} starting", crate::VERSION);

    let app = App::from_args(env::args().skip(1))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    app.run(&mut out)
}
