//! Line-oriented interactive driver
//!
//! Reads one command per line, hands it to the [`Driver`] of the chosen
//! structure and prints the outcome. Command errors are printed and the
//! session continues; only I/O failures end it early. At end of input the
//! final state of the structure is printed.

use crate::config::Config;
use std::io::{BufRead, Write};
use tracing::{debug, info};

pub mod command;
pub mod driver;
pub mod error;

pub use command::Command;
pub use driver::{Driver, ListDriver, QueueDriver, StackDriver, TableDriver, TrieDriver};
pub use error::{ShellError, ShellResult};

/// Structures the driver can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Structure {
    Table,
    List,
    Stack,
    Queue,
    Trie,
}

impl Structure {
    /// Fresh driver for this structure
    pub fn driver(self, config: &Config) -> ShellResult<Box<dyn Driver>> {
        let driver: Box<dyn Driver> = match self {
            Structure::Table => Box::new(TableDriver::new(config)?),
            Structure::List => Box::new(ListDriver::default()),
            Structure::Stack => Box::new(StackDriver::default()),
            Structure::Queue => Box::new(QueueDriver::default()),
            Structure::Trie => Box::new(TrieDriver::new(config)),
        };
        Ok(driver)
    }
}

/// Run a session until `quit` or end of input.
///
/// With `interactive` set a prompt is written before every line.
pub fn run(
    driver: &mut dyn Driver,
    input: impl BufRead,
    out: &mut dyn Write,
    interactive: bool,
) -> ShellResult<()> {
    info!(structure = driver.name(), "session started");

    let mut lines = input.lines();
    let mut executed = 0usize;
    loop {
        if interactive {
            write!(out, "{}> ", driver.name())?;
            out.flush()?;
        }

        let Some(line) = lines.next() else {
            if interactive {
                writeln!(out)?;
            }
            break;
        };
        let line = line?;

        let result = match Command::parse(&line) {
            Ok(Some(Command::Quit)) => break,
            Ok(Some(Command::Help)) => writeln!(out, "{}", driver.usage()).map_err(ShellError::from),
            Ok(Some(command)) => {
                executed += 1;
                driver.execute(command, out)
            }
            Ok(None) => Ok(()),
            Err(err) => Err(err),
        };

        if let Err(err) = result {
            if err.is_fatal() {
                return Err(err);
            }
            debug!(error = %err, line = line.as_str(), "command failed");
            writeln!(out, "error: {}", err)?;
        }
    }

    writeln!(out, "{}", driver.summary())?;
    info!(structure = driver.name(), executed, "session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
