//! Delivery of resolved values to external programs (clipboard, opener).

use std::io::Write;
use std::process::{Command, Stdio};

use log::info;

use crate::error::{Error, Result};

/// Something that accepts a resolved anchor value.
pub trait Sink {
    /// Hands `value` over.
    ///
    /// # Errors
    ///
    /// Returns an error if the value could not be delivered.
    fn send(&self, value: &str) -> Result<()>;
}

/// How a [`CommandSink`] passes the value to its program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Written to the program's stdin, like `pbcopy`.
    Stdin,
    /// Appended as the last argument, like `open <url>`.
    Argument,
}

/// Runs a program for every value sent to it.
#[derive(Debug, Clone)]
pub struct CommandSink {
    program: Vec<String>,
    delivery: Delivery,
}

impl CommandSink {
    pub fn new(program: Vec<String>, delivery: Delivery) -> Self {
        Self { program, delivery }
    }

    fn display_name(&self) -> String {
        self.program.join(" ")
    }

    fn build_command(&self, value: &str) -> Result<Command> {
        let Some((program, arguments)) = self.program.split_first() else {
            return Err(Error::EmptySinkCommand);
        };

        let mut command = Command::new(program);
        command.args(arguments);

        match self.delivery {
            Delivery::Stdin => {
                command.stdin(Stdio::piped());
            }
            Delivery::Argument => {
                command.arg(value).stdin(Stdio::null());
            }
        }

        Ok(command)
    }
}

impl Sink for CommandSink {
    fn send(&self, value: &str) -> Result<()> {
        let mut command = self.build_command(value)?;

        info!("Running `{}` ({:?})", self.display_name(), self.delivery);

        let mut child = command.spawn()?;

        let written = match (self.delivery, child.stdin.take()) {
            // Dropping stdin closes the pipe so the child sees EOF
            (Delivery::Stdin, Some(mut stdin)) => stdin.write_all(value.as_bytes()),
            _ => Ok(()),
        };

        let subprocess_exit_success = child.wait()?.success();
        written?;

        if subprocess_exit_success {
            Ok(())
        } else {
            Err(Error::SubProcessExit(self.display_name()))
        }
    }
}
