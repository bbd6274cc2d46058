//! Interactive command shell.
//!
//! Reads one command per line, runs it against the contact service and
//! prints the reply. Errors are printed and the loop goes on; only `close`,
//! `exit` or end of input stop it.

pub mod commands;

pub use commands::{execute, parse_input, Command, Reply};

use crate::error::CommandError;
use crate::services::ContactService;
use std::io::{self, BufRead, Write};
use tracing::debug;

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const GOODBYE: &str = "Good bye!";

/// Line-oriented front end over a `ContactService`.
pub struct Shell<S: ContactService> {
    service: S,
}

impl<S: ContactService> Shell<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Give back the service, e.g. to save its address book.
    pub fn into_service(self) -> S {
        self.service
    }

    /// Run the read-dispatch-print loop until exit or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, output: &mut W) -> io::Result<()> {
        writeln!(output, "{}", WELCOME)?;

        let mut buf = Vec::new();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                writeln!(output)?;
                debug!("End of input, leaving shell");
                break;
            }

            // Undecodable input is a bad command, not the end of the session.
            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line,
                Err(e) => {
                    let error = CommandError::UnknownCommand(
                        String::from_utf8_lossy(&buf).trim_end().to_string(),
                    );
                    debug!(error = %e, "Input line is not valid UTF-8");
                    writeln!(output, "{}", error)?;
                    continue;
                }
            };

            let Some((word, args)) = parse_input(line) else {
                continue;
            };

            let result = word
                .parse::<Command>()
                .and_then(|command| execute(command, &args, &mut self.service));

            match result {
                Ok(Reply::Print(text)) => writeln!(output, "{}", text)?,
                Ok(Reply::Exit) => break,
                Err(e) => {
                    debug!(command = word, error = %e, "Command failed");
                    writeln!(output, "{}", e)?;
                }
            }
        }

        writeln!(output, "{}", GOODBYE)?;
        Ok(())
    }
}
