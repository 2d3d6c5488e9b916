//! Line-oriented terminal front end.
//!
//! Each input line is either a `:command` or a sequence of key and button
//! tokens. After every line the screen is redrawn.

use super::render::{HELP, render_history, render_screen};
use crate::calculator::{Action, Calculator, copy_to_clipboard};
use crate::error::{Result, ScicalError};
use crate::keymap::apply_line;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// Whether the loop should keep reading input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A `:`-prefixed command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    History { json: bool },
    /// 1-based position, newest first.
    Pick(usize),
    ClearHistory,
    State,
    Copy,
    Help,
    Quit,
}

impl Command {
    /// Parse the text after the leading `:`.
    pub fn parse(input: &str) -> Result<Self> {
        let mut parts = input.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let arg = parts.next();

        let command = match (name, arg) {
            ("history" | "h", None) => Self::History { json: false },
            ("history" | "h", Some("--json")) => Self::History { json: true },
            ("pick" | "p", Some(n)) => match n.parse::<usize>() {
                Ok(n) if n > 0 => Self::Pick(n),
                _ => return Err(ScicalError::unknown_command(input)),
            },
            ("clear-history", None) => Self::ClearHistory,
            ("state", None) => Self::State,
            ("copy", None) => Self::Copy,
            ("help" | "?", None) => Self::Help,
            ("quit" | "q" | "exit", None) => Self::Quit,
            _ => return Err(ScicalError::unknown_command(input)),
        };

        if parts.next().is_some() {
            return Err(ScicalError::unknown_command(input));
        }
        Ok(command)
    }
}

/// Interactive calculator session writing to `out`.
pub struct Repl<W: Write> {
    calculator: Calculator,
    group_digits: bool,
    out: W,
}

impl<W: Write> Repl<W> {
    pub fn new(calculator: Calculator, group_digits: bool, out: W) -> Self {
        Self {
            calculator,
            group_digits,
            out,
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Read lines until `:quit` or end of input.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        self.print_screen()?;

        for line in input.lines() {
            let line = line?;
            match self.handle_line(&line) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(ScicalError::Io(e)) => return Err(ScicalError::Io(e)),
                Err(e) => {
                    warn!(error = %e, "input rejected");
                    writeln!(self.out, "error: {}", e)?;
                }
            }
        }

        self.out.flush()?;
        Ok(())
    }

    /// Handle one line of input and redraw.
    ///
    /// Unknown tokens are reported and skipped; the known tokens on the
    /// same line are still applied.
    pub fn handle_line(&mut self, line: &str) -> Result<Flow> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Flow::Continue);
        }

        if let Some(command) = line.strip_prefix(':') {
            return self.run_command(Command::parse(command)?);
        }

        let unknown = apply_line(&mut self.calculator, line)?;
        if !unknown.is_empty() {
            warn!(?unknown, "skipped unknown tokens");
            writeln!(self.out, "unknown: {}", unknown.join(" "))?;
        }

        self.print_screen()?;
        Ok(Flow::Continue)
    }

    fn run_command(&mut self, command: Command) -> Result<Flow> {
        debug!(?command, "command");

        match command {
            Command::History { json: false } => {
                writeln!(self.out, "{}", render_history(self.calculator.history()))?;
            }
            Command::History { json: true } => {
                let entries: Vec<_> = self.calculator.history().iter().collect();
                writeln!(self.out, "{}", serde_json::to_string_pretty(&entries)?)?;
            }
            Command::Pick(n) => {
                self.calculator.dispatch(Action::SelectHistory(n - 1))?;
                self.print_screen()?;
            }
            Command::ClearHistory => {
                self.calculator.dispatch(Action::ClearHistory)?;
                writeln!(self.out, "History cleared")?;
            }
            Command::State => {
                let json = serde_json::to_string_pretty(self.calculator.state())?;
                writeln!(self.out, "{}", json)?;
            }
            Command::Copy => {
                copy_to_clipboard(self.calculator.display())?;
                writeln!(self.out, "Copied {}", self.calculator.display())?;
            }
            Command::Help => writeln!(self.out, "{}", HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn print_screen(&mut self) -> Result<()> {
        let screen = render_screen(self.calculator.state(), self.group_digits);
        writeln!(self.out, "{}", screen)?;
        Ok(())
    }
}
