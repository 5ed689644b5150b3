// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Interactive console layer
//!
//! Line-oriented input and colored status output over any reader/writer
//! pair, so the menu and the startup update prompt can run against stdin
//! and stdout or against in-memory buffers.

use std::io::{BufRead, Write};

use crossterm::{
    style::{Color, ResetColor, SetForegroundColor},
    ExecutableCommand,
};

use crate::error::Result;

pub mod menu;
pub mod startup;

pub use menu::{MenuChoice, MenuController, MenuState};
pub use startup::{run_update_check, StartupOutcome};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Read one line without its line ending. `None` at end of input.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Print `text` without a newline, then read the answer.
    pub fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    pub fn println(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn success(&mut self, text: &str) -> Result<()> {
        self.colored(Color::Green, text)
    }

    pub fn notice(&mut self, text: &str) -> Result<()> {
        self.colored(Color::Yellow, text)
    }

    pub fn error(&mut self, text: &str) -> Result<()> {
        self.colored(Color::Red, text)
    }

    fn colored(&mut self, color: Color, text: &str) -> Result<()> {
        self.output.execute(SetForegroundColor(color))?;
        write!(self.output, "{}", text)?;
        self.output.execute(ResetColor)?;
        writeln!(self.output)?;
        Ok(())
    }
}
