//! Line-oriented input for the interactive menus.
//!
//! [`Prompt`] wraps any [`BufRead`] (stdin in the binary, a byte slice in tests)
//! and provides the re-prompting loops the menus need: free text, bounded
//! numeric choices, yes/no confirmation and "ask until valid" checks. End of
//! input surfaces as [`HubError::InputClosed`] so callers can unwind cleanly.

use crate::core::error::{HubError, Result};
use crate::core::index_parser::IndexParser;
use crate::core::output::print_error;
use colored::*;
use std::io::{self, BufRead, Write};

pub struct Prompt<R> {
    input: R,
}

impl<R: BufRead> Prompt<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Print `label` and read one line, without its line ending.
    pub fn ask(&mut self, label: &str) -> Result<String> {
        print!("\n{} ", format!("{label}:").yellow());
        io::stdout().flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            log::debug!("Input closed while waiting for '{label}'");
            return Err(HubError::InputClosed);
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    /// Ask for a number in `1..=max`, re-prompting on bad input.
    pub fn ask_choice(&mut self, label: &str, max: usize) -> Result<usize> {
        self.ask_until(label, |line| IndexParser::parse_choice(line, max))
    }

    /// Ask a y/n question, re-prompting until one of them is given.
    pub fn confirm(&mut self, label: &str) -> Result<bool> {
        loop {
            let answer = self.ask(&format!("{label} (y/n)"))?;
            match answer.trim().to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => print_error("Invalid input. Please enter 'y' for Yes or 'n' for No"),
            }
        }
    }

    /// Keep asking until `check` accepts the line.
    ///
    /// Rejections are printed and the question is repeated. `EmptySelection`
    /// and closed input are returned, since asking again cannot fix them.
    pub fn ask_until<T>(
        &mut self,
        label: &str,
        mut check: impl FnMut(&str) -> Result<T>,
    ) -> Result<T> {
        loop {
            let line = self.ask(label)?;
            match check(&line) {
                Ok(value) => return Ok(value),
                Err(e @ (HubError::EmptySelection | HubError::InputClosed)) => return Err(e),
                Err(e) => print_error(&e.to_string()),
            }
        }
    }
}
