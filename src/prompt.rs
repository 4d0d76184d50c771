use std::io::{self, BufRead, Write};

use anyhow::{bail, Result};

/// Source of player decisions.
pub trait Prompter {
    /// Show `options` as a single-select menu and return the raw answer.
    /// Resolving the answer to an option is the caller's job.
    fn select(&mut self, message: &str, options: &[&str]) -> Result<String>;

    /// Ask a yes/no question.
    fn confirm(&mut self, message: &str) -> Result<bool>;
}

/// Line-oriented prompts: a numbered menu, answered by typing a number.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl LinePrompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_answer(&mut self) -> Result<String> {
        write!(self.output, "> ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input stream closed");
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn select(&mut self, message: &str, options: &[&str]) -> Result<String> {
        writeln!(self.output, "\n? {message}")?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, "  {}) {option}", i + 1)?;
        }
        self.read_answer()
    }

    fn confirm(&mut self, message: &str) -> Result<bool> {
        loop {
            writeln!(self.output, "\n? {message} (Y/n)")?;
            match self.read_answer()?.to_lowercase().as_str() {
                "" | "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "  Please answer y or n.")?,
            }
        }
    }
}
