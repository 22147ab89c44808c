//! Operator interaction.
//!
//! The session only talks to the operator through [`Prompter`], so tests can
//! drive it with a scripted implementation while the binary uses
//! [`TerminalPrompter`] over stdin and stdout.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::error::{Result, ToolError};

const YES: &str = "Yes";
const NO: &str = "No";

/// Capability to ask the operator questions.
pub trait Prompter {
    /// Shows `message` and a numbered menu; returns the chosen index.
    fn choose_one(&mut self, message: &str, options: &[String]) -> Result<usize>;

    /// Asks a Yes/No question.
    fn confirm(&mut self, message: &str) -> Result<bool> {
        let options = [YES.to_string(), NO.to_string()];
        Ok(self.choose_one(message, &options)? == 0)
    }

    /// Reads one line of free text.
    fn input(&mut self, message: &str) -> Result<String>;
}

/// Line-oriented prompter over any reader and writer.
pub struct TerminalPrompter<R, W> {
    reader: R,
    writer: W,
}

impl TerminalPrompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line)?;
        if read == 0 {
            return Err(ToolError::Prompt("operator input closed".into()));
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn choose_one(&mut self, message: &str, options: &[String]) -> Result<usize> {
        if options.is_empty() {
            return Err(ToolError::Prompt(format!("no options to choose from for '{message}'")));
        }

        writeln!(self.writer, "{message}")?;
        loop {
            for (idx, option) in options.iter().enumerate() {
                writeln!(self.writer, "{}. {option}", idx + 1)?;
            }
            self.writer.flush()?;

            let answer = self.read_line()?;
            if let Some(idx) = parse_choice(&answer, options) {
                return Ok(idx);
            }
            debug!(%answer, "rejected menu answer");
            writeln!(self.writer, "'{answer}' is not a valid choice.")?;
        }
    }

    fn input(&mut self, message: &str) -> Result<String> {
        write!(self.writer, "{message}")?;
        self.writer.flush()?;
        self.read_line()
    }
}

/// Accepts a 1-based number or the option text itself, ignoring case.
fn parse_choice(answer: &str, options: &[String]) -> Option<usize> {
    if let Ok(number) = answer.parse::<usize>() {
        return (1..=options.len()).contains(&number).then(|| number - 1);
    }
    options
        .iter()
        .position(|option| option.eq_ignore_ascii_case(answer))
}
