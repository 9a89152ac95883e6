//! Line input behind a trait so screens can be driven without a terminal.
//!
//! The interactive contract is: invalid input re-prompts indefinitely, and
//! the only other way out of a prompt loop is the input stream closing
//! (Ctrl-D / Ctrl-C), which surfaces as [`InputClosed`] and unwinds the
//! whole screen stack.

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("input stream closed")]
pub struct InputClosed;

pub trait LineReader {
    /// Prints `prompt` and reads one line. `Err(InputClosed)` at end of
    /// input.
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

/// Real terminal input. No history file: lines here include credentials.
pub struct Console {
    rl: DefaultEditor,
}

impl Console {
    pub fn new() -> Result<Self> {
        Ok(Self {
            rl: DefaultEditor::new()?,
        })
    }
}

impl LineReader for Console {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        match self.rl.readline(prompt) {
            Ok(line) => Ok(line),
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Err(InputClosed.into()),
            Err(e) => Err(e.into()),
        }
    }
}

/// One trimmed line under a `label> ` prompt.
pub fn prompt(input: &mut dyn LineReader, label: &str) -> Result<String> {
    let line = input.read_line(&format!("{}> ", label))?;
    Ok(line.trim().to_string())
}

/// Re-prompts until `parse` accepts the line, printing `retry` between
/// attempts. The predicate is the loop's only exit besides end of input.
pub fn prompt_until<T>(
    input: &mut dyn LineReader,
    label: &str,
    retry: &str,
    mut parse: impl FnMut(&str) -> Option<T>,
) -> Result<T> {
    loop {
        let line = prompt(input, label)?;
        if let Some(value) = parse(&line) {
            return Ok(value);
        }
        println!("\n{}", retry);
    }
}

/// A non-empty record field. Records are space-delimited on disk, so a
/// field containing whitespace would shift every later field on reload;
/// such input is rejected and re-prompted.
pub fn prompt_field(input: &mut dyn LineReader, label: &str) -> Result<String> {
    prompt_until(input, label, "Field cannot be empty or contain spaces.", |line| {
        (!line.is_empty() && !line.contains(char::is_whitespace)).then(|| line.to_string())
    })
}

/// Like [`prompt_field`], but blank is allowed (edit screens treat blank as
/// "keep the current value").
pub fn prompt_field_or_blank(input: &mut dyn LineReader, label: &str) -> Result<String> {
    prompt_until(input, label, "Field cannot contain spaces.", |line| {
        (!line.contains(char::is_whitespace)).then(|| line.to_string())
    })
}

/// A menu choice in `0..=max`.
pub fn prompt_choice(input: &mut dyn LineReader, label: &str, max: usize) -> Result<usize> {
    prompt_until(input, label, "Please input a valid option.", |line| {
        line.parse::<usize>().ok().filter(|&v| v <= max)
    })
}

/// A 0/1 answer.
pub fn prompt_yes_no(input: &mut dyn LineReader, label: &str) -> Result<bool> {
    prompt_until(input, label, "Please input a valid option.", |line| {
        match line {
            "0" => Some(false),
            "1" => Some(true),
            _ => None,
        }
    })
}
