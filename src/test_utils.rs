//! Scripted input for driving screens in tests.

use crate::input::{InputClosed, LineReader};
use anyhow::Result;
use std::collections::VecDeque;

/// A [`LineReader`] fed from a fixed script. Records every prompt it was
/// shown so tests can assert on the interaction, and reports end of input
/// once the script runs out.
pub struct ScriptedInput {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            prompts: Vec::new(),
        }
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineReader for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        self.lines.pop_front().ok_or_else(|| InputClosed.into())
    }
}
