//! Operator prompts
//!
//! [`TerminalPrompter`] asks on the terminal through `dialoguer`.
//! [`ScriptedPrompter`] replays canned answers so a whole dialogue can run
//! in tests without a TTY.

use anyhow::{anyhow, Result};
use dialoguer::{Confirm, Input};
use std::collections::VecDeque;

/// Source of operator answers
pub trait Prompter {
    /// Ask for free text; an empty answer yields `default` when one is given
    ///
    /// # Errors
    ///
    /// Returns an error if the answer cannot be read.
    fn input(&mut self, prompt: &str, default: Option<&str>) -> Result<String>;

    /// Ask a yes/no question
    ///
    /// # Errors
    ///
    /// Returns an error if the answer cannot be read.
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;
}

/// Interactive terminal prompts
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn input(&mut self, prompt: &str, default: Option<&str>) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        Ok(input.interact_text()?)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    }
}

/// Replays a fixed list of answers in order
///
/// Confirmation answers accept `y`, `yes`, `n` and `no` (any case); an empty
/// answer takes the question's default.
#[derive(Debug, Default, Clone)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    /// Create a prompter that will give `answers` in order
    #[must_use]
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Prompts asked so far
    #[must_use]
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Answers not yet consumed
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next_answer(&mut self, prompt: &str) -> Result<String> {
        self.asked.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| anyhow!("No scripted answer left for prompt: {prompt}"))
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&mut self, prompt: &str, default: Option<&str>) -> Result<String> {
        let answer = self.next_answer(prompt)?;
        match default {
            Some(default) if answer.is_empty() => Ok(default.to_string()),
            _ => Ok(answer),
        }
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        let answer = self.next_answer(prompt)?;
        match answer.trim().to_lowercase().as_str() {
            "" => Ok(default),
            "y" | "yes" => Ok(true),
            "n" | "no" => Ok(false),
            other => Err(anyhow!("Unrecognised confirmation answer: '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input_defaults() {
        let mut prompter = ScriptedPrompter::new(["", "v2"]);
        assert_eq!(prompter.input("Version?", Some("v1")).unwrap(), "v1");
        assert_eq!(prompter.input("Version?", Some("v1")).unwrap(), "v2");
        assert_eq!(prompter.remaining(), 0);
    }

    #[test]
    fn test_scripted_confirm() {
        let mut prompter = ScriptedPrompter::new(["", "n", "YES"]);
        assert!(prompter.confirm("Proceed?", true).unwrap());
        assert!(!prompter.confirm("Proceed?", true).unwrap());
        assert!(prompter.confirm("Proceed?", false).unwrap());
    }

    #[test]
    fn test_scripted_exhausted_is_error() {
        let mut prompter = ScriptedPrompter::new(Vec::<String>::new());
        let err = prompter.input("Model name?", None).unwrap_err();
        assert!(err.to_string().contains("Model name?"));
        assert_eq!(prompter.asked().to_vec(), vec!["Model name?".to_string()]);
    }

    #[test]
    fn test_scripted_confirm_rejects_garbage() {
        let mut prompter = ScriptedPrompter::new(["maybe"]);
        assert!(prompter.confirm("Proceed?", true).is_err());
    }
}
