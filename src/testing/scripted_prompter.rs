use std::collections::VecDeque;

use crate::domain::AppError;
use crate::ports::Prompter;

/// One scripted reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Choice(usize),
    Confirm(bool),
    /// Simulates the user pressing Ctrl-C.
    Interrupt,
}

impl Answer {
    pub fn text(value: &str) -> Self {
        Answer::Text(value.to_string())
    }
}

/// Replays answers in order, then behaves as if input were closed.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self { answers: answers.into(), asked: Vec::new() }
    }

    /// Labels of every prompt shown so far.
    pub fn asked(&self) -> Vec<&str> {
        self.asked.iter().map(String::as_str).collect()
    }

    fn next(&mut self, label: &str) -> Result<Option<Answer>, AppError> {
        self.asked.push(label.to_string());
        match self.answers.pop_front() {
            Some(Answer::Interrupt) => Err(AppError::Interrupted),
            other => Ok(other),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&mut self, label: &str, default: &str) -> Result<Option<String>, AppError> {
        match self.next(label)? {
            None => Ok(None),
            Some(Answer::Text(value)) if value.is_empty() => Ok(Some(default.to_string())),
            Some(Answer::Text(value)) => Ok(Some(value)),
            Some(other) => panic!("prompt '{}' expected text, script had {:?}", label, other),
        }
    }

    fn select(
        &mut self,
        label: &str,
        items: &[String],
        default: usize,
    ) -> Result<Option<usize>, AppError> {
        match self.next(label)? {
            None => Ok(None),
            Some(Answer::Choice(index)) => {
                assert!(index < items.len(), "choice {} out of range for '{}'", index, label);
                Ok(Some(index))
            }
            Some(Answer::Text(value)) if value.is_empty() => Ok(Some(default)),
            Some(other) => panic!("prompt '{}' expected a choice, script had {:?}", label, other),
        }
    }

    fn confirm(&mut self, label: &str, default: bool) -> Result<Option<bool>, AppError> {
        match self.next(label)? {
            None => Ok(None),
            Some(Answer::Confirm(answer)) => Ok(Some(answer)),
            Some(Answer::Text(value)) if value.is_empty() => Ok(Some(default)),
            Some(other) => panic!("prompt '{}' expected a confirmation, script had {:?}", label, other),
        }
    }
}
