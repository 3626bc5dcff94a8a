use std::io::ErrorKind;

use dialoguer::{Confirm, Error as DialoguerError, Input, Select};

use crate::domain::AppError;
use crate::ports::Prompter;

/// Terminal prompts rendered with dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

fn map_error<T>(err: DialoguerError, what: &str) -> Result<Option<T>, AppError> {
    match err {
        DialoguerError::IO(err) if err.kind() == ErrorKind::Interrupted => Err(AppError::Interrupted),
        DialoguerError::IO(err)
            if matches!(
                err.kind(),
                ErrorKind::UnexpectedEof | ErrorKind::NotConnected | ErrorKind::BrokenPipe
            ) =>
        {
            Ok(None)
        }
        err => Err(AppError::Prompt(format!("Failed to read {}: {}", what, err))),
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&mut self, label: &str, default: &str) -> Result<Option<String>, AppError> {
        let mut input = Input::<String>::new().with_prompt(label).allow_empty(true);
        if !default.is_empty() {
            input = input.default(default.to_string());
        }

        match input.interact_text() {
            Ok(value) if value.trim().is_empty() => Ok(Some(default.to_string())),
            Ok(value) => Ok(Some(value.trim().to_string())),
            Err(err) => map_error(err, label),
        }
    }

    fn select(
        &mut self,
        label: &str,
        items: &[String],
        default: usize,
    ) -> Result<Option<usize>, AppError> {
        let selection = Select::new().with_prompt(label).items(items).default(default).interact_opt();

        match selection {
            Ok(Some(index)) => Ok(Some(index)),
            // Escape keeps the current default.
            Ok(None) => Ok(Some(default)),
            Err(err) => map_error(err, label),
        }
    }

    fn confirm(&mut self, label: &str, default: bool) -> Result<Option<bool>, AppError> {
        match Confirm::new().with_prompt(label).default(default).interact() {
            Ok(answer) => Ok(Some(answer)),
            Err(err) => map_error(err, label),
        }
    }
}
