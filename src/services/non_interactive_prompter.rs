use crate::domain::AppError;
use crate::ports::Prompter;

/// Prompter with no input channel; every field resolves to its default.
#[derive(Debug, Default, Clone, Copy)]
pub struct NonInteractivePrompter;

impl Prompter for NonInteractivePrompter {
    fn input(&mut self, _label: &str, _default: &str) -> Result<Option<String>, AppError> {
        Ok(None)
    }

    fn select(
        &mut self,
        _label: &str,
        _items: &[String],
        _default: usize,
    ) -> Result<Option<usize>, AppError> {
        Ok(None)
    }

    fn confirm(&mut self, _label: &str, _default: bool) -> Result<Option<bool>, AppError> {
        Ok(None)
    }
}
