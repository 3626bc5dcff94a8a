use crate::domain::AppError;

/// Port for reading answers from the user.
///
/// `Ok(None)` means no input channel is available; callers fall back to the default.
/// A user interrupt is reported as `AppError::Interrupted`.
pub trait Prompter {
    /// Free-text input. An empty answer selects `default`.
    fn input(&mut self, label: &str, default: &str) -> Result<Option<String>, AppError>;

    /// Pick one of `items`, returning its index.
    fn select(
        &mut self,
        label: &str,
        items: &[String],
        default: usize,
    ) -> Result<Option<usize>, AppError>;

    /// Yes/no question.
    fn confirm(&mut self, label: &str, default: bool) -> Result<Option<bool>, AppError>;
}
