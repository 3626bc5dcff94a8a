use crate::domain::AppError;

/// Port for the durable setting store the wizard reads defaults from and writes answers to.
pub trait AnswerStore {
    /// Stored value for `name`, if any.
    fn get(&self, name: &str) -> Option<&str>;

    /// Store `value` and persist it before returning.
    fn set(&mut self, name: &str, value: &str) -> Result<(), AppError>;

    /// Stored value for `name`, or `default` when absent.
    fn get_or(&self, name: &str, default: &str) -> String {
        self.get(name).unwrap_or(default).to_string()
    }
}
