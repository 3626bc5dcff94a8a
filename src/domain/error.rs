use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for stackup operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The answer store could not be written; saved state is no longer guaranteed.
    #[error("Failed to save settings to {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Setting name cannot be represented in the answer store.
    #[error("Invalid setting name '{0}': must match [A-Za-z_][A-Za-z0-9_]*")]
    InvalidSettingName(String),

    /// No input channel and no usable default for a field.
    #[error("No input available for '{0}' and no usable default; run interactively")]
    MissingInput(String),

    /// The user interrupted the session.
    #[error("Installation interrupted")]
    Interrupted,

    /// The prompt backend failed for a reason other than a closed input channel.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// Manifest template file is missing.
    #[error("Template file not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    /// Rendered template is not a valid manifest document.
    #[error("Rendered manifest is not valid YAML: {0}")]
    ManifestParse(String),

    /// Placeholders left in the rendered manifest under the strict policy.
    #[error("Unresolved placeholders in manifest: {}", .0.join(", "))]
    UnresolvedPlaceholders(Vec<String>),

    /// No compose tool is installed on the host.
    #[error("docker compose is not installed; install it and re-run to deploy")]
    ComposeUnavailable,

    /// Container runtime command failed.
    #[error("Container runtime error running '{command}': {details}")]
    Runtime { command: String, details: String },

    /// Another session holds the install directory.
    #[error("Another installation session is running ({holder}). Lock file: {}", lock_path.display())]
    SessionLocked { holder: String, lock_path: PathBuf },

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn runtime<C: Into<String>, D: Into<String>>(command: C, details: D) -> Self {
        AppError::Runtime { command: command.into(), details: details.into() }
    }

    /// True when the session ended because the user interrupted it.
    pub fn is_interruption(&self) -> bool {
        matches!(self, AppError::Interrupted)
    }

    /// True for failures that only abort the deployment step.
    pub fn is_deployment_failure(&self) -> bool {
        matches!(self, AppError::ComposeUnavailable | AppError::Runtime { .. })
    }
}
