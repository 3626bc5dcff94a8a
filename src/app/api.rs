//! API facade for the installer.
//!
//! Builds the real collaborators for an install directory and runs the
//! install command with them.

use std::fs;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use crate::app::commands::install;
use crate::app::context::WizardContext;
use crate::ports::{ContainerRuntime, PortProbe, Prompter, Reporter};
use crate::services::{
    ConsoleReporter, DialoguerPrompter, DockerCli, EnvFileStore, LinePrompter, ManifestRenderer,
    NonInteractivePrompter, PlaceholderPolicy, SessionLock, TcpPortProbe, remove_stale_temp_files,
};

pub use crate::app::commands::deploy::DeployOutcome;
pub use crate::app::commands::install::InstallOutcome;
pub use crate::domain::AppError;

pub const ENV_FILENAME: &str = ".env";
pub const MANIFEST_FILENAME: &str = "docker-compose.yml";

/// Options for one install session.
#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    pub install_dir: PathBuf,
    /// Compose template to render instead of the built-in one.
    pub template: Option<PathBuf>,
    pub non_interactive: bool,
    /// Skip the final confirmation.
    pub assume_yes: bool,
    /// Fail when the manifest still contains `{NAME}` placeholders.
    pub strict_placeholders: bool,
}

impl InstallOptions {
    pub fn new(install_dir: impl Into<PathBuf>) -> Self {
        Self { install_dir: install_dir.into(), ..Self::default() }
    }

    pub fn env_path(&self) -> PathBuf {
        self.install_dir.join(ENV_FILENAME)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.install_dir.join(MANIFEST_FILENAME)
    }

    fn placeholder_policy(&self) -> PlaceholderPolicy {
        if self.strict_placeholders { PlaceholderPolicy::Reject } else { PlaceholderPolicy::Warn }
    }
}

/// Run the installer with docker, local port probing and console output.
///
/// Prompts come from the terminal when stdin is one, otherwise one answer per
/// line is read from stdin.
pub fn install(options: &InstallOptions) -> Result<InstallOutcome, AppError> {
    let mut reporter = ConsoleReporter::new();
    let runtime = DockerCli::default();
    let probe = TcpPortProbe;

    if options.non_interactive {
        install_with(options, &mut NonInteractivePrompter, &mut reporter, &runtime, &probe)
    } else if io::stdin().is_terminal() {
        install_with(options, &mut DialoguerPrompter::new(), &mut reporter, &runtime, &probe)
    } else {
        install_with(options, &mut LinePrompter::stdio(), &mut reporter, &runtime, &probe)
    }
}

/// Run the installer with caller-supplied collaborators.
pub fn install_with(
    options: &InstallOptions,
    prompter: &mut dyn Prompter,
    reporter: &mut dyn Reporter,
    runtime: &dyn ContainerRuntime,
    ports: &dyn PortProbe,
) -> Result<InstallOutcome, AppError> {
    if options.install_dir.is_file() {
        return Err(AppError::config_error(format!(
            "Install directory {} is a file",
            options.install_dir.display()
        )));
    }
    fs::create_dir_all(&options.install_dir)?;

    let renderer = match &options.template {
        Some(path) => ManifestRenderer::from_path(path)?,
        None => ManifestRenderer::builtin(),
    }
    .with_policy(options.placeholder_policy());

    let _lock = SessionLock::acquire(&options.install_dir, "install")?;
    let swept = remove_stale_temp_files(&options.install_dir)?;
    if swept > 0 {
        tracing::info!(count = swept, "removed temporary files from an interrupted session");
    }
    let mut store = EnvFileStore::open(options.env_path())?;
    tracing::debug!(path = %store.path().display(), "answer store loaded");

    let mut ctx = WizardContext::new(&mut store, prompter, reporter, runtime, ports);
    install::execute(&mut ctx, &renderer, &options.manifest_path(), options.assume_yes)
}
