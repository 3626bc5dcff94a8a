use std::path::Path;

use crate::app::commands::deploy::{self, DeployOutcome};
use crate::app::context::WizardContext;
use crate::app::wizard;
use crate::domain::AppError;
use crate::services::ManifestRenderer;

/// How an install session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    Deployed(DeployOutcome),
    /// The user declined at the final confirmation. Answers stay saved.
    Declined,
}

/// Run every stage, show the summary, confirm, then deploy.
pub fn execute(
    ctx: &mut WizardContext<'_>,
    renderer: &ManifestRenderer,
    manifest_path: &Path,
    assume_yes: bool,
) -> Result<InstallOutcome, AppError> {
    ctx.reporter.header("stackup installation wizard");

    wizard::run_stages(ctx)?;

    ctx.reporter.summary("Deployment configuration", &ctx.settings.redacted_rows());

    let proceed = assume_yes || ctx.prompter.confirm("Continue with deployment?", true)?.unwrap_or(true);
    if !proceed {
        tracing::info!("deployment declined");
        return Ok(InstallOutcome::Declined);
    }

    deploy::execute(ctx, renderer, manifest_path).map(InstallOutcome::Deployed)
}
