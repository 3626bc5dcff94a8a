use std::path::{Path, PathBuf};

use crate::app::context::WizardContext;
use crate::domain::AppError;
use crate::domain::settings::{
    API_IMAGE_REPO, API_IMAGE_TAG, DOCKER_NETWORK, RPC_IMAGE_REPO, RPC_IMAGE_TAG,
};
use crate::services::ManifestRenderer;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DeployOutcome {
    pub manifest_path: PathBuf,
    /// Services left out because they are managed externally.
    pub pruned: Vec<String>,
    pub unresolved: Vec<String>,
    pub network_created: bool,
    pub pulled_images: Vec<String>,
}

/// Materialize the deployment: compose check, manifest, network, images.
///
/// Any failure aborts the remaining steps; saved answers are untouched.
pub fn execute(
    ctx: &mut WizardContext<'_>,
    renderer: &ManifestRenderer,
    manifest_path: &Path,
) -> Result<DeployOutcome, AppError> {
    if !ctx.runtime.compose_available() {
        return Err(AppError::ComposeUnavailable);
    }
    ctx.reporter.success("docker compose is installed");

    let rendered = renderer.render_to(&ctx.settings, manifest_path)?;
    if !rendered.unresolved.is_empty() {
        ctx.reporter.warning(&format!(
            "Manifest still contains placeholders: {}",
            rendered.unresolved.join(", ")
        ));
    }
    for service in &rendered.pruned {
        ctx.reporter.info(&format!("{} is managed externally and was left out", service));
    }
    ctx.reporter.success(&format!("Wrote {}", manifest_path.display()));

    let network = ctx.settings.get_or(DOCKER_NETWORK, "").to_string();
    let network_created = ensure_network(ctx, &network)?;

    let mut pulled_images = Vec::new();
    for (label, repo, tag) in [("API", API_IMAGE_REPO, API_IMAGE_TAG), ("RPC", RPC_IMAGE_REPO, RPC_IMAGE_TAG)]
    {
        let image = format!("{}:{}", ctx.settings.get_or(repo, ""), ctx.settings.get_or(tag, "latest"));
        if ctx.runtime.image_exists(&image) {
            ctx.reporter.success(&format!("{} image already present: {}", label, image));
            continue;
        }
        ctx.reporter.info(&format!("Pulling {} image {}", label, image));
        ctx.runtime.pull_image(&image)?;
        ctx.reporter.success(&format!("Pulled {}", image));
        pulled_images.push(image);
    }

    Ok(DeployOutcome {
        manifest_path: manifest_path.to_path_buf(),
        pruned: rendered.pruned,
        unresolved: rendered.unresolved,
        network_created,
        pulled_images,
    })
}

fn ensure_network(ctx: &mut WizardContext<'_>, name: &str) -> Result<bool, AppError> {
    if name.is_empty() {
        return Err(AppError::MissingInput(DOCKER_NETWORK.to_string()));
    }
    if ctx.runtime.network_exists(name)? {
        ctx.reporter.success(&format!("Docker network {} exists", name));
        return Ok(false);
    }
    ctx.runtime.create_network(name)?;
    ctx.reporter.success(&format!("Created docker network {}", name));
    Ok(true)
}
