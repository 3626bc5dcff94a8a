//! Renders settings into the compose manifest.
//!
//! Two phases: literal `{NAME}` substitution over the template text, then a
//! YAML parse of the result. The template is not valid YAML until every
//! placeholder is replaced, so nothing is interpreted before substitution.
//! Only placeholders written in the template are replaced; text coming from a
//! setting value is inserted as-is.

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::manifest::{find_placeholders, substitute_placeholders};
use crate::domain::settings::{FALLBACK_PROJECT, PROJECT_NAME};
use crate::domain::{AppError, DeployMode, MANAGED_COMPONENTS, Manifest, SettingsMap};
use crate::services::atomic_file::write_atomic;

const BUILTIN_TEMPLATE: &str = include_str!("../../templates/docker-compose.tpl");

/// How to treat `{NAME}` placeholders left after substitution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaceholderPolicy {
    /// Report them and keep rendering.
    #[default]
    Warn,
    /// Fail the render.
    Reject,
}

/// Result of a successful render.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub manifest: Manifest,
    pub unresolved: Vec<String>,
    /// Services removed because their component is managed externally.
    pub pruned: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ManifestRenderer {
    template: String,
    policy: PlaceholderPolicy,
}

impl ManifestRenderer {
    pub fn new(template: impl Into<String>) -> Self {
        Self { template: template.into(), policy: PlaceholderPolicy::default() }
    }

    /// Renderer over the compose template shipped with the binary.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_TEMPLATE)
    }

    /// Load a template file. A missing file is fatal.
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        match fs::read_to_string(path) {
            Ok(template) => Ok(Self::new(template)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(AppError::TemplateNotFound(path.to_path_buf()))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn with_policy(mut self, policy: PlaceholderPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace every `{NAME}` for which `settings` has a value.
    pub fn substitute(&self, settings: &SettingsMap) -> String {
        substitute_placeholders(&self.template, settings)
    }

    /// Template placeholders that `settings` has no value for.
    pub fn unresolved(&self, settings: &SettingsMap) -> Vec<String> {
        find_placeholders(&self.template)
            .into_iter()
            .filter(|placeholder| settings.get(&placeholder[1..placeholder.len() - 1]).is_none())
            .collect()
    }

    /// Substitute, parse and prune. Nothing is written.
    pub fn render(&self, settings: &SettingsMap) -> Result<Rendered, AppError> {
        let unresolved = self.unresolved(settings);
        if !unresolved.is_empty() {
            if self.policy == PlaceholderPolicy::Reject {
                return Err(AppError::UnresolvedPlaceholders(unresolved));
            }
            tracing::warn!(placeholders = ?unresolved, "unresolved placeholders in manifest");
        }

        let mut manifest = Manifest::parse(&self.substitute(settings))?;

        let project =
            settings.get(PROJECT_NAME).filter(|p| !p.is_empty()).unwrap_or(FALLBACK_PROJECT);
        let mut pruned = Vec::new();
        for component in &MANAGED_COMPONENTS {
            let mode = DeployMode::from_setting(settings.get_or(component.mode_setting, ""));
            if mode != DeployMode::External {
                continue;
            }
            let report = manifest.prune(component, project);
            tracing::debug!(
                component = component.label,
                service_removed = report.service_removed,
                volume_removed = report.volume_removed,
                edges = ?report.edges_removed_from,
                "pruned externally managed component"
            );
            pruned.push(component.service_name(project));
        }

        Ok(Rendered { manifest, unresolved, pruned })
    }

    /// Render and replace the file at `output`. On any error the file is left untouched.
    pub fn render_to(&self, settings: &SettingsMap, output: &Path) -> Result<Rendered, AppError> {
        let rendered = self.render(settings)?;
        write_manifest(&rendered.manifest, output)?;
        Ok(rendered)
    }
}

/// Serialize `manifest` fully, then atomically replace `output`.
pub fn write_manifest(manifest: &Manifest, output: &Path) -> Result<(), AppError> {
    let content = manifest.to_yaml()?;
    write_atomic(output, content.as_bytes())?;

    tracing::debug!(path = %output.display(), "wrote manifest");
    Ok(())
}
