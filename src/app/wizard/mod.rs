//! Ordered stage sequencer.

pub mod fields;
pub mod stages;

use crate::app::context::WizardContext;
use crate::domain::AppError;

type StageFn = fn(&mut WizardContext<'_>) -> Result<(), AppError>;

/// A named group of related settings.
#[derive(Clone, Copy)]
pub struct Stage {
    pub name: &'static str,
    pub title: &'static str,
    action: StageFn,
}

impl Stage {
    const fn new(name: &'static str, title: &'static str, action: StageFn) -> Self {
        Self { name, title, action }
    }

    /// Run this stage alone.
    pub fn run(&self, ctx: &mut WizardContext<'_>) -> Result<(), AppError> {
        (self.action)(ctx)
    }
}

impl std::fmt::Debug for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage").field("name", &self.name).finish()
    }
}

pub static STAGES: [Stage; 9] = [
    Stage::new("project", "Project", stages::project),
    Stage::new("network", "Docker network", stages::network),
    Stage::new("images", "Docker images", stages::images),
    Stage::new("deploy_modes", "Component deployment", stages::deploy_modes),
    Stage::new("ports", "Ports", stages::ports),
    Stage::new("database", "Database", stages::database),
    Stage::new("cache", "Redis", stages::cache),
    Stage::new("auth", "Authentication", stages::auth),
    Stage::new("captcha", "Captcha", stages::captcha),
];

/// Look up a stage by name.
pub fn stage(name: &str) -> Option<&'static Stage> {
    STAGES.iter().find(|s| s.name == name)
}

/// Run every stage in order, stopping at the first error.
pub fn run_stages(ctx: &mut WizardContext<'_>) -> Result<(), AppError> {
    for (i, stage) in STAGES.iter().enumerate() {
        tracing::info!(stage = stage.name, "starting stage");
        ctx.reporter.stage(i + 1, stage.title);
        stage.run(ctx)?;
    }
    Ok(())
}
