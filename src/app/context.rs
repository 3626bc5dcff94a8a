use crate::domain::settings::{FALLBACK_PROJECT, PROJECT_NAME};
use crate::domain::{DeployMode, ManagedComponent, SettingsMap};
use crate::ports::{AnswerStore, ContainerRuntime, PortProbe, Prompter, Reporter};

/// Collaborators and accumulated settings for one wizard session.
pub struct WizardContext<'a> {
    pub(crate) store: &'a mut dyn AnswerStore,
    pub(crate) prompter: &'a mut dyn Prompter,
    pub(crate) reporter: &'a mut dyn Reporter,
    pub(crate) runtime: &'a dyn ContainerRuntime,
    pub(crate) ports: &'a dyn PortProbe,
    pub(crate) settings: SettingsMap,
}

impl<'a> WizardContext<'a> {
    pub fn new(
        store: &'a mut dyn AnswerStore,
        prompter: &'a mut dyn Prompter,
        reporter: &'a mut dyn Reporter,
        runtime: &'a dyn ContainerRuntime,
        ports: &'a dyn PortProbe,
    ) -> Self {
        Self { store, prompter, reporter, runtime, ports, settings: SettingsMap::new() }
    }

    /// Settings resolved so far in this session.
    pub fn settings(&self) -> &SettingsMap {
        &self.settings
    }

    pub fn into_settings(self) -> SettingsMap {
        self.settings
    }

    /// Resolved value for `name`, falling back to the store.
    ///
    /// Lets a stage run on its own against a seeded store.
    pub fn resolved(&self, name: &str) -> Option<&str> {
        self.settings.get(name).or_else(|| self.store.get(name))
    }

    pub fn project(&self) -> &str {
        self.resolved(PROJECT_NAME).filter(|p| !p.is_empty()).unwrap_or(FALLBACK_PROJECT)
    }

    pub fn deploy_mode(&self, component: &ManagedComponent) -> DeployMode {
        DeployMode::from_setting(self.resolved(component.mode_setting).unwrap_or_default())
    }
}
