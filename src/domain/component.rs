//! Stateful dependencies that can run inside the manifest or outside it.

use crate::domain::settings::{DB_DEPLOY_MODE, REDIS_DEPLOY_MODE};

/// Where a managed component runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeployMode {
    /// Runs as a service inside the generated manifest.
    SelfHosted,
    /// Assumed reachable outside the manifest.
    External,
}

impl DeployMode {
    pub const ALL: [DeployMode; 2] = [DeployMode::SelfHosted, DeployMode::External];

    /// Value persisted in the answer store.
    pub fn as_str(self) -> &'static str {
        match self {
            DeployMode::SelfHosted => "docker",
            DeployMode::External => "external",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DeployMode::SelfHosted => "docker (self-hosted)",
            DeployMode::External => "external (managed elsewhere)",
        }
    }

    /// Parse a stored value. Anything unknown is treated as self-hosted.
    pub fn from_setting(value: &str) -> Self {
        if value == DeployMode::External.as_str() {
            DeployMode::External
        } else {
            DeployMode::SelfHosted
        }
    }

    pub fn is_self_hosted(self) -> bool {
        self == DeployMode::SelfHosted
    }
}

/// A component whose service, volume and dependency edges are pruned when external.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ManagedComponent {
    pub label: &'static str,
    pub mode_setting: &'static str,
    service_prefix: &'static str,
}

pub const DATABASE: ManagedComponent =
    ManagedComponent { label: "database", mode_setting: DB_DEPLOY_MODE, service_prefix: "postgres" };

pub const CACHE: ManagedComponent =
    ManagedComponent { label: "redis", mode_setting: REDIS_DEPLOY_MODE, service_prefix: "redis" };

pub const MANAGED_COMPONENTS: [ManagedComponent; 2] = [DATABASE, CACHE];

impl ManagedComponent {
    pub fn service_name(&self, project: &str) -> String {
        format!("{}-{}", self.service_prefix, project)
    }

    pub fn volume_name(&self, project: &str) -> String {
        format!("{}_{}_data", self.service_prefix, project)
    }
}
