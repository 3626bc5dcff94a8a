//! Structured manifest document and deployment-mode pruning.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde_yaml::{Mapping, Value};

use crate::domain::AppError;
use crate::domain::component::ManagedComponent;
use crate::domain::settings::SettingsMap;

static PLACEHOLDER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Z][A-Z0-9_]*)\}").expect("valid placeholder pattern"));

const SERVICES: &str = "services";
const VOLUMES: &str = "volumes";
const DEPENDS_ON: &str = "depends_on";

/// A parsed service orchestration document.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    root: Mapping,
}

/// What was removed while pruning one component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PruneReport {
    pub service_removed: bool,
    pub volume_removed: bool,
    /// Services that lost a dependency edge.
    pub edges_removed_from: Vec<String>,
}

impl Manifest {
    /// Parse YAML text. The document must be a mapping at the top level.
    pub fn parse(text: &str) -> Result<Self, AppError> {
        let value: Value =
            serde_yaml::from_str(text).map_err(|e| AppError::ManifestParse(e.to_string()))?;
        match value {
            Value::Mapping(root) => Ok(Self { root }),
            Value::Null => Err(AppError::ManifestParse("document is empty".to_string())),
            _ => Err(AppError::ManifestParse("top level must be a mapping".to_string())),
        }
    }

    pub fn to_yaml(&self) -> Result<String, AppError> {
        serde_yaml::to_string(&self.root).map_err(|e| AppError::ManifestParse(e.to_string()))
    }

    pub fn service_names(&self) -> Vec<String> {
        section_keys(self.root.get(SERVICES))
    }

    pub fn volume_names(&self) -> Vec<String> {
        section_keys(self.root.get(VOLUMES))
    }

    pub fn has_service(&self, name: &str) -> bool {
        self.section(SERVICES).is_some_and(|s| s.contains_key(name))
    }

    pub fn has_volume(&self, name: &str) -> bool {
        self.section(VOLUMES).is_some_and(|s| s.contains_key(name))
    }

    pub fn service(&self, name: &str) -> Option<&Value> {
        self.section(SERVICES)?.get(name)
    }

    /// Names listed in a service's `depends_on`, in either map or list form.
    pub fn dependencies_of(&self, service: &str) -> Vec<String> {
        match self.service(service).and_then(|s| s.get(DEPENDS_ON)) {
            Some(Value::Mapping(map)) => map.keys().filter_map(as_name).collect(),
            Some(Value::Sequence(items)) => items.iter().filter_map(as_name).collect(),
            _ => Vec::new(),
        }
    }

    /// Remove a component's service, its volume and every dependency edge pointing at it.
    pub fn prune(&mut self, component: &ManagedComponent, project: &str) -> PruneReport {
        let service = component.service_name(project);
        let volume = component.volume_name(project);
        let mut report = PruneReport::default();

        if let Some(services) = self.section_mut(SERVICES) {
            report.service_removed = services.shift_remove(service.as_str()).is_some();

            for (name, definition) in services.iter_mut() {
                if remove_dependency(definition, &service) {
                    if let Some(name) = as_name(name) {
                        report.edges_removed_from.push(name);
                    }
                }
            }
        }

        if let Some(volumes) = self.section_mut(VOLUMES) {
            report.volume_removed = volumes.shift_remove(volume.as_str()).is_some();
        }

        report
    }

    fn section(&self, key: &str) -> Option<&Mapping> {
        self.root.get(key).and_then(Value::as_mapping)
    }

    fn section_mut(&mut self, key: &str) -> Option<&mut Mapping> {
        self.root.get_mut(key).and_then(Value::as_mapping_mut)
    }
}

/// Replace each `{NAME}` in `text` that `settings` has a value for, in one pass.
///
/// Inserted values are never scanned again.
pub fn substitute_placeholders(text: &str, settings: &SettingsMap) -> String {
    PLACEHOLDER_PATTERN
        .replace_all(text, |caps: &Captures<'_>| match settings.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Placeholders of the form `{NAME}` in `text`, sorted and deduplicated.
///
/// `${NAME}` is compose variable interpolation, not a placeholder.
pub fn find_placeholders(text: &str) -> Vec<String> {
    let found: BTreeSet<String> = PLACEHOLDER_PATTERN
        .find_iter(text)
        .filter(|m| !text[..m.start()].ends_with('$'))
        .map(|m| m.as_str().to_string())
        .collect();
    found.into_iter().collect()
}

fn section_keys(section: Option<&Value>) -> Vec<String> {
    match section {
        Some(Value::Mapping(map)) => map.keys().filter_map(as_name).collect(),
        _ => Vec::new(),
    }
}

fn as_name(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

/// Drop `dependency` from a service definition. An emptied `depends_on` is removed.
fn remove_dependency(definition: &mut Value, dependency: &str) -> bool {
    let Some(service) = definition.as_mapping_mut() else {
        return false;
    };

    let (removed, now_empty) = match service.get_mut(DEPENDS_ON) {
        Some(Value::Mapping(map)) => {
            let removed = map.shift_remove(dependency).is_some();
            (removed, map.is_empty())
        }
        Some(Value::Sequence(items)) => {
            let before = items.len();
            items.retain(|item| item.as_str() != Some(dependency));
            (items.len() != before, items.is_empty())
        }
        _ => (false, false),
    };

    if removed && now_empty {
        service.shift_remove(DEPENDS_ON);
    }
    removed
}
