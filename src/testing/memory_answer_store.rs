use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::domain::validation::validate_setting_name;
use crate::ports::AnswerStore;

/// Answer store kept in memory, with switchable write failures.
#[derive(Debug, Default)]
pub struct MemoryAnswerStore {
    values: BTreeMap<String, String>,
    writes: usize,
    should_fail: bool,
}

impl MemoryAnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(pairs: &[(&str, &str)]) -> Self {
        let values = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Self { values, ..Self::default() }
    }

    pub fn set_should_fail(&mut self, fail: bool) {
        self.should_fail = fail;
    }

    /// Number of successful `set` calls.
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.values.clone()
    }
}

impl AnswerStore for MemoryAnswerStore {
    fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    fn set(&mut self, name: &str, value: &str) -> Result<(), AppError> {
        if !validate_setting_name(name) {
            return Err(AppError::InvalidSettingName(name.to_string()));
        }
        if self.should_fail {
            return Err(AppError::Persistence {
                path: PathBuf::from("memory.env"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "mock store failure"),
            });
        }
        self.values.insert(name.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
