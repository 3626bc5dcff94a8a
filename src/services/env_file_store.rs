use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::domain::dotenv::{self, EnvLine};
use crate::domain::validation::validate_setting_name;
use crate::ports::AnswerStore;
use crate::services::atomic_file::write_atomic;

/// Answer store backed by a `KEY=VALUE` file.
///
/// Lines that are not settings (comments, blank lines, malformed entries) are
/// kept as-is. Every `set` rewrites the file through a temporary file and a
/// rename, so the file on disk is always either the old or the new version.
#[derive(Debug)]
pub struct EnvFileStore {
    path: PathBuf,
    lines: Vec<EnvLine>,
    values: HashMap<String, String>,
}

impl EnvFileStore {
    /// Create a store for `path` without touching the filesystem.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), lines: Vec::new(), values: HashMap::new() }
    }

    /// Create the backing file if needed and load it.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let mut store = Self::new(path);
        store.create_if_not_exists()?;
        store.load()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Create an empty backing file (and its directory) if absent.
    pub fn create_if_not_exists(&self) -> Result<(), AppError> {
        if self.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.persistence_error(e))?;
        }
        fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)
            .map_err(|e| self.persistence_error(e))?;
        Ok(())
    }

    /// Read the backing file. A missing file yields an empty store.
    pub fn load(&mut self) -> Result<(), AppError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e.into()),
        };

        self.lines = dotenv::parse(&content);
        self.values.clear();
        for line in &self.lines {
            match line {
                EnvLine::Entry { key, value } => {
                    self.values.insert(key.clone(), value.clone());
                }
                EnvLine::Other(raw) if !raw.trim().is_empty() && !raw.trim_start().starts_with('#') => {
                    tracing::warn!(path = %self.path.display(), line = %raw, "ignoring malformed line");
                }
                EnvLine::Other(_) => {}
            }
        }

        tracing::debug!(path = %self.path.display(), settings = self.values.len(), "loaded answers");
        Ok(())
    }

    /// All stored settings, sorted by name.
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut entries: Vec<_> =
            self.values.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        entries.sort();
        entries
    }

    fn persist(&self, lines: &[EnvLine]) -> Result<(), AppError> {
        let content = dotenv::render(lines);
        write_atomic(&self.path, content.as_bytes()).map_err(|e| self.persistence_error(e))
    }

    fn persistence_error(&self, source: io::Error) -> AppError {
        AppError::Persistence { path: self.path.clone(), source }
    }
}

impl AnswerStore for EnvFileStore {
    fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    fn set(&mut self, name: &str, value: &str) -> Result<(), AppError> {
        if !validate_setting_name(name) {
            return Err(AppError::InvalidSettingName(name.to_string()));
        }
        if self.get(name) == Some(value) && self.exists() {
            return Ok(());
        }

        let mut lines = self.lines.clone();
        let entry = EnvLine::entry(name, value);
        let mut replaced = false;
        lines.retain_mut(|line| {
            if line.key() != Some(name) {
                return true;
            }
            if replaced {
                return false;
            }
            *line = entry.clone();
            replaced = true;
            true
        });
        if !replaced {
            lines.push(entry);
        }

        self.persist(&lines)?;
        self.lines = lines;
        self.values.insert(name.to_string(), value.to_string());
        tracing::debug!(name, "saved setting");
        Ok(())
    }
}
