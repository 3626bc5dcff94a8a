//! Shared testing harness for `stackup` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::FakeDocker;

/// Isolated install directory with a fake container runtime on `PATH`.
pub(crate) struct TestContext {
    root: TempDir,
    install_dir: PathBuf,
    docker: FakeDocker,
}

impl TestContext {
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let install_dir = root.path().join("install");
        let docker = FakeDocker::install(root.path());
        Self { root, install_dir, docker }
    }

    pub(crate) fn root(&self) -> &Path {
        self.root.path()
    }

    pub(crate) fn install_dir(&self) -> &Path {
        &self.install_dir
    }

    pub(crate) fn docker(&self) -> &FakeDocker {
        &self.docker
    }

    /// Command for the compiled `stackup` binary targeting the install directory.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("stackup").expect("Failed to locate stackup binary");
        cmd.current_dir(self.root())
            .arg(&self.install_dir)
            .env("HOME", self.root())
            .env("PATH", self.docker.path_env())
            .env_remove("STACKUP_LOG");
        cmd
    }

    /// Run non-interactively with defaults and assert success.
    pub(crate) fn install_defaults(&self) {
        self.cli().arg("--non-interactive").assert().success();
    }

    pub(crate) fn env_path(&self) -> PathBuf {
        self.install_dir.join(".env")
    }

    pub(crate) fn manifest_path(&self) -> PathBuf {
        self.install_dir.join("docker-compose.yml")
    }

    pub(crate) fn read_env(&self) -> String {
        fs::read_to_string(self.env_path()).expect("Failed to read .env")
    }

    pub(crate) fn read_manifest(&self) -> serde_yaml::Value {
        let content = fs::read_to_string(self.manifest_path()).expect("Failed to read manifest");
        serde_yaml::from_str(&content).expect("Manifest should be valid YAML")
    }

    /// Value stored for `name` in `.env`, as written (quotes included).
    pub(crate) fn env_value(&self, name: &str) -> Option<String> {
        let prefix = format!("{}=", name);
        self.read_env()
            .lines()
            .find_map(|line| line.strip_prefix(&prefix).map(String::from))
    }

    pub(crate) fn seed_env(&self, content: &str) {
        fs::create_dir_all(&self.install_dir).expect("Failed to create install dir");
        fs::write(self.env_path(), content).expect("Failed to seed .env");
    }

    pub(crate) fn service_names(&self) -> Vec<String> {
        self.read_manifest()["services"]
            .as_mapping()
            .map(|services| {
                services.keys().filter_map(|k| k.as_str().map(String::from)).collect()
            })
            .unwrap_or_default()
    }
}
