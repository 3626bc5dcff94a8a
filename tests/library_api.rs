use std::cell::RefCell;
use std::fs;

use stackup::domain::settings::{DB_DEPLOY_MODE, PROJECT_NAME, REDIS_DEPLOY_MODE};
use stackup::ports::{AnswerStore, ContainerRuntime, PortProbe, Reporter};
use stackup::services::{EnvFileStore, ManifestRenderer, NonInteractivePrompter};
use stackup::{AppError, InstallOptions, InstallOutcome, SettingsMap, install_with};
use tempfile::TempDir;

#[derive(Default)]
struct QuietReporter;

impl Reporter for QuietReporter {
    fn header(&mut self, _title: &str) {}
    fn stage(&mut self, _index: usize, _title: &str) {}
    fn success(&mut self, _message: &str) {}
    fn info(&mut self, _message: &str) {}
    fn warning(&mut self, _message: &str) {}
    fn error(&mut self, _message: &str) {}
    fn summary(&mut self, _title: &str, _rows: &[(String, String)]) {}
}

#[derive(Default)]
struct StubRuntime {
    calls: RefCell<Vec<String>>,
}

impl ContainerRuntime for StubRuntime {
    fn list_networks(&self) -> Result<Vec<String>, AppError> {
        Ok(vec!["bridge".to_string()])
    }

    fn create_network(&self, name: &str) -> Result<(), AppError> {
        self.calls.borrow_mut().push(format!("create {}", name));
        Ok(())
    }

    fn compose_available(&self) -> bool {
        true
    }

    fn image_exists(&self, _image: &str) -> bool {
        true
    }

    fn pull_image(&self, image: &str) -> Result<(), AppError> {
        self.calls.borrow_mut().push(format!("pull {}", image));
        Ok(())
    }
}

struct AllFree;

impl PortProbe for AllFree {
    fn is_free(&self, _port: u16) -> bool {
        true
    }
}

#[test]
fn install_with_seeded_store_prunes_external_database() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".env"),
        "PROJECT_NAME=demo\nDB_DEPLOY_MODE=external\nDB_HOST=db.example.com\n",
    )
    .unwrap();
    let options = InstallOptions::new(temp.path());
    let runtime = StubRuntime::default();

    let outcome =
        install_with(&options, &mut NonInteractivePrompter, &mut QuietReporter, &runtime, &AllFree)
            .unwrap();

    let InstallOutcome::Deployed(deployed) = outcome else {
        panic!("expected a deployment");
    };
    assert_eq!(deployed.pruned, vec!["postgres-demo"]);
    assert!(deployed.network_created);
    assert!(deployed.pulled_images.is_empty());
    assert_eq!(*runtime.calls.borrow(), vec!["create demo-network"]);

    let store = EnvFileStore::open(options.env_path()).unwrap();
    assert_eq!(store.get("DB_HOST"), Some("db.example.com"));
    assert_eq!(store.get("REDIS_HOST"), Some("redis-demo:6379"));
}

#[test]
fn env_store_round_trips_awkward_values() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".env");
    let values = [
        ("PLAIN", "postgres123"),
        ("SPACED", "  leading and trailing  "),
        ("QUOTES", "it's \"quoted\""),
        ("MULTILINE", "line one\nline two\r\n"),
        ("SYMBOLS", "a#b $HOME ${X} !@#$%^&*"),
        ("EMPTY", ""),
    ];

    let mut store = EnvFileStore::open(&path).unwrap();
    for (name, value) in values {
        store.set(name, value).unwrap();
    }

    let reloaded = EnvFileStore::open(&path).unwrap();
    for (name, value) in values {
        assert_eq!(reloaded.get(name), Some(value), "value for {}", name);
    }
}

#[test]
fn renderer_prunes_both_components() {
    let settings: SettingsMap = [
        (PROJECT_NAME, "demo"),
        (DB_DEPLOY_MODE, "external"),
        (REDIS_DEPLOY_MODE, "external"),
    ]
    .into_iter()
    .collect();
    let renderer = ManifestRenderer::new(
        "services:\n  api-{PROJECT_NAME}:\n    depends_on:\n      - postgres-{PROJECT_NAME}\n      - redis-{PROJECT_NAME}\n  postgres-{PROJECT_NAME}: {}\n  redis-{PROJECT_NAME}: {}\nvolumes:\n  postgres_{PROJECT_NAME}_data:\n  redis_{PROJECT_NAME}_data:\n",
    );

    let rendered = renderer.render(&settings).unwrap();

    assert_eq!(rendered.manifest.service_names(), vec!["api-demo"]);
    assert!(rendered.manifest.volume_names().is_empty());
    assert!(rendered.manifest.service("api-demo").unwrap().get("depends_on").is_none());
}
