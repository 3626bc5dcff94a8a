use std::cell::RefCell;
use std::collections::BTreeSet;

use crate::domain::AppError;
use crate::ports::ContainerRuntime;

/// In-memory container runtime that records every call.
#[derive(Debug)]
pub struct FakeRuntime {
    networks: RefCell<Vec<String>>,
    images: RefCell<BTreeSet<String>>,
    calls: RefCell<Vec<String>>,
    pub compose_installed: bool,
    pub list_fails: bool,
    pub pull_fails: bool,
}

impl Default for FakeRuntime {
    fn default() -> Self {
        Self {
            networks: RefCell::new(Vec::new()),
            images: RefCell::new(BTreeSet::new()),
            calls: RefCell::new(Vec::new()),
            compose_installed: true,
            list_fails: false,
            pull_fails: false,
        }
    }
}

impl FakeRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_networks(names: &[&str]) -> Self {
        let runtime = Self::new();
        runtime.networks.borrow_mut().extend(names.iter().map(|n| n.to_string()));
        runtime
    }

    pub fn add_image(&self, image: &str) {
        self.images.borrow_mut().insert(image.to_string());
    }

    pub fn networks(&self) -> Vec<String> {
        self.networks.borrow().clone()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Calls that change host state.
    pub fn mutations(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| c.starts_with("create_network") || c.starts_with("pull_image"))
            .collect()
    }

    fn log(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl ContainerRuntime for FakeRuntime {
    fn list_networks(&self) -> Result<Vec<String>, AppError> {
        self.log("list_networks".to_string());
        if self.list_fails {
            return Err(AppError::runtime("docker network ls", "daemon not running"));
        }
        Ok(self.networks())
    }

    fn create_network(&self, name: &str) -> Result<(), AppError> {
        self.log(format!("create_network {}", name));
        self.networks.borrow_mut().push(name.to_string());
        Ok(())
    }

    fn compose_available(&self) -> bool {
        self.log("compose_available".to_string());
        self.compose_installed
    }

    fn image_exists(&self, image: &str) -> bool {
        self.log(format!("image_exists {}", image));
        self.images.borrow().contains(image)
    }

    fn pull_image(&self, image: &str) -> Result<(), AppError> {
        self.log(format!("pull_image {}", image));
        if self.pull_fails {
            return Err(AppError::runtime(format!("docker pull {}", image), "manifest unknown"));
        }
        self.add_image(image);
        Ok(())
    }
}
