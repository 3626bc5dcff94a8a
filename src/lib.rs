//! stackup: interactive installer that saves deployment answers to `.env`
//! and renders them into a `docker-compose.yml` manifest.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    DeployOutcome, ENV_FILENAME, InstallOptions, InstallOutcome, MANIFEST_FILENAME, install,
    install_with,
};
pub use domain::{AppError, SettingsMap};
