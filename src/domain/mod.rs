pub mod component;
pub mod dotenv;
pub mod error;
pub mod manifest;
pub mod secret;
pub mod settings;
pub mod validation;

pub use component::{DeployMode, MANAGED_COMPONENTS, ManagedComponent};
pub use error::AppError;
pub use manifest::{Manifest, PruneReport};
pub use settings::SettingsMap;
