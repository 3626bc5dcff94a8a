use crate::domain::AppError;

/// Port for the host container system.
pub trait ContainerRuntime {
    /// Names of existing networks.
    fn list_networks(&self) -> Result<Vec<String>, AppError>;

    fn create_network(&self, name: &str) -> Result<(), AppError>;

    /// Whether a compose tool (plugin or standalone) is installed.
    fn compose_available(&self) -> bool;

    /// Whether `image` is present locally.
    fn image_exists(&self, image: &str) -> bool;

    fn pull_image(&self, image: &str) -> Result<(), AppError>;

    fn network_exists(&self, name: &str) -> Result<bool, AppError> {
        Ok(self.list_networks()?.iter().any(|n| n == name))
    }
}
