mod atomic_file;
mod console_reporter;
mod dialoguer_prompter;
mod docker_cli;
mod env_file_store;
mod line_prompter;
mod manifest_renderer;
mod non_interactive_prompter;
mod session_lock;
mod tcp_port_probe;

pub use atomic_file::{TEMP_PREFIX, remove_stale_temp_files};
pub use console_reporter::ConsoleReporter;
pub use dialoguer_prompter::DialoguerPrompter;
pub use docker_cli::DockerCli;
pub use env_file_store::EnvFileStore;
pub use line_prompter::LinePrompter;
pub use manifest_renderer::{ManifestRenderer, PlaceholderPolicy, Rendered, write_manifest};
pub use non_interactive_prompter::NonInteractivePrompter;
pub use session_lock::{LOCK_FILENAME, LockMetadata, SessionLock};
pub use tcp_port_probe::TcpPortProbe;
