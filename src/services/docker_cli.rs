use std::process::{Command, Stdio};

use crate::domain::AppError;
use crate::ports::ContainerRuntime;

/// Container runtime backed by the `docker` command line.
#[derive(Debug, Clone)]
pub struct DockerCli {
    program: String,
}

impl Default for DockerCli {
    fn default() -> Self {
        Self::new("docker")
    }
}

impl DockerCli {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }

    fn command_line(&self, args: &[&str]) -> String {
        format!("{} {}", self.program, args.join(" "))
    }

    fn run(&self, args: &[&str]) -> Result<String, AppError> {
        tracing::debug!(command = %self.command_line(args), "running container runtime");

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|e| AppError::runtime(self.command_line(args), e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::runtime(
                self.command_line(args),
                if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn succeeds(program: &str, args: &[&str]) -> bool {
        Command::new(program)
            .args(args)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }
}

impl ContainerRuntime for DockerCli {
    fn list_networks(&self) -> Result<Vec<String>, AppError> {
        let stdout = self.run(&["network", "ls", "--format", "{{.Name}}"])?;
        Ok(stdout.lines().map(str::trim).filter(|l| !l.is_empty()).map(String::from).collect())
    }

    fn create_network(&self, name: &str) -> Result<(), AppError> {
        self.run(&["network", "create", name]).map(|_| ())
    }

    fn compose_available(&self) -> bool {
        Self::succeeds(&self.program, &["compose", "version"])
            || Self::succeeds("docker-compose", &["--version"])
    }

    fn image_exists(&self, image: &str) -> bool {
        Self::succeeds(&self.program, &["image", "inspect", image])
    }

    fn pull_image(&self, image: &str) -> Result<(), AppError> {
        tracing::debug!(image, "pulling image");
        // Progress goes straight to the terminal.
        let status = Command::new(&self.program)
            .args(["pull", image])
            .stdin(Stdio::null())
            .status()
            .map_err(|e| AppError::runtime(self.command_line(&["pull", image]), e.to_string()))?;

        if status.success() {
            Ok(())
        } else {
            Err(AppError::runtime(self.command_line(&["pull", image]), format!("exited with {status}")))
        }
    }
}
