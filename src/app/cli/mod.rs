//! CLI adapter.

use std::path::PathBuf;

use clap::Parser;
use console::{Term, style};
use tracing_subscriber::EnvFilter;

use crate::app::api::{self, InstallOptions, InstallOutcome};
use crate::domain::AppError;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "STACKUP_LOG";

#[derive(Parser)]
#[command(name = "stackup")]
#[command(version)]
#[command(
    about = "Interactive installer that saves answers to .env and renders docker-compose.yml",
    long_about = None
)]
struct Cli {
    /// Installation directory (defaults to the current directory)
    install_dir: Option<PathBuf>,

    /// Compose template to render instead of the built-in one
    #[arg(short, long, value_name = "PATH")]
    template: Option<PathBuf>,

    /// Never prompt; use saved answers and defaults
    #[arg(long)]
    non_interactive: bool,

    /// Deploy without asking for confirmation
    #[arg(short, long)]
    yes: bool,

    /// Fail when the rendered manifest still contains {NAME} placeholders
    #[arg(long)]
    strict_placeholders: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}

fn install_interrupt_handler() {
    let result = ctrlc::set_handler(|| {
        let term = Term::stderr();
        let _ = term.show_cursor();
        let _ = term.write_line("");
        let _ = term.write_line(&style(INTERRUPTED_MESSAGE).yellow().to_string());
        std::process::exit(0);
    });
    if let Err(e) = result {
        tracing::warn!(error = %e, "could not install interrupt handler");
    }
}

const INTERRUPTED_MESSAGE: &str =
    "⚠ Installation interrupted. Saved answers are kept and will be reused next run.";

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    install_interrupt_handler();

    let install_dir = match cli.install_dir {
        Some(dir) => dir,
        None => match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => fail(&AppError::from(e)),
        },
    };

    let options = InstallOptions {
        install_dir,
        template: cli.template,
        non_interactive: cli.non_interactive,
        assume_yes: cli.yes,
        strict_placeholders: cli.strict_placeholders,
    };
    let env_path = options.env_path();
    let term = Term::stdout();

    match api::install(&options) {
        Ok(InstallOutcome::Deployed(outcome)) => {
            let dir = options.install_dir.display();
            let _ = term.write_line("");
            let _ = term.write_line(&style("✓ Deployment prepared").green().to_string());
            let _ = term.write_line(&format!("  Configuration: {}", env_path.display()));
            let _ = term.write_line(&format!("  Manifest:      {}", outcome.manifest_path.display()));
            let _ = term.write_line(&style("Next steps:").cyan().to_string());
            let _ = term.write_line(&format!("  1. cd {}", dir));
            let _ = term.write_line("  2. docker compose up -d");
            let _ = term.write_line("  3. docker compose logs -f");
        }
        Ok(InstallOutcome::Declined) => {
            let _ = term.write_line(
                &style(format!("⚠ Deployment cancelled. Configuration saved to {}", env_path.display()))
                    .yellow()
                    .to_string(),
            );
        }
        Err(e) if e.is_interruption() => {
            let _ = Term::stderr().write_line(&style(INTERRUPTED_MESSAGE).yellow().to_string());
        }
        Err(e) => {
            if e.is_deployment_failure() {
                eprintln!("Configuration saved to {}; re-run to resume.", env_path.display());
            }
            fail(&e);
        }
    }
}

fn fail(e: &AppError) -> ! {
    eprintln!("Error: {}", e);
    std::process::exit(1);
}
