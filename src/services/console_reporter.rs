//! Terminal output for the wizard.

use console::{Term, style};

use crate::ports::Reporter;

pub mod symbols {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const INFO: &str = "ℹ";
}

/// Writes progress to stdout and problems to stderr.
#[derive(Debug)]
pub struct ConsoleReporter {
    out: Term,
    err: Term,
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self { out: Term::stdout(), err: Term::stderr() }
    }
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    // Output is best effort; a closed stdout must not abort the session.
    fn line(term: &Term, text: &str) {
        let _ = term.write_line(text);
    }
}

impl Reporter for ConsoleReporter {
    fn header(&mut self, title: &str) {
        let rule = "─".repeat(title.chars().count() + 4);
        Self::line(&self.out, &format!("┌{}┐", rule));
        Self::line(&self.out, &format!("│  {}  │", style(title).green().bold()));
        Self::line(&self.out, &format!("└{}┘", rule));
    }

    fn stage(&mut self, index: usize, title: &str) {
        Self::line(&self.out, "");
        Self::line(&self.out, &style(format!("Stage {}: {}", index, title)).cyan().bold().to_string());
    }

    fn success(&mut self, message: &str) {
        Self::line(&self.out, &format!("{} {}", style(symbols::SUCCESS).green(), message));
    }

    fn info(&mut self, message: &str) {
        Self::line(&self.out, &format!("{} {}", style(symbols::INFO).cyan(), message));
    }

    fn warning(&mut self, message: &str) {
        Self::line(
            &self.err,
            &format!("{} {}", style(symbols::WARNING).yellow(), style(message).yellow()),
        );
    }

    fn error(&mut self, message: &str) {
        Self::line(&self.err, &format!("{} {}", style(symbols::ERROR).red(), style(message).red()));
    }

    fn summary(&mut self, title: &str, rows: &[(String, String)]) {
        let width = rows.iter().map(|(name, _)| name.len()).max().unwrap_or(0);

        Self::line(&self.out, "");
        Self::line(&self.out, &style(title).cyan().bold().to_string());
        for (name, value) in rows {
            Self::line(
                &self.out,
                &format!("  {}  {}", style(format!("{:width$}", name)).cyan(), style(value).magenta()),
            );
        }
    }
}
