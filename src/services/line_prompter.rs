//! Plain line-oriented prompts for piped input and scripted installs.

use std::io::{self, BufRead, Write};

use crate::domain::AppError;
use crate::ports::Prompter;

/// Reads one answer per line. End of input means no input channel.
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl LinePrompter<io::StdinLock<'static>, io::Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => {
                writeln!(self.writer)?;
                Ok(None)
            }
            Ok(_) => Ok(Some(line.trim().to_string())),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => Err(AppError::Interrupted),
            Err(e) => Err(AppError::Prompt(e.to_string())),
        }
    }

    fn retry(&mut self, message: &str) -> Result<(), AppError> {
        writeln!(self.writer, "✗ {}", message)?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn input(&mut self, label: &str, default: &str) -> Result<Option<String>, AppError> {
        let prompt = if default.is_empty() {
            format!("{}: ", label)
        } else {
            format!("{} [{}]: ", label, default)
        };

        Ok(self.ask(&prompt)?.map(|answer| if answer.is_empty() { default.to_string() } else { answer }))
    }

    fn select(
        &mut self,
        label: &str,
        items: &[String],
        default: usize,
    ) -> Result<Option<usize>, AppError> {
        writeln!(self.writer, "{}", label)?;
        for (i, item) in items.iter().enumerate() {
            writeln!(self.writer, "  {}. {}", i + 1, item)?;
        }

        loop {
            let Some(answer) = self.ask(&format!("Select [{}]: ", default + 1))? else {
                return Ok(None);
            };
            if answer.is_empty() {
                return Ok(Some(default));
            }
            match answer.parse::<usize>() {
                Ok(n) if (1..=items.len()).contains(&n) => return Ok(Some(n - 1)),
                _ => self.retry("Invalid choice, please try again")?,
            }
        }
    }

    fn confirm(&mut self, label: &str, default: bool) -> Result<Option<bool>, AppError> {
        let hint = if default { "Y/n" } else { "y/N" };

        loop {
            let Some(answer) = self.ask(&format!("{} [{}]: ", label, hint))? else {
                return Ok(None);
            };
            match answer.to_ascii_lowercase().as_str() {
                "" => return Ok(Some(default)),
                "y" | "yes" => return Ok(Some(true)),
                "n" | "no" => return Ok(Some(false)),
                _ => self.retry("Please answer y or n")?,
            }
        }
    }
}
