//! Line format of the answer store file.
//!
//! One `KEY=VALUE` per line. Values that need it are quoted so that any
//! string, including line breaks, survives a write and a re-read.

use crate::domain::validation::validate_setting_name;

/// A single line of an env file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvLine {
    Entry { key: String, value: String },
    /// Blank lines, comments and anything that does not parse.
    Other(String),
}

impl EnvLine {
    pub fn entry(key: &str, value: &str) -> Self {
        EnvLine::Entry { key: key.to_string(), value: value.to_string() }
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            EnvLine::Entry { key, .. } => Some(key),
            EnvLine::Other(_) => None,
        }
    }

    pub fn render(&self) -> String {
        match self {
            EnvLine::Entry { key, value } => format!("{}={}", key, quote_value(value)),
            EnvLine::Other(raw) => raw.clone(),
        }
    }
}

/// Parse file content into lines.
pub fn parse(content: &str) -> Vec<EnvLine> {
    content.lines().map(parse_line).collect()
}

/// Render lines back into file content with a trailing newline.
pub fn render(lines: &[EnvLine]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(&line.render());
        out.push('\n');
    }
    out
}

pub fn quote_value(value: &str) -> String {
    if value.chars().all(is_bare_char) {
        return value.to_string();
    }
    if !value.contains(['\'', '\n', '\r']) {
        return format!("'{}'", value);
    }

    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

fn is_bare_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "_-./:@,+".contains(c)
}

fn parse_line(raw: &str) -> EnvLine {
    let other = || EnvLine::Other(raw.to_string());

    let trimmed = raw.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return other();
    }

    let body = trimmed.strip_prefix("export ").map(str::trim_start).unwrap_or(trimmed);
    let Some((key, value)) = body.split_once('=') else {
        return other();
    };
    let key = key.trim();
    if !validate_setting_name(key) {
        return other();
    }

    let value = value.trim_start_matches([' ', '\t']);
    let parsed = match value.chars().next() {
        Some('\'') => value[1..].find('\'').map(|close| value[1..1 + close].to_string()),
        Some('"') => unescape_double(&value[1..]),
        _ => Some(strip_inline_comment(value.trim_end()).to_string()),
    };

    match parsed {
        Some(value) => EnvLine::Entry { key: key.to_string(), value },
        None => other(),
    }
}

/// Decode a double-quoted value body up to its closing quote.
fn unescape_double(input: &str) -> Option<String> {
    let mut out = String::new();
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' => return Some(out),
            '\\' => match chars.next() {
                Some('n') => out.push('\n'),
                Some('r') => out.push('\r'),
                Some('t') => out.push('\t'),
                Some(other) => out.push(other),
                None => return None,
            },
            other => out.push(other),
        }
    }

    None
}

fn strip_inline_comment(value: &str) -> &str {
    match value.find(" #") {
        Some(i) => value[..i].trim_end(),
        None => value,
    }
}
