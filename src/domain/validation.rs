use std::sync::LazyLock;

use regex::Regex;

static PROJECT_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9-]{2,19}$").expect("valid project name pattern"));

static SETTING_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid setting name pattern"));

/// Validates a project name.
///
/// Checks:
/// - Starts with a lowercase letter
/// - 3 to 20 characters in total
/// - Only lowercase letters, digits and '-'
pub fn validate_project_name(name: &str) -> bool {
    PROJECT_NAME_PATTERN.is_match(name)
}

/// Whether `name` can be stored as a key in the answer store.
pub fn validate_setting_name(name: &str) -> bool {
    SETTING_NAME_PATTERN.is_match(name)
}

/// Whether a free-text value can be placed inside a single-quoted manifest scalar
/// and read back unchanged.
///
/// Single quotes would end the scalar and line breaks are folded by YAML.
pub fn validate_manifest_value(value: &str) -> bool {
    !value.contains(['\'', '\n', '\r'])
}

pub fn validate_port(port: i64) -> bool {
    (1..=65535).contains(&port)
}

/// Parse a port number, accepting surrounding whitespace.
pub fn parse_port(raw: &str) -> Option<u16> {
    let value: i64 = raw.trim().parse().ok()?;
    if validate_port(value) { u16::try_from(value).ok() } else { None }
}

/// The stored value when it is one of `choices`, otherwise the first choice.
pub fn effective_choice<'a>(choices: &[&'a str], stored: &str) -> &'a str {
    choices.iter().copied().find(|choice| *choice == stored).unwrap_or(choices[0])
}
