//! Per-field read protocol.
//!
//! The default is the stored value, else a fallback. A missing input channel
//! resolves to the default. Invalid answers are reported and the same field
//! is asked again. Every resolved value is saved before the next field.

use crate::app::context::WizardContext;
use crate::domain::AppError;
use crate::domain::secret::{SECRET_LENGTH, generate_secret};
use crate::domain::validation::{effective_choice, parse_port, validate_manifest_value};

const MANIFEST_VALUE_HINT: &str = "Single quotes and line breaks are not allowed";

/// Save `value` under `name` and record it for this session.
pub(crate) fn record(
    ctx: &mut WizardContext<'_>,
    name: &str,
    value: String,
) -> Result<String, AppError> {
    ctx.store.set(name, &value)?;
    ctx.settings.insert(name, value.clone());
    tracing::debug!(setting = name, "resolved setting");
    Ok(value)
}

/// Free text that must not be empty and must fit in the manifest.
pub fn read_text(
    ctx: &mut WizardContext<'_>,
    name: &str,
    label: &str,
    fallback: &str,
) -> Result<String, AppError> {
    read_validated(
        ctx,
        name,
        label,
        fallback,
        |value| !value.is_empty() && validate_manifest_value(value),
        "A value is required. Single quotes and line breaks are not allowed",
    )
}

/// Free text that may be empty, such as a password for a server without auth.
pub fn read_optional_text(
    ctx: &mut WizardContext<'_>,
    name: &str,
    label: &str,
    fallback: &str,
) -> Result<String, AppError> {
    read_validated(ctx, name, label, fallback, validate_manifest_value, MANIFEST_VALUE_HINT)
}

/// Free text checked by `is_valid`; `hint` is shown on rejection.
pub fn read_validated(
    ctx: &mut WizardContext<'_>,
    name: &str,
    label: &str,
    fallback: &str,
    is_valid: impl Fn(&str) -> bool,
    hint: &str,
) -> Result<String, AppError> {
    let default = ctx.store.get_or(name, fallback);

    loop {
        let Some(answer) = ctx.prompter.input(label, &default)? else {
            if !is_valid(&default) {
                return Err(AppError::MissingInput(name.to_string()));
            }
            ctx.reporter.info(&format!("No input available, using default for {}", name));
            return record(ctx, name, default);
        };

        if is_valid(&answer) {
            return record(ctx, name, answer);
        }
        ctx.reporter.error(hint);
    }
}

/// One of `choices`. A stored value outside the list falls back to the first entry.
pub fn read_choice(
    ctx: &mut WizardContext<'_>,
    name: &str,
    label: &str,
    choices: &[&str],
    fallback: &str,
) -> Result<String, AppError> {
    let options: Vec<(&str, &str)> = choices.iter().map(|c| (*c, *c)).collect();
    read_labeled_choice(ctx, name, label, &options, fallback)
}

/// Choice shown with display labels; the stored value is the first element of each pair.
pub fn read_labeled_choice(
    ctx: &mut WizardContext<'_>,
    name: &str,
    label: &str,
    options: &[(&str, &str)],
    fallback: &str,
) -> Result<String, AppError> {
    let values: Vec<&str> = options.iter().map(|(value, _)| *value).collect();
    let labels: Vec<String> = options.iter().map(|(_, shown)| shown.to_string()).collect();

    let stored = ctx.store.get_or(name, fallback);
    let default = effective_choice(&values, &stored);
    let default_index = values.iter().position(|v| *v == default).unwrap_or(0);

    let index = ctx.prompter.select(label, &labels, default_index)?.unwrap_or(default_index);
    let value = values.get(index).copied().unwrap_or(default);
    record(ctx, name, value.to_string())
}

/// Port in [1, 65535]. When `check_available` is set, ports in use are rejected.
pub fn read_port(
    ctx: &mut WizardContext<'_>,
    name: &str,
    label: &str,
    fallback: u16,
    check_available: bool,
) -> Result<u16, AppError> {
    let default_text = ctx.store.get_or(name, &fallback.to_string());
    let default = parse_port(&default_text);

    loop {
        let Some(answer) = ctx.prompter.input(label, &default_text)? else {
            let Some(port) = default else {
                return Err(AppError::MissingInput(name.to_string()));
            };
            if check_available && !ctx.ports.is_free(port) {
                ctx.reporter.warning(&format!("Port {} appears to be in use", port));
            }
            record(ctx, name, port.to_string())?;
            return Ok(port);
        };

        let Some(port) = parse_port(&answer) else {
            ctx.reporter.error("Port must be an integer between 1 and 65535");
            continue;
        };
        if check_available && !ctx.ports.is_free(port) {
            ctx.reporter.error(&format!("Port {} is already in use, choose another", port));
            continue;
        }
        record(ctx, name, port.to_string())?;
        return Ok(port);
    }
}

/// Reuse a stored secret, or generate one when absent or empty.
pub fn resolve_secret(
    ctx: &mut WizardContext<'_>,
    name: &str,
    description: &str,
) -> Result<String, AppError> {
    let secret = match ctx.store.get(name).filter(|s| !s.is_empty()) {
        Some(existing) => existing.to_string(),
        None => {
            ctx.reporter.warning(&format!("Generated a new {}", description));
            generate_secret(SECRET_LENGTH)
        }
    };
    record(ctx, name, secret)
}
