//! The nine configuration stages, in execution order.

use crate::app::context::WizardContext;
use crate::app::wizard::fields::{
    read_choice, read_labeled_choice, read_optional_text, read_port, read_text, read_validated,
    record, resolve_secret,
};
use crate::domain::component::{CACHE, DATABASE};
use crate::domain::settings::*;
use crate::domain::validation::validate_project_name;
use crate::domain::{AppError, DeployMode};

pub const CREATE_NETWORK: &str = "Create new network";
pub const CUSTOM_NETWORK: &str = "Enter a custom name";

pub const DEPLOY_ENVS: [&str; 3] = ["dev", "test", "prod"];
pub const DB_TYPES: [&str; 3] = ["postgres", "mysql", "sqlite3"];
pub const DB_SSL_MODES: [&str; 3] = ["disable", "require", "prefer"];
pub const CAPTCHA_STORES: [&str; 2] = ["memory", "redis"];
pub const CAPTCHA_TYPES: [(&str, &str); 6] = [
    ("digit", "digit (digits)"),
    ("string", "string (letters and digits)"),
    ("math", "math (arithmetic)"),
    ("chinese", "chinese (Chinese characters)"),
    ("audio", "audio (spoken)"),
    ("random", "random (any of the above)"),
];

pub fn project(ctx: &mut WizardContext<'_>) -> Result<(), AppError> {
    read_validated(
        ctx,
        PROJECT_NAME,
        "Project name (a-z, 3-20 characters)",
        FALLBACK_PROJECT,
        validate_project_name,
        "Project name must start with a lowercase letter and use 3-20 of a-z, 0-9 or '-'",
    )?;
    read_choice(ctx, DEPLOY_ENV, "Deployment environment", &DEPLOY_ENVS, "prod")?;
    ctx.reporter.success("Project settings saved");
    Ok(())
}

pub fn network(ctx: &mut WizardContext<'_>) -> Result<(), AppError> {
    let existing = match ctx.runtime.list_networks() {
        Ok(networks) => networks,
        Err(e) => {
            tracing::warn!(error = %e, "could not list container networks");
            Vec::new()
        }
    };

    let mut choices = vec![CREATE_NETWORK.to_string(), CUSTOM_NETWORK.to_string()];
    choices.extend(existing);

    // A saved name that is not listed yet goes through the custom entry.
    // A saved derived name is derived again from the current project.
    let stored = ctx.store.get_or(DOCKER_NETWORK, "");
    let derived = format!("{}-network", ctx.project());
    let default_index = match choices.iter().position(|c| *c == stored) {
        Some(index) => index,
        None if !stored.is_empty() && stored != derived => 1,
        None => 0,
    };
    let index = ctx.prompter.select("Docker network", &choices, default_index)?.unwrap_or(default_index);

    let name = match index {
        0 => derived,
        1 => read_text(ctx, DOCKER_NETWORK, "Docker network name", "")?,
        _ => choices
            .get(index)
            .cloned()
            .ok_or_else(|| AppError::Prompt(format!("Network choice {} is out of range", index)))?,
    };
    if index != 1 {
        record(ctx, DOCKER_NETWORK, name.clone())?;
    }

    ctx.reporter.success(&format!("Docker network set to {}", name));
    Ok(())
}

pub fn images(ctx: &mut WizardContext<'_>) -> Result<(), AppError> {
    read_text(ctx, API_IMAGE_REPO, "API image repository", "wenpiner/last-admin-api")?;
    read_text(ctx, API_IMAGE_TAG, "API image tag", "latest")?;
    read_text(ctx, RPC_IMAGE_REPO, "RPC image repository", "wenpiner/last-admin-rpc")?;
    read_text(ctx, RPC_IMAGE_TAG, "RPC image tag", "latest")?;
    ctx.reporter.success("Image settings saved");
    Ok(())
}

pub fn deploy_modes(ctx: &mut WizardContext<'_>) -> Result<(), AppError> {
    let options: Vec<(&str, &str)> = DeployMode::ALL.iter().map(|m| (m.as_str(), m.label())).collect();
    let fallback = DeployMode::SelfHosted.as_str();

    read_labeled_choice(ctx, DATABASE.mode_setting, "Database deployment", &options, fallback)?;
    read_labeled_choice(ctx, CACHE.mode_setting, "Redis deployment", &options, fallback)?;
    ctx.reporter.success("Deployment modes saved");
    Ok(())
}

pub fn ports(ctx: &mut WizardContext<'_>) -> Result<(), AppError> {
    let db_local = ctx.deploy_mode(&DATABASE).is_self_hosted();
    let cache_local = ctx.deploy_mode(&CACHE).is_self_hosted();

    read_port(ctx, API_PORT, "API port", 8889, true)?;
    read_port(ctx, RPC_PORT, "RPC port", 8080, true)?;
    read_port(ctx, DB_PORT, "Database port", 5432, db_local)?;
    read_port(ctx, REDIS_PORT, "Redis port", 6379, cache_local)?;
    ctx.reporter.success("Port settings saved");
    Ok(())
}

pub fn database(ctx: &mut WizardContext<'_>) -> Result<(), AppError> {
    let default_name = format!("{}_db", ctx.project());

    read_choice(ctx, DB_TYPE, "Database type", &DB_TYPES, "postgres")?;
    read_text(ctx, DB_USER, "Database user", "postgres")?;
    read_optional_text(ctx, DB_PASSWORD, "Database password", "postgres123")?;
    read_text(ctx, DB_NAME, "Database name", &default_name)?;
    read_choice(ctx, DB_SSL_MODE, "SSL mode", &DB_SSL_MODES, "disable")?;

    if ctx.deploy_mode(&DATABASE).is_self_hosted() {
        let host = DATABASE.service_name(ctx.project());
        ctx.reporter.info(&format!("Database runs in docker, host set to {}", host));
        record(ctx, DB_HOST, host)?;
    } else {
        read_text(ctx, DB_HOST, "Database host (external)", "localhost")?;
    }

    ctx.reporter.success("Database settings saved");
    Ok(())
}

pub fn cache(ctx: &mut WizardContext<'_>) -> Result<(), AppError> {
    read_optional_text(ctx, REDIS_PASSWORD, "Redis password", "redis123")?;
    read_text(ctx, REDIS_DB, "Redis database number", "0")?;
    read_text(ctx, REDIS_POOL_SIZE, "Redis pool size", "10")?;

    if ctx.deploy_mode(&CACHE).is_self_hosted() {
        // In-network port is fixed regardless of the published REDIS_PORT.
        let host = format!("{}:6379", CACHE.service_name(ctx.project()));
        ctx.reporter.info(&format!("Redis runs in docker, host set to {}", host));
        record(ctx, REDIS_HOST, host)?;
    } else {
        read_text(ctx, REDIS_HOST, "Redis host (external, host:port)", "localhost:6379")?;
    }

    ctx.reporter.success("Redis settings saved");
    Ok(())
}

pub fn auth(ctx: &mut WizardContext<'_>) -> Result<(), AppError> {
    resolve_secret(ctx, AUTH_ACCESS_SECRET, "JWT signing secret")?;
    read_text(ctx, AUTH_ACCESS_EXPIRE, "Token lifetime (seconds)", "360000")?;
    resolve_secret(ctx, OAUTH_STATE_SECRET, "OAuth state secret")?;
    ctx.reporter.success("Authentication settings saved");
    Ok(())
}

pub fn captcha(ctx: &mut WizardContext<'_>) -> Result<(), AppError> {
    read_labeled_choice(ctx, CAPTCHA_TYPE, "Captcha type", &CAPTCHA_TYPES, "random")?;
    read_choice(ctx, CAPTCHA_STORE_TYPE, "Captcha store", &CAPTCHA_STORES, "redis")?;
    ctx.reporter.success("Captcha settings saved");
    Ok(())
}
