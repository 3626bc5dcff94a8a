//! Setting names and the session-scoped settings map.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const PROJECT_NAME: &str = "PROJECT_NAME";
pub const DEPLOY_ENV: &str = "DEPLOY_ENV";
pub const DOCKER_NETWORK: &str = "DOCKER_NETWORK";
pub const API_IMAGE_REPO: &str = "API_IMAGE_REPO";
pub const API_IMAGE_TAG: &str = "API_IMAGE_TAG";
pub const RPC_IMAGE_REPO: &str = "RPC_IMAGE_REPO";
pub const RPC_IMAGE_TAG: &str = "RPC_IMAGE_TAG";
pub const DB_DEPLOY_MODE: &str = "DB_DEPLOY_MODE";
pub const REDIS_DEPLOY_MODE: &str = "REDIS_DEPLOY_MODE";
pub const API_PORT: &str = "API_PORT";
pub const RPC_PORT: &str = "RPC_PORT";
pub const DB_PORT: &str = "DB_PORT";
pub const REDIS_PORT: &str = "REDIS_PORT";
pub const DB_TYPE: &str = "DB_TYPE";
pub const DB_USER: &str = "DB_USER";
pub const DB_PASSWORD: &str = "DB_PASSWORD";
pub const DB_NAME: &str = "DB_NAME";
pub const DB_SSL_MODE: &str = "DB_SSL_MODE";
pub const DB_HOST: &str = "DB_HOST";
pub const REDIS_PASSWORD: &str = "REDIS_PASSWORD";
pub const REDIS_DB: &str = "REDIS_DB";
pub const REDIS_POOL_SIZE: &str = "REDIS_POOL_SIZE";
pub const REDIS_HOST: &str = "REDIS_HOST";
pub const AUTH_ACCESS_SECRET: &str = "AUTH_ACCESS_SECRET";
pub const AUTH_ACCESS_EXPIRE: &str = "AUTH_ACCESS_EXPIRE";
pub const OAUTH_STATE_SECRET: &str = "OAUTH_STATE_SECRET";
pub const CAPTCHA_TYPE: &str = "CAPTCHA_TYPE";
pub const CAPTCHA_STORE_TYPE: &str = "CAPTCHA_STORE_TYPE";

/// Project name used wherever `PROJECT_NAME` has not been resolved yet.
pub const FALLBACK_PROJECT: &str = "lastadmin";

/// Masked form shown in place of password and secret values.
pub const REDACTED: &str = "********";

/// Whether a setting holds a credential that must never be displayed.
pub fn is_sensitive(name: &str) -> bool {
    name.contains("PASSWORD") || name.contains("SECRET")
}

/// Every setting resolved during one wizard run, ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsMap(BTreeMap<String, String>);

impl SettingsMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn get_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.get(name).unwrap_or(default)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Rows for the confirmation summary with credentials masked.
    pub fn redacted_rows(&self) -> Vec<(String, String)> {
        self.iter()
            .map(|(name, value)| {
                let shown = if is_sensitive(name) { REDACTED } else { value };
                (name.to_string(), shown.to_string())
            })
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SettingsMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = SettingsMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}
