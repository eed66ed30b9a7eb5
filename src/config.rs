// Application configuration.
// Reads an optional config.toml, then applies ROSTER_* environment overrides.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, RosterError};
use crate::paths;

pub const API_URL_VAR: &str = "ROSTER_API_URL";
pub const API_KEY_VAR: &str = "ROSTER_API_KEY";
pub const LOG_VAR: &str = "ROSTER_LOG";

const DEFAULT_LOG_FILTER: &str = "roster=info";

/// Values as they appear in config.toml, all optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    api_url: Option<String>,
    api_key: Option<String>,
    log_filter: Option<String>,
    cache_quota: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the student API, without a trailing slash.
    pub api_url: String,
    /// Value sent in the `x-api-key` header.
    pub api_key: String,
    /// `tracing` filter directive for the log file.
    pub log_filter: String,
    /// Byte limit for the session cache; unbounded when unset.
    pub cache_quota: Option<usize>,
}

impl Config {
    /// Load from the platform config file and the process environment.
    pub fn load() -> Result<Self> {
        let path = paths::config_path();
        Self::load_from(path.as_deref(), |name| std::env::var(name).ok())
    }

    /// Load from `path` (if it exists) with overrides looked up through `env`.
    pub fn load_from(path: Option<&Path>, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let file: FileConfig = match path {
            Some(path) if path.exists() => toml::from_str(&fs::read_to_string(path)?)?,
            _ => FileConfig::default(),
        };

        let pick = |var: &str, fallback: Option<String>| {
            env(var)
                .filter(|value| !value.trim().is_empty())
                .or(fallback)
        };

        let api_url =
            pick(API_URL_VAR, file.api_url).ok_or(RosterError::MissingConfig(API_URL_VAR))?;
        let api_key =
            pick(API_KEY_VAR, file.api_key).ok_or(RosterError::MissingConfig(API_KEY_VAR))?;
        let log_filter =
            pick(LOG_VAR, file.log_filter).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key,
            log_filter,
            cache_quota: file.cache_quota,
        })
    }
}
