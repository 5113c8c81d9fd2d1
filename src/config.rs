use std::{str::FromStr, time::Duration};

use crate::error::config::ConfigError;

static DEFAULT_DATABASE_URL: &str = "sqlite://database.db?mode=rwc";
const DEFAULT_PAGE_SIZE: u64 = 100;
const DEFAULT_MAX_RETRIES: u32 = 5;
const DEFAULT_INITIAL_BACKOFF_MS: u64 = 1000;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub struct Config {
    pub database_url: String,
    pub api_url: String,
    pub api_key: String,
    pub page_size: u64,
    pub max_retries: u32,
    pub initial_backoff: Duration,
    pub request_timeout: Duration,
    /// Abort the pass on the first record that fails instead of skipping it
    pub fail_fast: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from any variable lookup, `from_env` uses the process environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required =
            |var: &str| lookup(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()));

        let page_size = parse_or(&lookup, "SYNC_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        if page_size == 0 {
            return Err(ConfigError::InvalidEnvValue {
                var: "SYNC_PAGE_SIZE".to_string(),
                reason: "page size must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            api_url: required("API_URL")?,
            api_key: required("API_KEY")?,
            page_size,
            max_retries: parse_or(&lookup, "SYNC_MAX_RETRIES", DEFAULT_MAX_RETRIES)?,
            initial_backoff: Duration::from_millis(parse_or(
                &lookup,
                "SYNC_INITIAL_BACKOFF_MS",
                DEFAULT_INITIAL_BACKOFF_MS,
            )?),
            request_timeout: Duration::from_secs(parse_or(
                &lookup,
                "SYNC_REQUEST_TIMEOUT_SECS",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?),
            fail_fast: parse_or(&lookup, "SYNC_FAIL_FAST", false)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, var: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|err: T::Err| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: err.to_string(),
            }),
    }
}
