use std::env;
use std::num::NonZeroUsize;
use std::str::FromStr;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BOT_VERSION: &str = "Telegram Bot v20.3";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// # Probe Configuration
///
/// Read once at startup and shared read-only with every worker.
///
/// ## Environment
/// - `UPTIME_HOST`: bind host (default `0.0.0.0`)
/// - `UPTIME_PORT`: bind port (default `3000`, `0` picks an ephemeral port)
/// - `BOT_VERSION`: label reported by `/status`
/// - `UPTIME_WORKERS`: worker thread count, at least 1 (actix default when unset)
/// - `UPTIME_ACCESS_LOG`: log every request (default `false`)
/// - `UPTIME_SWAGGER_UI`: serve the OpenAPI docs (default `false`)
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub bot_version: String,
    pub workers: Option<NonZeroUsize>,
    pub access_log: bool,
    pub swagger_ui: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            bot_version: DEFAULT_BOT_VERSION.to_owned(),
            workers: None,
            access_log: false,
            swagger_ui: false,
        }
    }
}

impl Config {
    /// Reads the process environment. Callers wanting `.env` support load
    /// it first.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup, falling back to the
    /// defaults for missing keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            host: lookup("UPTIME_HOST").unwrap_or(defaults.host),
            port: parse_or("UPTIME_PORT", &lookup, defaults.port)?,
            bot_version: lookup("BOT_VERSION").unwrap_or(defaults.bot_version),
            workers: match lookup("UPTIME_WORKERS") {
                Some(raw) => Some(parse::<NonZeroUsize>("UPTIME_WORKERS", raw)?),
                None => defaults.workers,
            },
            access_log: parse_flag("UPTIME_ACCESS_LOG", &lookup, defaults.access_log)?,
            swagger_ui: parse_flag("UPTIME_SWAGGER_UI", &lookup, defaults.swagger_ui)?,
        })
    }
}

fn parse<T>(key: &'static str, raw: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
        key,
        reason: e.to_string(),
        value: raw,
    })
}

fn parse_or<T, F>(key: &'static str, lookup: &F, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => parse(key, raw),
        None => Ok(default),
    }
}

fn parse_flag<F>(key: &'static str, lookup: &F, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: raw,
            reason: "expected a boolean".to_owned(),
        }),
    }
}
