//! Client configuration baked in at build time.
//!
//! Optional:
//! - `DOCGRADE_API_BASE`: API prefix (default `/api`), trailing `/` trimmed
//! - `DOCGRADE_LOG_LEVEL`: `error`, `warn`, `info` (default), `debug`, `trace`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub log_level: log::Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl ClientConfig {
    /// Build config from raw values, applying defaults for absent ones.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLogLevel`] for an unrecognized level.
    pub fn from_values(api_base: Option<&str>, log_level: Option<&str>) -> Result<Self, ConfigError> {
        Ok(Self {
            api_base: normalize_api_base(api_base),
            log_level: parse_log_level(log_level)?,
        })
    }

    /// Config from compile-time environment. An invalid log level falls back
    /// to the default rather than failing hydration.
    pub fn from_build_env() -> Self {
        let api_base = option_env!("DOCGRADE_API_BASE");
        match Self::from_values(api_base, option_env!("DOCGRADE_LOG_LEVEL")) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using {DEFAULT_LOG_LEVEL}");
                Self {
                    api_base: normalize_api_base(api_base),
                    log_level: DEFAULT_LOG_LEVEL,
                }
            }
        }
    }
}

fn normalize_api_base(raw: Option<&str>) -> String {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(base) => base.trim_end_matches('/').to_owned(),
        None => DEFAULT_API_BASE.to_owned(),
    }
}

fn parse_log_level(raw: Option<&str>) -> Result<log::Level, ConfigError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(DEFAULT_LOG_LEVEL),
        Some(level) => level
            .parse::<log::Level>()
            .map_err(|_| ConfigError::InvalidLogLevel(level.to_owned())),
    }
}
