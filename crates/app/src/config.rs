//! Process configuration read from the environment.

use acme_observability::{LogFormat, UnknownLogFormat};

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_VAR: &str = "ACME_LOG_FORMAT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_format: LogFormat,
    /// Set when `ACME_LOG_FORMAT` held an unknown value and the default was used.
    ///
    /// Kept so it can be reported once logging is up.
    pub rejected_log_format: Option<UnknownLogFormat>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(LOG_FORMAT_VAR).map(|raw| raw.parse::<LogFormat>()) {
            None => Self::default(),
            Some(Ok(log_format)) => Self {
                log_format,
                rejected_log_format: None,
            },
            Some(Err(err)) => Self {
                log_format: LogFormat::default(),
                rejected_log_format: Some(err),
            },
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Json,
            rejected_log_format: None,
        }
    }
}
