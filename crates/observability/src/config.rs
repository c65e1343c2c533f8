//! Logging configuration read from the process environment.

use core::str::FromStr;

use thiserror::Error;

/// Variable holding the log filter directives.
pub const FILTER_ENV: &str = "RUST_LOG";
/// Variable selecting the log output format (`json` or `pretty`).
pub const FORMAT_ENV: &str = "DDD_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event, with timestamps.
    #[default]
    Json,
    /// Human-readable multi-line output for local development.
    Pretty,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown log format: {0} (expected `json` or `pretty`)")]
pub struct UnknownLogFormat(pub String);

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            other => Err(UnknownLogFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directives, e.g. `info,ddd_healthcare=debug`.
    pub filter: String,
    pub format: LogFormat,
    /// Set when the configured format could not be parsed and JSON was used instead.
    pub rejected_format: Option<UnknownLogFormat>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
            rejected_format: None,
        }
    }
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source (tests pass a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let filter = lookup(FILTER_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());

        let (format, rejected_format) = match lookup(FORMAT_ENV) {
            None => (LogFormat::default(), None),
            Some(raw) => match raw.parse() {
                Ok(format) => (format, None),
                Err(err) => (LogFormat::default(), Some(err)),
            },
        };

        Self {
            filter,
            format,
            rejected_format,
        }
    }
}
