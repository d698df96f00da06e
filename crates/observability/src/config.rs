use core::str::FromStr;

use thiserror::Error;

/// Env var selecting the log output format (`json` or `pretty`).
pub const LOG_FORMAT_ENV: &str = "ACME_LOG_FORMAT";

/// Filter directives used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown log format `{0}` (expected `json` or `pretty`)")]
    UnknownLogFormat(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Multi-line human-readable output for local runs.
    Pretty,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(ConfigError::UnknownLogFormat(s.to_string())),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Fallback `EnvFilter` directives; `RUST_LOG` wins when set.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl ObservabilityConfig {
    /// Read [`LOG_FORMAT_ENV`]; an unset variable yields the default format.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_format_var(std::env::var(LOG_FORMAT_ENV).ok().as_deref())
    }

    fn from_format_var(value: Option<&str>) -> Result<Self, ConfigError> {
        let format = match value {
            Some(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => LogFormat::default(),
        };
        Ok(Self {
            format,
            ..Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_parses_case_insensitively() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!(" Pretty ".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
    }

    #[test]
    fn unknown_log_format_is_an_error() {
        let err = "xml".parse::<LogFormat>().unwrap_err();
        assert_eq!(err, ConfigError::UnknownLogFormat("xml".to_string()));
    }

    #[test]
    fn unset_or_blank_format_falls_back_to_default() {
        assert_eq!(
            ObservabilityConfig::from_format_var(None).unwrap(),
            ObservabilityConfig::default()
        );
        assert_eq!(
            ObservabilityConfig::from_format_var(Some("  ")).unwrap().format,
            LogFormat::Json
        );
        assert_eq!(
            ObservabilityConfig::from_format_var(Some("pretty")).unwrap().format,
            LogFormat::Pretty
        );
    }
}
