use std::str::FromStr;

use prsk_core::audit::DEFAULT_ACTOR;

/// Default number of pooled database connections.
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 20;

/// Width of the `created_by`/`updated_by` audit columns.
pub const MAX_AUDIT_ACTOR_LEN: usize = 64;

/// Error raised when an environment variable is missing or malformed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} has an invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Log output format selected by `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("expected 'text' or 'json', got '{other}'")),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Actor stamped into audit columns on every write (default: `guest`).
    pub audit_actor: String,
    /// Log output format (default: text).
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `AUDIT_ACTOR`          | `guest`                    |
    /// | `LOG_FORMAT`           | `text`                     |
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = parse_env("PORT", 3000u16)?;

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = parse_env("REQUEST_TIMEOUT_SECS", 30u64)?;
        let audit_actor = match std::env::var("AUDIT_ACTOR") {
            Ok(raw) => check_audit_actor(raw)?,
            Err(_) => DEFAULT_ACTOR.into(),
        };
        let log_format = parse_env("LOG_FORMAT", LogFormat::Text)?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            audit_actor,
            log_format,
        })
    }
}

/// Database connection settings.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// `DATABASE_URL` (required).
    pub url: String,
    /// `DB_MAX_CONNECTIONS` (default: `20`).
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = std::env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;
        let max_connections = parse_env("DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?;
        Ok(Self {
            url,
            max_connections,
        })
    }
}

/// Read `var`, falling back to `default` when unset.
fn parse_env<T>(var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(var) {
        Ok(raw) => parse_value(var, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(var: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

/// The actor is written verbatim into `VARCHAR(64)` columns.
fn check_audit_actor(raw: String) -> Result<String, ConfigError> {
    let len = raw.chars().count();
    if len > MAX_AUDIT_ACTOR_LEN {
        return Err(ConfigError::Invalid {
            var: "AUDIT_ACTOR",
            value: raw,
            reason: format!("must be at most {MAX_AUDIT_ACTOR_LEN} characters, got {len}"),
        });
    }
    Ok(raw)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parses_numbers_with_whitespace() {
        let port: u16 = parse_value("PORT", " 8080 ").unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn invalid_number_names_the_variable() {
        let err = parse_value::<u16>("PORT", "eighty").unwrap_err();
        assert_matches!(err, ConfigError::Invalid { var: "PORT", .. });
        assert!(err.to_string().starts_with("PORT has an invalid value 'eighty'"));
    }

    #[test]
    fn log_format_parsing() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("TEXT".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn audit_actor_fits_the_audit_columns() {
        let at_limit = "a".repeat(MAX_AUDIT_ACTOR_LEN);
        assert_eq!(check_audit_actor(at_limit.clone()).unwrap(), at_limit);

        let err = check_audit_actor("a".repeat(MAX_AUDIT_ACTOR_LEN + 1)).unwrap_err();
        assert_matches!(err, ConfigError::Invalid { var: "AUDIT_ACTOR", .. });
    }

    #[test]
    fn audit_actor_length_counts_characters() {
        // 64 three-byte characters still fit a VARCHAR(64).
        let kana = "ミ".repeat(MAX_AUDIT_ACTOR_LEN);
        assert!(check_audit_actor(kana).is_ok());
    }
}
