//! Connection configuration read from the process environment.

use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgSslMode};
use thiserror::Error;

/// Connection string variable.
pub const URL_VAR: &str = "POSTGRES_URL";
/// Checked when [`URL_VAR`] is unset.
pub const FALLBACK_URL_VAR: &str = "DATABASE_URL";
/// Transport security mode, `require` unless set.
pub const SSL_MODE_VAR: &str = "POSTGRES_SSLMODE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("POSTGRES_URL (or DATABASE_URL) must be set")]
    MissingUrl,

    #[error("invalid POSTGRES_SSLMODE value: {0}")]
    SslMode(String),

    #[error("invalid connection string: {0}")]
    InvalidUrl(#[source] sqlx::Error),
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub ssl_mode: PgSslMode,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ssl_mode: PgSslMode::Require,
        }
    }

    pub fn with_ssl_mode(mut self, ssl_mode: PgSslMode) -> Self {
        self.ssl_mode = ssl_mode;
        self
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let url = lookup(URL_VAR)
            .or_else(|| lookup(FALLBACK_URL_VAR))
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingUrl)?;

        let ssl_mode = match lookup(SSL_MODE_VAR) {
            Some(mode) => {
                PgSslMode::from_str(mode.trim()).map_err(|_| ConfigError::SslMode(mode))?
            }
            None => PgSslMode::Require,
        };

        Ok(Self { url, ssl_mode })
    }

    /// Connection options with the configured SSL mode applied on top of
    /// whatever the URL specifies.
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        let options = PgConnectOptions::from_str(&self.url).map_err(ConfigError::InvalidUrl)?;
        Ok(options.ssl_mode(self.ssl_mode))
    }
}
