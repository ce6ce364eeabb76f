//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CARVED_ROCK_DATABASE_URL` - `PostgreSQL` connection string. Falls back
//!   to the generic `DATABASE_URL`. When neither is set, or the value is
//!   empty, the product catalog serves built-in sample data and the cart
//!   store refuses to start.

use secrecy::SecretString;
use thiserror::Error;

/// Primary environment variable for the database connection string.
pub const DATABASE_URL_VAR: &str = "CARVED_ROCK_DATABASE_URL";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A component that cannot operate without a database was built from an
    /// unconfigured environment.
    #[error("missing database connection string: set {0}")]
    MissingDatabaseUrl(&'static str),
}

/// Storefront data-layer configuration.
///
/// The database mode is decided once, when the value is read: components
/// constructed from this configuration never re-check the environment.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// `PostgreSQL` connection URL (contains password). `None` when unset or
    /// empty, which puts the product catalog in sample-data mode.
    pub database_url: Option<SecretString>,
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    #[must_use]
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        Self {
            database_url: get_database_url(DATABASE_URL_VAR),
        }
    }

    /// Build a configuration from an explicit connection string value.
    ///
    /// Mirrors [`Self::from_env`] semantics: an empty value means "not
    /// configured".
    #[must_use]
    pub fn from_database_url(url: impl Into<String>) -> Self {
        Self {
            database_url: normalize(Some(url.into())),
        }
    }

    /// Whether a database is configured.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.database_url.is_some()
    }

    /// The connection string, for components that cannot operate without a
    /// database (the cart store).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingDatabaseUrl`] when unconfigured.
    pub fn require_database_url(&self) -> Result<&SecretString, ConfigError> {
        self.database_url
            .as_ref()
            .ok_or(ConfigError::MissingDatabaseUrl(DATABASE_URL_VAR))
    }
}

/// Get the database URL with fallback to generic `DATABASE_URL` (used by
/// platform postgres attach).
fn get_database_url(primary_key: &str) -> Option<SecretString> {
    let value = std::env::var(primary_key)
        .ok()
        .or_else(|| std::env::var("DATABASE_URL").ok());
    normalize(value)
}

/// Treat unset and empty values the same: both mean "no database".
fn normalize(value: Option<String>) -> Option<SecretString> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(SecretString::from)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_url_is_unconfigured() {
        let config = StoreConfig::from_database_url("");
        assert!(!config.is_configured());
        assert!(config.require_database_url().is_err());
    }

    #[test]
    fn test_whitespace_url_is_unconfigured() {
        let config = StoreConfig::from_database_url("   ");
        assert!(!config.is_configured());
    }

    #[test]
    fn test_set_url_is_configured() {
        let config = StoreConfig::from_database_url("postgres://localhost/carved_rock");
        assert!(config.is_configured());
        assert!(config.require_database_url().is_ok());
    }

    #[test]
    fn test_missing_url_error_names_the_variable() {
        let config = StoreConfig { database_url: None };
        let err = config.require_database_url().unwrap_err();
        assert!(err.to_string().contains(DATABASE_URL_VAR));
    }
}
