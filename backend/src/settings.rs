//! Service configuration loaded via OrthoConfig.
//!
//! Values merge from CLI flags, `ORDER_LOOKUP_*` environment variables and an
//! optional config file. Raw fields stay optional; the accessors apply
//! defaults and validate, so a bad value is reported once at startup.

use std::env;
use std::net::SocketAddr;
use std::num::NonZeroUsize;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_CATALOG_TIMEOUT_MS: u64 = 5_000;
const DEFAULT_CATALOG_MAX_CONCURRENCY: usize = 8;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Conventional fallback for the store connection string.
pub const DATABASE_URL_FALLBACK_ENV: &str = "DATABASE_URL";

/// Invalid or missing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// A required value was not provided.
    #[error("{key} is required")]
    Missing { key: &'static str },
    /// A value was provided but is empty.
    #[error("{key} must not be blank")]
    Blank { key: &'static str },
    /// A URL could not be parsed or uses an unsupported scheme.
    #[error("{key} is not a usable URL: {message}")]
    InvalidUrl { key: &'static str, message: String },
    /// The bind address is not a socket address.
    #[error("bind_addr {value:?} is not a socket address: {message}")]
    InvalidBindAddr { value: String, message: String },
}

/// Runtime settings for the order lookup service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ORDER_LOOKUP")]
pub struct ServiceSettings {
    /// PostgreSQL connection string for the order store.
    pub database_url: Option<String>,
    /// Base URL of the model catalog; the model id is appended as a segment.
    pub catalog_base_url: Option<String>,
    /// Socket address the HTTP server binds to.
    #[ortho_config(default = DEFAULT_BIND_ADDR.to_owned())]
    pub bind_addr: String,
    /// Per-request timeout for catalog lookups, in milliseconds.
    #[ortho_config(default = DEFAULT_CATALOG_TIMEOUT_MS)]
    pub catalog_timeout_ms: u64,
    /// Catalog lookups in flight per request.
    #[ortho_config(default = DEFAULT_CATALOG_MAX_CONCURRENCY)]
    pub catalog_max_concurrency: usize,
    /// Maximum pooled store connections.
    #[ortho_config(default = DEFAULT_DB_MAX_CONNECTIONS)]
    pub db_max_connections: u32,
}

fn non_blank<'a>(value: Option<&'a str>, key: &'static str) -> Result<&'a str, SettingsError> {
    match value {
        None => Err(SettingsError::Missing { key }),
        Some(raw) if raw.trim().is_empty() => Err(SettingsError::Blank { key }),
        Some(raw) => Ok(raw.trim()),
    }
}

impl ServiceSettings {
    /// Store connection string, falling back to `DATABASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when neither source is set or the value is blank.
    pub fn database_url(&self) -> Result<String, SettingsError> {
        self.database_url_or(env::var(DATABASE_URL_FALLBACK_ENV).ok())
    }

    fn database_url_or(&self, fallback: Option<String>) -> Result<String, SettingsError> {
        let value = self.database_url.clone().or(fallback);
        non_blank(value.as_deref(), "database_url").map(str::to_owned)
    }

    /// Catalog base URL; must be absolute `http` or `https`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when missing, blank or not a usable base URL.
    pub fn catalog_base_url(&self) -> Result<Url, SettingsError> {
        const KEY: &str = "catalog_base_url";
        let raw = non_blank(self.catalog_base_url.as_deref(), KEY)?;
        let url = Url::parse(raw).map_err(|err| SettingsError::InvalidUrl {
            key: KEY,
            message: err.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(SettingsError::InvalidUrl {
                key: KEY,
                message: format!("unsupported scheme {:?}", url.scheme()),
            });
        }
        Ok(url)
    }

    /// Listener address, defaulting to `0.0.0.0:8080`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidBindAddr`] when the value does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.trim();
        raw.parse()
            .map_err(|err: std::net::AddrParseError| SettingsError::InvalidBindAddr {
                value: raw.to_owned(),
                message: err.to_string(),
            })
    }

    /// Catalog request timeout; zero is raised to one millisecond.
    pub fn catalog_timeout(&self) -> Duration {
        Duration::from_millis(self.catalog_timeout_ms.max(1))
    }

    /// Per-request catalog fan-out; zero is raised to one.
    pub fn catalog_max_concurrency(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.catalog_max_concurrency).unwrap_or(NonZeroUsize::MIN)
    }

    /// Store pool size; zero is raised to one.
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections.max(1)
    }
}
