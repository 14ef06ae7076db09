//! Service configuration loaded via OrthoConfig.
//!
//! Every value can come from the command line, a configuration file or a
//! `POSTFEED_*` environment variable. Unset values fall back to the defaults
//! below.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Listener address used when none is configured.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
/// Replica set connection string used when none is configured.
pub const DEFAULT_MONGODB_URI: &str =
    "mongodb://localhost:27017,localhost:27018,localhost:27019/?replicaSet=rs0";
/// Database name used when none is configured.
pub const DEFAULT_DATABASE: &str = "postfeed";

/// Storage backend selected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// MongoDB replica set reached through `mongodb_uri`.
    Mongodb,
    /// Process-local store; contents are lost on exit.
    Memory,
}

/// Invalid configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// `bind_addr` is not a socket address.
    #[error("invalid bind address {value:?}: {message}")]
    InvalidBindAddr {
        /// Rejected value.
        value: String,
        /// Parser message.
        message: String,
    },
    /// `store` names an unknown backend.
    #[error("unknown store {value:?}; expected \"mongodb\" or \"memory\"")]
    UnknownStore {
        /// Rejected value.
        value: String,
    },
}

/// Configuration for the postfeed service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "POSTFEED")]
pub struct ServiceSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// MongoDB connection string.
    pub mongodb_uri: Option<String>,
    /// Database holding the `users` and `posts` collections.
    pub database: Option<String>,
    /// Storage backend: `mongodb` or `memory`.
    pub store: Option<String>,
    /// Pin the example data RNG seed for reproducible identifiers.
    pub rng_seed: Option<u64>,
    /// Seed example data before serving.
    #[ortho_config(default = false)]
    pub seed_on_startup: bool,
}

impl ServiceSettings {
    /// Parsed listener address.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidBindAddr`] when the value does not
    /// parse as `host:port`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|err: std::net::AddrParseError| {
            SettingsError::InvalidBindAddr {
                value: raw.to_owned(),
                message: err.to_string(),
            }
        })
    }

    /// Connection string, falling back to the local replica set.
    pub fn mongodb_uri(&self) -> &str {
        self.mongodb_uri.as_deref().unwrap_or(DEFAULT_MONGODB_URI)
    }

    /// Database name, falling back to `postfeed`.
    pub fn database(&self) -> &str {
        self.database.as_deref().unwrap_or(DEFAULT_DATABASE)
    }

    /// Selected storage backend.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::UnknownStore`] for anything other than
    /// `mongodb` or `memory` (case-insensitive).
    pub fn store(&self) -> Result<StoreKind, SettingsError> {
        match self.store.as_deref().map(str::trim) {
            None => Ok(StoreKind::Mongodb),
            Some(value) if value.eq_ignore_ascii_case("mongodb") => Ok(StoreKind::Mongodb),
            Some(value) if value.eq_ignore_ascii_case("memory") => Ok(StoreKind::Memory),
            Some(value) => Err(SettingsError::UnknownStore {
                value: value.to_owned(),
            }),
        }
    }
}
