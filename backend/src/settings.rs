//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `EMPLOYEES_*` environment variables and
//! configuration files, in OrthoConfig's usual precedence. Every field is
//! optional; accessors supply the defaults.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_POOL_MAX_SIZE: u32 = 10;
const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

/// Failure to turn settings into a usable value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// The configured host is not an IP address.
    #[error("invalid host address `{host}`")]
    InvalidHost {
        /// Rejected value.
        host: String,
    },
}

/// Configuration values for the HTTP server and its store.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EMPLOYEES")]
pub struct ServerSettings {
    /// Interface to bind; defaults to all interfaces.
    pub host: Option<String>,
    /// Port to bind; defaults to 5000.
    pub port: Option<u16>,
    /// PostgreSQL URL. Without one, records are kept in memory.
    pub database_url: Option<String>,
    /// Comma-separated origins allowed by CORS.
    pub allowed_origins: Option<String>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
}

impl ServerSettings {
    /// Socket address the server binds to.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidHost`] when `host` is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let ip = match self.host.as_deref() {
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            Some(host) => host.parse().map_err(|_| SettingsError::InvalidHost {
                host: host.to_owned(),
            })?,
        };
        Ok(SocketAddr::new(ip, self.port.unwrap_or(DEFAULT_PORT)))
    }

    /// Origins echoed by the CORS middleware.
    #[must_use]
    pub fn allowed_origins(&self) -> Vec<String> {
        match self.allowed_origins.as_deref() {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_owned)
                .collect(),
            None => DEFAULT_ALLOWED_ORIGINS.map(str::to_owned).to_vec(),
        }
    }

    /// Database URL, if one is configured and non-blank.
    #[must_use]
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Maximum number of pooled connections.
    #[must_use]
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn unset() -> ServerSettings {
        ServerSettings {
            host: None,
            port: None,
            database_url: None,
            allowed_origins: None,
            pool_max_size: None,
        }
    }

    const VARS: [&str; 5] = [
        "EMPLOYEES_HOST",
        "EMPLOYEES_PORT",
        "EMPLOYEES_DATABASE_URL",
        "EMPLOYEES_ALLOWED_ORIGINS",
        "EMPLOYEES_POOL_MAX_SIZE",
    ];

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("employees-backend")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("default host"),
            SocketAddr::from(([0, 0, 0, 0], 5000))
        );
        assert!(settings.database_url().is_none());
        assert_eq!(
            settings.allowed_origins(),
            ["http://localhost:3000", "http://127.0.0.1:3000"]
        );
        assert_eq!(settings.pool_max_size(), 10);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("EMPLOYEES_HOST", Some("127.0.0.1".to_owned())),
            ("EMPLOYEES_PORT", Some("8080".to_owned())),
            (
                "EMPLOYEES_DATABASE_URL",
                Some("postgres://localhost/employees".to_owned()),
            ),
            (
                "EMPLOYEES_ALLOWED_ORIGINS",
                Some("https://a.example, https://b.example".to_owned()),
            ),
            ("EMPLOYEES_POOL_MAX_SIZE", Some("3".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("valid host"),
            SocketAddr::from(([127, 0, 0, 1], 8080))
        );
        assert_eq!(
            settings.database_url(),
            Some("postgres://localhost/employees")
        );
        assert_eq!(
            settings.allowed_origins(),
            ["https://a.example", "https://b.example"]
        );
        assert_eq!(settings.pool_max_size(), 3);
    }

    #[rstest]
    fn invalid_host_is_reported() {
        let settings = ServerSettings {
            host: Some("not an address".to_owned()),
            ..unset()
        };
        assert_eq!(
            settings.bind_addr(),
            Err(SettingsError::InvalidHost {
                host: "not an address".to_owned()
            })
        );
    }

    #[rstest]
    fn blank_database_url_selects_memory_store() {
        let settings = ServerSettings {
            database_url: Some("   ".to_owned()),
            ..unset()
        };
        assert!(settings.database_url().is_none());
    }
}
