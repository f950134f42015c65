//! bb8 pool of `diesel-async` PostgreSQL connections for the employee store.
//!
//! Checkout failures are split into "pool exhausted" and "database refused
//! the connection" so the logs say which one took the store down; both reach
//! clients as the same redacted internal error.

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection, RunError};

use crate::settings::ServerSettings;

const CHECKOUT_TIMEOUT: Duration = Duration::from_secs(30);

/// Why a connection could not be handed out.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// No connection became available before the checkout timeout.
    #[error("timed out after {timeout:?} waiting for a database connection")]
    Timeout {
        /// Checkout timeout that elapsed.
        timeout: Duration,
    },

    /// The database rejected or dropped a new connection.
    #[error("database connection failed: {message}")]
    Connect {
        /// Driver failure.
        message: String,
    },

    /// The pool could not be built at startup.
    #[error("failed to build connection pool: {message}")]
    Build {
        /// Underlying failure.
        message: String,
    },
}

/// Sizing and timeout for the employee store pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    checkout_timeout: Duration,
}

impl PoolConfig {
    /// Pool of at most `max_size` connections to `database_url`.
    pub fn new(database_url: impl Into<String>, max_size: u32) -> Self {
        Self {
            database_url: database_url.into(),
            max_size,
            checkout_timeout: CHECKOUT_TIMEOUT,
        }
    }

    /// Pool configuration for the store named by `settings`, or `None` when
    /// no database URL is configured and the in-memory store is used.
    ///
    /// ```
    /// use employees_backend::outbound::persistence::PoolConfig;
    /// use employees_backend::settings::ServerSettings;
    ///
    /// let settings = ServerSettings {
    ///     host: None,
    ///     port: None,
    ///     database_url: Some("postgres://localhost/employees".into()),
    ///     allowed_origins: None,
    ///     pool_max_size: Some(4),
    /// };
    /// let config = PoolConfig::from_settings(&settings).expect("database configured");
    /// assert_eq!(config.max_size(), 4);
    /// ```
    #[must_use]
    pub fn from_settings(settings: &ServerSettings) -> Option<Self> {
        settings
            .database_url()
            .map(|url| Self::new(url, settings.pool_max_size()))
    }

    /// Override the checkout timeout.
    #[must_use]
    pub fn with_checkout_timeout(mut self, timeout: Duration) -> Self {
        self.checkout_timeout = timeout;
        self
    }

    /// Database URL the pool connects to.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Upper bound on open connections.
    #[must_use]
    pub fn max_size(&self) -> u32 {
        self.max_size
    }
}

/// Cloneable handle to the connection pool.
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<AsyncPgConnection>,
    checkout_timeout: Duration,
}

impl DbPool {
    /// Build a pool from `config`. No connection is opened until first use.
    ///
    /// # Errors
    /// Returns [`PoolError::Build`] when the pool cannot be constructed.
    pub async fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(config.database_url);
        let inner = Pool::builder()
            .max_size(config.max_size)
            .connection_timeout(config.checkout_timeout)
            .build(manager)
            .await
            .map_err(|err| PoolError::Build {
                message: err.to_string(),
            })?;

        Ok(Self {
            inner,
            checkout_timeout: config.checkout_timeout,
        })
    }

    /// Check out a connection.
    ///
    /// # Errors
    /// [`PoolError::Timeout`] when the pool stays exhausted past the checkout
    /// timeout, [`PoolError::Connect`] when the database refuses a new
    /// connection.
    pub async fn get(&self) -> Result<PooledConnection<'_, AsyncPgConnection>, PoolError> {
        self.inner.get().await.map_err(|err| match err {
            RunError::TimedOut => PoolError::Timeout {
                timeout: self.checkout_timeout,
            },
            RunError::User(err) => PoolError::Connect {
                message: err.to_string(),
            },
        })
    }
}
