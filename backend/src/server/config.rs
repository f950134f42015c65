//! HTTP server configuration object.

use std::net::SocketAddr;

use employees_backend::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) allowed_origins: Vec<String>,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a configuration serving the in-memory store.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, allowed_origins: Vec<String>) -> Self {
        Self {
            bind_addr,
            allowed_origins,
            db_pool: None,
        }
    }

    /// Serve records from PostgreSQL through `pool`.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}
