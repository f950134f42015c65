//! Backend entry-point: loads settings, prepares the store and serves the
//! employee REST API.

mod server;

use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use employees_backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use employees_backend::settings::ServerSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings =
        ServerSettings::load().map_err(|err| eyre!("failed to load settings: {err}"))?;
    let mut config = ServerConfig::new(settings.bind_addr()?, settings.allowed_origins());

    if let Some(pool_config) = PoolConfig::from_settings(&settings) {
        run_pending_migrations(pool_config.database_url())
            .await
            .wrap_err("failed to migrate the employee database")?;
        let pool = DbPool::new(pool_config)
            .await
            .wrap_err("failed to build the database pool")?;
        config = config.with_db_pool(pool);
    }

    create_server(config)?.await?;
    Ok(())
}
