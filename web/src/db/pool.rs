#[cfg(feature = "ssr")]
use sqlx::postgres::PgPoolOptions;
#[cfg(feature = "ssr")]
use sqlx::{PgPool, Pool, Postgres};
#[cfg(feature = "ssr")]
use std::sync::OnceLock;

#[cfg(feature = "ssr")]
use crate::config::AppConfig;

#[cfg(feature = "ssr")]
static DB_POOL: OnceLock<PgPool> = OnceLock::new();

#[cfg(feature = "ssr")]
pub async fn init_pool(config: &AppConfig) -> Result<(), sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await?;

    DB_POOL.set(pool).map_err(|_| {
        sqlx::Error::Configuration(
            "Database pool already initialized".to_string().into(),
        )
    })?;

    tracing::debug!(
        max_connections = config.database_max_connections,
        "database pool ready"
    );
    Ok(())
}

#[cfg(feature = "ssr")]
pub fn get_pool() -> Result<&'static Pool<Postgres>, sqlx::Error> {
    DB_POOL.get().ok_or(sqlx::Error::PoolClosed)
}
