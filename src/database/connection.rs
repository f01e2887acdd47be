use std::{str::FromStr, time::Duration};

use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
};

use crate::{config::DatabaseConfig, error::Result};

pub async fn create_pool(config: &DatabaseConfig) -> Result<SqlitePool> {
    let in_memory = config.url.contains(":memory:");

    let mut options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);
    if !in_memory {
        options = options.journal_mode(SqliteJournalMode::Wal);
    }

    // Every connection to `sqlite::memory:` opens its own empty database, so
    // pin the pool to one connection that is never recycled.
    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
    } else {
        SqlitePoolOptions::new().max_connections(config.max_connections)
    };

    let pool = pool_options.connect_with(options).await?;

    sqlx::migrate!().run(&pool).await?;

    tracing::info!(
        "Database connection established with {} max connections",
        if in_memory { 1 } else { config.max_connections }
    );

    Ok(pool)
}

pub async fn check_health(pool: &SqlitePool) -> Result<()> {
    sqlx::query("SELECT 1").fetch_one(pool).await?;
    Ok(())
}

#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    create_pool(&DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
    })
    .await
    .expect("in-memory database")
}

/// File-backed pool with several connections, for tests that need real
/// concurrent writers.
#[cfg(test)]
pub(crate) async fn test_file_pool(dir: &std::path::Path) -> SqlitePool {
    create_pool(&DatabaseConfig {
        url: format!("sqlite://{}", dir.join("storefront.db").display()),
        max_connections: 8,
    })
    .await
    .expect("file database")
}
