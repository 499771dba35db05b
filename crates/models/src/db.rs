use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Connect using `DATABASE_URL` (or the local development default).
pub async fn connect() -> anyhow::Result<DatabaseConnection> {
    let cfg = configs::DatabaseConfig::from_env();
    connect_with_config(&cfg).await
}

/// Connect applying pool sizing and timeouts from configuration.
/// Store calls are bounded by the acquire/connect timeouts configured
/// here; expiry surfaces as a database error to the caller.
pub async fn connect_with_config(cfg: &configs::DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(cfg.url.clone());
    opts.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    let db = Database::connect(opts).await?;
    Ok(db)
}
