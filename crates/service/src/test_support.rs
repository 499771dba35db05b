#![cfg(test)]
use migration::MigratorTrait;
use models::db::connect_with_config;
use sea_orm::DatabaseConnection;

/// Fresh, isolated in-memory store per call; it lives exactly as long as
/// the returned connection pool.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = connect_with_config(&configs::DatabaseConfig::ephemeral()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
