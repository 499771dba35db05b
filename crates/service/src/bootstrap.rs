//! One-time store initialization: schema migration plus first-boot seed
//! data. Invoked once at process start with the loaded configuration;
//! nothing here relies on ambient global state.

use configs::AppConfig;
use migration::MigratorTrait;
use models::menu_item::{self, Entity as MenuItemEntity, MenuItemInput};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use tracing::info;

use crate::errors::ServiceError;

/// Rows present after the first boot of a non-test environment.
fn seed_items() -> Vec<MenuItemInput> {
    vec![
        MenuItemInput {
            name: "Margherita Pizza".into(),
            description: Some("Classic pizza with tomato sauce, mozzarella and basil".into()),
            price: 9.99,
            category: "Pizza".into(),
            dietary_tag: Some("Vegetarian".into()),
        },
        MenuItemInput {
            name: "Chicken Burger".into(),
            description: Some("Grilled chicken breast with lettuce and garlic mayo".into()),
            price: 12.50,
            category: "Burger".into(),
            dietary_tag: None,
        },
        MenuItemInput {
            name: "Caesar Salad".into(),
            description: Some("Romaine lettuce, parmesan, croutons and Caesar dressing".into()),
            price: 8.75,
            category: "Salad".into(),
            dietary_tag: Some("Contains Gluten".into()),
        },
    ]
}

/// Bring the store up to the current schema and seed it on first boot.
/// Test environments get an empty store; seeding is also skipped when any
/// rows already exist, so restarts never duplicate data.
pub async fn init_store(db: &DatabaseConnection, cfg: &AppConfig) -> Result<(), ServiceError> {
    migration::Migrator::up(db, None)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;

    if cfg.environment.is_test() {
        return Ok(());
    }
    let existing = MenuItemEntity::find()
        .count(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if existing > 0 {
        return Ok(());
    }
    let items = seed_items();
    let count = items.len();
    for input in &items {
        menu_item::create(db, input).await?;
    }
    info!(count, "seeded menu items");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::db::connect_with_config;

    fn config_for(environment: configs::Environment) -> AppConfig {
        AppConfig { environment, ..AppConfig::default() }
    }

    async fn empty_db() -> Result<DatabaseConnection, anyhow::Error> {
        // init_store runs the migrations itself
        Ok(connect_with_config(&configs::DatabaseConfig::ephemeral()).await?)
    }

    #[tokio::test]
    async fn seeds_three_rows_outside_test_env() -> Result<(), anyhow::Error> {
        let db = empty_db().await?;
        init_store(&db, &config_for(configs::Environment::Development)).await?;

        let rows = MenuItemEntity::find().all(&db).await?;
        assert_eq!(rows.len(), 3);
        let names: Vec<&str> = rows.iter().map(|m| m.name.as_str()).collect();
        assert!(names.contains(&"Margherita Pizza"));
        assert!(names.contains(&"Chicken Burger"));
        assert!(names.contains(&"Caesar Salad"));
        assert!(rows.iter().all(|m| m.price > 0.0));
        Ok(())
    }

    #[tokio::test]
    async fn test_environment_gets_an_empty_store() -> Result<(), anyhow::Error> {
        let db = empty_db().await?;
        init_store(&db, &config_for(configs::Environment::Test)).await?;

        let count = MenuItemEntity::find().count(&db).await?;
        assert_eq!(count, 0);
        Ok(())
    }

    #[tokio::test]
    async fn reinit_does_not_duplicate_seed_rows() -> Result<(), anyhow::Error> {
        let db = empty_db().await?;
        let cfg = config_for(configs::Environment::Development);
        init_store(&db, &cfg).await?;
        init_store(&db, &cfg).await?;

        let count = MenuItemEntity::find().count(&db).await?;
        assert_eq!(count, 3);
        Ok(())
    }
}
