use crate::db::connect_with_config;
use crate::menu_item::{self, MenuItemInput};
use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};

/// Fresh, isolated in-memory store with the schema applied.
async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect_with_config(&configs::DatabaseConfig::ephemeral()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

fn sample_input() -> MenuItemInput {
    MenuItemInput {
        name: "Margherita Pizza".into(),
        description: Some("Tomato, mozzarella, basil".into()),
        price: 9.99,
        category: "Pizza".into(),
        dietary_tag: Some("Vegetarian".into()),
    }
}

#[tokio::test]
async fn menu_item_create_and_read_back() -> Result<()> {
    let db = setup_test_db().await?;

    let created = menu_item::create(&db, &sample_input()).await?;
    assert!(created.id > 0);
    assert_eq!(created.name, "Margherita Pizza");
    assert_eq!(created.price, 9.99);

    let found = menu_item::Entity::find_by_id(created.id).one(&db).await?;
    let found = found.expect("created item should be readable");
    assert_eq!(found, created);

    let by_category = menu_item::Entity::find()
        .filter(menu_item::Column::Category.eq("Pizza"))
        .one(&db)
        .await?;
    assert_eq!(by_category.map(|m| m.id), Some(created.id));
    Ok(())
}

#[tokio::test]
async fn menu_item_ids_are_store_assigned_and_increasing() -> Result<()> {
    let db = setup_test_db().await?;

    let a = menu_item::create(&db, &sample_input()).await?;
    let mut second = sample_input();
    second.name = "Pepperoni Pizza".into();
    let b = menu_item::create(&db, &second).await?;

    assert_ne!(a.id, b.id);
    assert!(b.id > a.id);
    Ok(())
}

#[tokio::test]
async fn menu_item_delete_removes_row() -> Result<()> {
    let db = setup_test_db().await?;

    let created = menu_item::create(&db, &sample_input()).await?;
    let res = menu_item::Entity::delete_by_id(created.id).exec(&db).await?;
    assert_eq!(res.rows_affected, 1);

    let after = menu_item::Entity::find_by_id(created.id).one(&db).await?;
    assert!(after.is_none());
    Ok(())
}

#[tokio::test]
async fn invalid_input_persists_nothing() -> Result<()> {
    let db = setup_test_db().await?;

    let mut bad = sample_input();
    bad.name = String::new();
    bad.price = -1.0;
    assert!(menu_item::create(&db, &bad).await.is_err());

    let count = menu_item::Entity::find().count(&db).await?;
    assert_eq!(count, 0);
    Ok(())
}
