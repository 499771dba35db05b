use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // MenuItem: index on category for the category filter
        manager
            .create_index(
                Index::create()
                    .name("idx_menu_item_category")
                    .table(MenuItem::Table)
                    .col(MenuItem::Category)
                    .to_owned(),
            )
            .await?;

        // MenuItem: index on price for range scans
        manager
            .create_index(
                Index::create()
                    .name("idx_menu_item_price")
                    .table(MenuItem::Table)
                    .col(MenuItem::Price)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_menu_item_price").table(MenuItem::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_menu_item_category").table(MenuItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MenuItem { Table, Category, Price }
