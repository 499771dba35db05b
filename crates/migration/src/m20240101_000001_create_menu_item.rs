//! Create `menu_item` table.
//!
//! One row per menu item; ids are store-assigned and immutable.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MenuItem::Table)
                    .if_not_exists()
                    .col(pk_auto(MenuItem::Id))
                    .col(string_len(MenuItem::Name, 100).not_null())
                    .col(
                        ColumnDef::new(MenuItem::Description)
                            .string_len(500)
                            .null(),
                    )
                    .col(double(MenuItem::Price).not_null())
                    .col(string_len(MenuItem::Category, 50).not_null())
                    .col(
                        ColumnDef::new(MenuItem::DietaryTag)
                            .string_len(100)
                            .null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(MenuItem::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum MenuItem { Table, Id, Name, Description, Price, Category, DietaryTag }
