//! Create `country` table.
//!
//! Reference data keyed by country name; seeded outside the request path.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Country::Table)
                    .if_not_exists()
                    .col(string_len(Country::Name, 100).primary_key())
                    .col(string_len(Country::Alpha2, 2).not_null())
                    .col(string_len(Country::Alpha3, 3).not_null())
                    .col(string_len_null(Country::Region, 100))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Country::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Country { Table, Name, Alpha2, Alpha3, Region }
