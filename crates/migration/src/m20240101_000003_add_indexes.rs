use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Country: region filter
        manager
            .create_index(
                Index::create()
                    .name("idx_country_region")
                    .table(Country::Table)
                    .col(Country::Region)
                    .to_owned(),
            )
            .await?;

        // Country: alpha2 lookups and registration check
        manager
            .create_index(
                Index::create()
                    .name("idx_country_alpha2")
                    .table(Country::Table)
                    .col(Country::Alpha2)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_country_region").table(Country::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_country_alpha2").table(Country::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Country { Table, Region, Alpha2 }
