//! Create `user` table.
//!
//! `country_code` references `country.alpha2` by value only; the service
//! checks it at registration, no FK is declared.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(string_len(User::Login, 30).primary_key())
                    .col(string_len(User::Email, 50).not_null())
                    .col(text_null(User::Password))
                    .col(string_len(User::CountryCode, 2).not_null())
                    .col(boolean(User::IsPublic).not_null())
                    .col(string_null(User::Phone))
                    .col(text_null(User::Image))
                    .col(timestamp_with_time_zone(User::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(User::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum User { Table, Login, Email, Password, CountryCode, IsPublic, Phone, Image, CreatedAt }
