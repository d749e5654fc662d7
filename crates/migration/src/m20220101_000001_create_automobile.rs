//! Create `automobile` table.
//!
//! Single inventory table; VIN carries the natural unique key, `id` is the
//! generated primary key.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Automobile::Table)
                    .if_not_exists()
                    .col(uuid(Automobile::Id).primary_key())
                    .col(string_len(Automobile::Make, 64).not_null())
                    .col(string_len(Automobile::Model, 64).not_null())
                    .col(integer(Automobile::Year).not_null())
                    .col(string_len(Automobile::Vin, 17).unique_key().not_null())
                    .col(string_len_null(Automobile::Color, 32))
                    .col(big_integer_null(Automobile::Price))
                    .col(string_len_null(Automobile::Preowned, 16))
                    .col(string_len_null(Automobile::Grade, 16))
                    .col(timestamp_with_time_zone(Automobile::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Automobile::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Automobile::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Automobile {
    Table,
    Id,
    Make,
    Model,
    Year,
    Vin,
    Color,
    Price,
    Preowned,
    Grade,
    CreatedAt,
    UpdatedAt,
}
