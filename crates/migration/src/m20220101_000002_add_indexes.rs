use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Automobile: composite index backing the color/make substring filter
        manager
            .create_index(
                Index::create()
                    .name("idx_automobile_color_make")
                    .table(Automobile::Table)
                    .col(Automobile::Color)
                    .col(Automobile::Make)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_automobile_color_make").table(Automobile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Automobile { Table, Color, Make }
