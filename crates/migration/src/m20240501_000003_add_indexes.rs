//! Indexes for the listing query: address city/district filters and the
//! created_at sort key.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_address_city")
                    .table(Address::Table)
                    .col(Address::City)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_address_district")
                    .table(Address::Table)
                    .col(Address::District)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_shelter_created_at")
                    .table(Shelter::Table)
                    .col(Shelter::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_address_city").table(Address::Table).to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop().name("idx_address_district").table(Address::Table).to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop().name("idx_shelter_created_at").table(Shelter::Table).to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Address { Table, City, District }

#[derive(DeriveIden)]
enum Shelter { Table, CreatedAt }
