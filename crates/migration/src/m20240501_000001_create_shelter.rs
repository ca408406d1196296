//! Create `shelter` table.
//!
//! Root entity for the registry; `address` references it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Shelter::Table)
                    .if_not_exists()
                    .col(uuid(Shelter::Id).primary_key())
                    .col(string_len(Shelter::Name, 255).not_null())
                    .col(string_len(Shelter::Type, 16).not_null())
                    .col(timestamp_with_time_zone(Shelter::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Shelter::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Shelter { Table, Id, Name, Type, CreatedAt }
