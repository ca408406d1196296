//! Create `address` table with FK to `shelter`.
//!
//! One address per shelter; lifecycle follows the owning shelter.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Address::Table)
                    .if_not_exists()
                    .col(uuid(Address::Id).primary_key())
                    .col(uuid(Address::ShelterId).unique_key().not_null())
                    .col(string_len(Address::Street, 255).not_null())
                    .col(string_len(Address::Number, 32).not_null())
                    .col(string_len(Address::District, 128).not_null())
                    .col(string_len(Address::City, 128).not_null())
                    // Explicitly define nullable reference_point to avoid conflicting NULL/NOT NULL
                    .col(
                        ColumnDef::new(Address::ReferencePoint)
                            .string_len(255)
                            .null(),
                    )
                    .col(string_len(Address::State, 2).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_address_shelter")
                            .from(Address::Table, Address::ShelterId)
                            .to(Shelter::Table, Shelter::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Address::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Address { Table, Id, ShelterId, Street, Number, District, City, ReferencePoint, State }

#[derive(DeriveIden)]
enum Shelter { Table, Id }
