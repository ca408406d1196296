//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240501_000001_create_shelter;
mod m20240501_000002_create_address;
mod m20240501_000003_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240501_000001_create_shelter::Migration),
            Box::new(m20240501_000002_create_address::Migration),
            // Indexes should always be applied last
            Box::new(m20240501_000003_add_indexes::Migration),
        ]
    }
}
