pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_users_table;
mod m20240601_000002_create_planets_table;
mod m20240601_000003_create_characters_table;
mod m20240601_000004_create_vehicles_table;
mod m20240601_000005_create_favorite_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_users_table::Migration),
            Box::new(m20240601_000002_create_planets_table::Migration),
            Box::new(m20240601_000003_create_characters_table::Migration),
            Box::new(m20240601_000004_create_vehicles_table::Migration),
            Box::new(m20240601_000005_create_favorite_tables::Migration),
        ]
    }
}
