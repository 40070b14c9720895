//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_vehicles;
mod m20250101_000002_create_cameras;
mod m20250101_000003_create_gates;
mod m20250101_000004_create_access_logs;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_vehicles::Migration),
            Box::new(m20250101_000002_create_cameras::Migration),
            Box::new(m20250101_000003_create_gates::Migration),
            Box::new(m20250101_000004_create_access_logs::Migration),
        ]
    }
}
