use sea_orm_migration::prelude::*;

mod m20240101_000001_create_members_table;
mod m20240101_000002_create_printer_queue_table;
mod m20240101_000003_create_applications_table;
mod m20240101_000004_create_audit_logs_table;

/// Database migrator for SeaORM
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_members_table::Migration),
            Box::new(m20240101_000002_create_printer_queue_table::Migration),
            Box::new(m20240101_000003_create_applications_table::Migration),
            Box::new(m20240101_000004_create_audit_logs_table::Migration),
        ]
    }
}
