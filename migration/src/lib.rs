pub use sea_orm_migration::prelude::*;

mod m20260823_000001_master_shop;
mod m20260823_000002_allocation_shop;
mod m20260823_000003_setting;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260823_000001_master_shop::Migration),
            Box::new(m20260823_000002_allocation_shop::Migration),
            Box::new(m20260823_000003_setting::Migration),
        ]
    }
}
